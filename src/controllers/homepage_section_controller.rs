use sqlx::PgPool;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::homepage_section_dto::{
    CreateSectionRequest, SectionResponse, UpsertSectionRequest,
};
use crate::repositories::homepage_section_repository::HomepageSectionRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct HomepageSectionController {
    repository: HomepageSectionRepository,
}

impl HomepageSectionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: HomepageSectionRepository::new(pool),
        }
    }

    pub async fn list(&self, show_all: bool) -> Result<Vec<SectionResponse>, AppError> {
        let sections = self.repository.find_all(!show_all).await?;
        Ok(sections.into_iter().map(SectionResponse::from).collect())
    }

    pub async fn get_by_key(&self, key: &str) -> Result<SectionResponse, AppError> {
        let section = self
            .repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| not_found_error("Section", key))?;

        Ok(section.into())
    }

    pub async fn create(
        &self,
        request: CreateSectionRequest,
    ) -> Result<ApiResponse<SectionResponse>, AppError> {
        request.validate()?;

        if self.repository.find_by_key(&request.section_key).await?.is_some() {
            return Err(conflict_error("Section", "key", &request.section_key));
        }

        let section = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            section.into(),
            "Sección creada exitosamente".to_string(),
        ))
    }

    /// Upsert por clave: crea la sección si todavía no existe
    pub async fn upsert(
        &self,
        key: &str,
        request: UpsertSectionRequest,
    ) -> Result<ApiResponse<SectionResponse>, AppError> {
        request.validate()?;

        let section = self.repository.upsert(key, request).await?;

        Ok(ApiResponse::success_with_message(
            section.into(),
            "Sección actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.repository.delete_by_key(key).await
    }
}
