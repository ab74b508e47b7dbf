use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::page_dto::{CreatePageRequest, PageResponse, UpdatePageRequest};
use crate::repositories::page_repository::PageRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct PageController {
    repository: PageRepository,
}

impl PageController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PageRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreatePageRequest,
    ) -> Result<ApiResponse<PageResponse>, AppError> {
        request.validate()?;

        if self.repository.slug_exists(&request.slug, None).await? {
            return Err(conflict_error("Page", "slug", &request.slug));
        }

        let page = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            page.into(),
            "Página creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PageResponse, AppError> {
        let page = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Page", &id.to_string()))?;

        Ok(page.into())
    }

    pub async fn list(&self) -> Result<Vec<PageResponse>, AppError> {
        let pages = self.repository.find_all().await?;
        Ok(pages.into_iter().map(PageResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePageRequest,
    ) -> Result<ApiResponse<PageResponse>, AppError> {
        request.validate()?;

        if let Some(ref slug) = request.slug {
            if self.repository.slug_exists(slug, Some(id)).await? {
                return Err(conflict_error("Page", "slug", slug));
            }
        }

        let page = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            page.into(),
            "Página actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
