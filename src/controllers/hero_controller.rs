use sqlx::PgPool;
use tracing::error;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::hero_dto::{CreateHeroRequest, HeroResponse, UpdateHeroRequest};
use crate::repositories::hero_repository::HeroRepository;
use crate::utils::errors::AppError;

pub struct HeroController {
    repository: HeroRepository,
}

impl HeroController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: HeroRepository::new(pool),
        }
    }

    /// Hero activo, o la copy por defecto si no hay nada cargado.
    /// Un error de base de datos también devuelve el default para que
    /// la homepage nunca quede vacía.
    pub async fn get(&self) -> HeroResponse {
        match self.repository.find_active().await {
            Ok(Some(hero)) => hero.into(),
            Ok(None) => HeroResponse::default_content(),
            Err(e) => {
                error!("Error obteniendo hero content: {}", e);
                HeroResponse::default_content()
            }
        }
    }

    /// Crear un hero nuevo desactivando los anteriores
    pub async fn create(
        &self,
        request: CreateHeroRequest,
    ) -> Result<ApiResponse<HeroResponse>, AppError> {
        request.validate()?;

        self.repository.deactivate_all().await?;
        let hero = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            hero.into(),
            "Hero content creado exitosamente".to_string(),
        ))
    }

    /// Actualización parcial del hero activo
    pub async fn update(
        &self,
        request: UpdateHeroRequest,
    ) -> Result<ApiResponse<HeroResponse>, AppError> {
        request.validate()?;

        let current = self
            .repository
            .find_active()
            .await?
            .ok_or_else(|| AppError::NotFound("No active hero content found".to_string()))?;

        let hero = self.repository.update(current.id, request).await?;

        Ok(ApiResponse::success_with_message(
            hero.into(),
            "Hero content actualizado exitosamente".to_string(),
        ))
    }
}
