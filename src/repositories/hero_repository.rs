use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::hero_dto::{CreateHeroRequest, UpdateHeroRequest};
use crate::models::hero::HeroContent;
use crate::utils::errors::AppError;

pub struct HeroRepository {
    pool: PgPool,
}

impl HeroRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hero activo más reciente
    pub async fn find_active(&self) -> Result<Option<HeroContent>, AppError> {
        let hero = sqlx::query_as::<_, HeroContent>(
            "SELECT * FROM hero_content WHERE is_active = TRUE ORDER BY updated_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(hero)
    }

    /// Desactivar todos los heroes activos antes de crear uno nuevo
    pub async fn deactivate_all(&self) -> Result<(), AppError> {
        sqlx::query("UPDATE hero_content SET is_active = FALSE, updated_at = now() WHERE is_active = TRUE")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn create(&self, request: CreateHeroRequest) -> Result<HeroContent, AppError> {
        let hero = sqlx::query_as::<_, HeroContent>(
            r#"
            INSERT INTO hero_content (title, subtitle, button_text, button_link,
                                      background_image_url, overlay_opacity, is_active,
                                      enable_carousel, carousel_interval, carousel_images)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(request.title)
        .bind(request.subtitle)
        .bind(request.button_text)
        .bind(request.button_link)
        .bind(request.background_image_url)
        .bind(request.overlay_opacity)
        .bind(request.is_active)
        .bind(request.enable_carousel)
        .bind(request.carousel_interval)
        .bind(request.carousel_images)
        .fetch_one(&self.pool)
        .await?;

        Ok(hero)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateHeroRequest,
    ) -> Result<HeroContent, AppError> {
        let current = sqlx::query_as::<_, HeroContent>("SELECT * FROM hero_content WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Hero content not found".to_string()))?;

        let hero = sqlx::query_as::<_, HeroContent>(
            r#"
            UPDATE hero_content
            SET title = $2, subtitle = $3, button_text = $4, button_link = $5,
                background_image_url = $6, overlay_opacity = $7, is_active = $8,
                enable_carousel = $9, carousel_interval = $10, carousel_images = $11,
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.title.unwrap_or(current.title))
        .bind(request.subtitle.unwrap_or(current.subtitle))
        .bind(request.button_text.unwrap_or(current.button_text))
        .bind(request.button_link.unwrap_or(current.button_link))
        .bind(request.background_image_url.or(current.background_image_url))
        .bind(request.overlay_opacity.unwrap_or(current.overlay_opacity))
        .bind(request.is_active.unwrap_or(current.is_active))
        .bind(request.enable_carousel.unwrap_or(current.enable_carousel))
        .bind(request.carousel_interval.unwrap_or(current.carousel_interval))
        .bind(request.carousel_images.unwrap_or(current.carousel_images))
        .fetch_one(&self.pool)
        .await?;

        Ok(hero)
    }
}
