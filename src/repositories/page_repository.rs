use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::page_dto::{CreatePageRequest, UpdatePageRequest};
use crate::models::page::Page;
use crate::utils::errors::AppError;

pub struct PageRepository {
    pool: PgPool,
}

impl PageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreatePageRequest) -> Result<Page, AppError> {
        let page = sqlx::query_as::<_, Page>(
            r#"
            INSERT INTO pages (slug, title, content, meta_title, meta_desc, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.slug)
        .bind(request.title)
        .bind(request.content)
        .bind(request.meta_title)
        .bind(request.meta_desc)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(page)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Page>, AppError> {
        let page = sqlx::query_as::<_, Page>("SELECT * FROM pages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(page)
    }

    pub async fn find_all(&self) -> Result<Vec<Page>, AppError> {
        let pages = sqlx::query_as::<_, Page>("SELECT * FROM pages ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(pages)
    }

    pub async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM pages WHERE slug = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(&self, id: Uuid, request: UpdatePageRequest) -> Result<Page, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Page not found".to_string()))?;

        let page = sqlx::query_as::<_, Page>(
            r#"
            UPDATE pages
            SET slug = $2, title = $3, content = $4, meta_title = $5,
                meta_desc = $6, is_active = $7, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.slug.unwrap_or(current.slug))
        .bind(request.title.unwrap_or(current.title))
        .bind(request.content.unwrap_or(current.content))
        .bind(request.meta_title.or(current.meta_title))
        .bind(request.meta_desc.or(current.meta_desc))
        .bind(request.is_active.unwrap_or(current.is_active))
        .fetch_one(&self.pool)
        .await?;

        Ok(page)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Page not found".to_string()));
        }

        Ok(())
    }
}
