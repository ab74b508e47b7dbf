use sqlx::PgPool;

use crate::dto::homepage_section_dto::{CreateSectionRequest, UpsertSectionRequest};
use crate::models::homepage_section::HomepageSection;
use crate::utils::errors::AppError;

pub struct HomepageSectionRepository {
    pool: PgPool,
}

impl HomepageSectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self, only_active: bool) -> Result<Vec<HomepageSection>, AppError> {
        let query = if only_active {
            "SELECT * FROM homepage_sections WHERE is_active = TRUE ORDER BY sort_order ASC"
        } else {
            "SELECT * FROM homepage_sections ORDER BY sort_order ASC"
        };

        let sections = sqlx::query_as::<_, HomepageSection>(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(sections)
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<HomepageSection>, AppError> {
        let section = sqlx::query_as::<_, HomepageSection>(
            "SELECT * FROM homepage_sections WHERE section_key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(section)
    }

    pub async fn create(&self, request: CreateSectionRequest) -> Result<HomepageSection, AppError> {
        let section = sqlx::query_as::<_, HomepageSection>(
            r#"
            INSERT INTO homepage_sections (section_key, title, description, button_text,
                                           button_link, is_active, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(request.section_key)
        .bind(request.title)
        .bind(request.description)
        .bind(request.button_text)
        .bind(request.button_link)
        .bind(request.is_active)
        .bind(request.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(section)
    }

    /// Crear o actualizar una sección por su clave
    pub async fn upsert(
        &self,
        key: &str,
        request: UpsertSectionRequest,
    ) -> Result<HomepageSection, AppError> {
        match self.find_by_key(key).await? {
            Some(current) => {
                let section = sqlx::query_as::<_, HomepageSection>(
                    r#"
                    UPDATE homepage_sections
                    SET title = $2, description = $3, button_text = $4, button_link = $5,
                        is_active = $6, sort_order = $7, updated_at = now()
                    WHERE section_key = $1
                    RETURNING *
                    "#,
                )
                .bind(key)
                .bind(request.title.or(current.title))
                .bind(request.description.or(current.description))
                .bind(request.button_text.or(current.button_text))
                .bind(request.button_link.or(current.button_link))
                .bind(request.is_active.unwrap_or(current.is_active))
                .bind(request.sort_order.unwrap_or(current.sort_order))
                .fetch_one(&self.pool)
                .await?;

                Ok(section)
            }
            None => {
                let section = sqlx::query_as::<_, HomepageSection>(
                    r#"
                    INSERT INTO homepage_sections (section_key, title, description, button_text,
                                                   button_link, is_active, sort_order)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING *
                    "#,
                )
                .bind(key)
                .bind(request.title)
                .bind(request.description)
                .bind(request.button_text)
                .bind(request.button_link)
                .bind(request.is_active.unwrap_or(true))
                .bind(request.sort_order.unwrap_or(0))
                .fetch_one(&self.pool)
                .await?;

                Ok(section)
            }
        }
    }

    pub async fn delete_by_key(&self, key: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM homepage_sections WHERE section_key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Section not found".to_string()));
        }

        Ok(())
    }
}
