use sqlx::PgPool;

use crate::models::media::Media;
use crate::utils::errors::AppError;

pub struct MediaRepository {
    pool: PgPool,
}

impl MediaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        url: &str,
        filename: &str,
        media_type: &str,
    ) -> Result<Media, AppError> {
        let media = sqlx::query_as::<_, Media>(
            r#"
            INSERT INTO media (url, filename, media_type)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(url)
        .bind(filename)
        .bind(media_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(media)
    }

    pub async fn find_recent(&self, limit: i64) -> Result<Vec<Media>, AppError> {
        let media =
            sqlx::query_as::<_, Media>("SELECT * FROM media ORDER BY created_at DESC LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;

        Ok(media)
    }
}
