use sqlx::PgPool;

use crate::models::site_settings::SiteSetting;
use crate::utils::errors::AppError;

pub struct SiteSettingsRepository {
    pool: PgPool,
}

impl SiteSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<SiteSetting>, AppError> {
        let setting = sqlx::query_as::<_, SiteSetting>("SELECT * FROM site_settings WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(setting)
    }

    pub async fn upsert(&self, key: &str, value: &str) -> Result<SiteSetting, AppError> {
        let setting = sqlx::query_as::<_, SiteSetting>(
            r#"
            INSERT INTO site_settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await?;

        Ok(setting)
    }
}
