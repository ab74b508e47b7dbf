use sqlx::PgPool;
use tracing::error;
use validator::Validate;

use crate::dto::site_settings_dto::ContactInfo;
use crate::models::site_settings::CONTACT_INFO_KEY;
use crate::repositories::site_settings_repository::SiteSettingsRepository;
use crate::utils::errors::AppError;

pub struct SiteSettingsController {
    repository: SiteSettingsRepository,
}

impl SiteSettingsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SiteSettingsRepository::new(pool),
        }
    }

    /// Información de contacto; valores por defecto si no existe o no
    /// se puede leer (la web pública nunca debe quedarse sin datos).
    pub async fn get_contact_info(&self) -> ContactInfo {
        match self.repository.find_by_key(CONTACT_INFO_KEY).await {
            Ok(Some(setting)) => serde_json::from_str(&setting.value).unwrap_or_else(|e| {
                error!("contact_info corrupto en site_settings: {}", e);
                ContactInfo::default_content()
            }),
            Ok(None) => ContactInfo::default_content(),
            Err(e) => {
                error!("Error leyendo site settings: {}", e);
                ContactInfo::default_content()
            }
        }
    }

    pub async fn update_contact_info(
        &self,
        request: ContactInfo,
    ) -> Result<ContactInfo, AppError> {
        request.validate()?;

        let value = serde_json::to_string(&request)
            .map_err(|e| AppError::Internal(format!("Error serializando contact info: {}", e)))?;

        self.repository.upsert(CONTACT_INFO_KEY, &value).await?;

        Ok(request)
    }
}
