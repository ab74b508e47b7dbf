use serde::{Deserialize, Serialize};
use validator::Validate;

/// Información de contacto del sitio, guardada como JSON en site_settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactInfo {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub phone: String,

    #[validate(length(min = 1))]
    pub whatsapp: String,

    #[validate(length(min = 1))]
    pub address: String,
}

impl ContactInfo {
    /// Valores por defecto cuando la configuración todavía no existe
    pub fn default_content() -> Self {
        Self {
            email: "info@alsama.ae".to_string(),
            phone: "+971 4 123 4567".to_string(),
            whatsapp: "+971 50 123 4567".to_string(),
            address: "Dubai, United Arab Emirates".to_string(),
        }
    }
}
