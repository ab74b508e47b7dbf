//! Modelo de SiteSettings
//!
//! Tabla clave/valor para configuración del sitio. El valor es JSON
//! serializado como texto (clave `contact_info`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SiteSetting {
    pub id: Uuid,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Clave de la configuración de contacto del sitio
pub const CONTACT_INFO_KEY: &str = "contact_info";
