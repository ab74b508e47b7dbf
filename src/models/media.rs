//! Modelo de Media
//!
//! Registro de imágenes subidas al storage configurado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Media {
    pub id: Uuid,
    pub url: String,
    pub filename: String,
    pub media_type: String,
    pub created_at: DateTime<Utc>,
}
