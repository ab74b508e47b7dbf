//! Modelo de HomepageSection
//!
//! Secciones de contenido de la homepage identificadas por clave
//! (luxury-choice, fleet-preview, services-preview).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HomepageSection {
    pub id: Uuid,
    pub section_key: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
