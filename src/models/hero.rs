//! Modelo de HeroContent
//!
//! Banner principal de la homepage. Solo una fila puede estar activa;
//! crear un hero nuevo desactiva los anteriores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HeroContent {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    pub background_image_url: Option<String>,
    pub overlay_opacity: f64,
    pub is_active: bool,
    pub enable_carousel: bool,
    pub carousel_interval: i32,
    pub carousel_images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
