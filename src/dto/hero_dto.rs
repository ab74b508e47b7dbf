use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::hero::HeroContent;

pub const DEFAULT_BUTTON_TEXT: &str = "EXPLORE OUR FLEET";
pub const DEFAULT_BUTTON_LINK: &str = "/fleet";

fn default_true() -> bool {
    true
}

fn default_button_text() -> String {
    DEFAULT_BUTTON_TEXT.to_string()
}

fn default_button_link() -> String {
    DEFAULT_BUTTON_LINK.to_string()
}

fn default_overlay_opacity() -> f64 {
    0.4
}

fn default_carousel_interval() -> i32 {
    5000
}

/// Request para crear el hero activo (desactiva los anteriores)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHeroRequest {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(length(min = 1))]
    pub subtitle: String,

    #[serde(default = "default_button_text")]
    pub button_text: String,

    #[serde(default = "default_button_link")]
    pub button_link: String,

    #[validate(url)]
    pub background_image_url: Option<String>,

    #[serde(default = "default_overlay_opacity")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub overlay_opacity: f64,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default)]
    pub enable_carousel: bool,

    #[serde(default = "default_carousel_interval")]
    #[validate(range(min = 1000, max = 30000))]
    pub carousel_interval: i32,

    #[serde(default)]
    pub carousel_images: Vec<String>,
}

/// Request parcial para actualizar el hero activo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHeroRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub subtitle: Option<String>,

    pub button_text: Option<String>,

    pub button_link: Option<String>,

    #[validate(url)]
    pub background_image_url: Option<String>,

    #[validate(range(min = 0.0, max = 1.0))]
    pub overlay_opacity: Option<f64>,

    pub is_active: Option<bool>,

    pub enable_carousel: Option<bool>,

    #[validate(range(min = 1000, max = 30000))]
    pub carousel_interval: Option<i32>,

    pub carousel_images: Option<Vec<String>>,
}

/// Response del hero; si no hay fila activa se devuelve la copy por defecto
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HeroResponse {
    /// Copy por defecto cuando el CMS todavía no tiene hero cargado
    pub fn default_content() -> Self {
        Self {
            id: None,
            title: "Experience Dubai in Unmatched Luxury".to_string(),
            subtitle: "Your journey to elegance begins here. Premium chauffeur services and exclusive vehicle rentals tailored for you.".to_string(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            button_link: DEFAULT_BUTTON_LINK.to_string(),
            background_image_url: None,
            overlay_opacity: 0.4,
            is_active: true,
            enable_carousel: false,
            carousel_interval: 5000,
            carousel_images: Vec::new(),
            updated_at: None,
        }
    }
}

impl From<HeroContent> for HeroResponse {
    fn from(hero: HeroContent) -> Self {
        // Los botones nunca se devuelven vacíos
        let button_text = if hero.button_text.trim().is_empty() {
            DEFAULT_BUTTON_TEXT.to_string()
        } else {
            hero.button_text
        };
        let button_link = if hero.button_link.trim().is_empty() {
            DEFAULT_BUTTON_LINK.to_string()
        } else {
            hero.button_link
        };

        Self {
            id: Some(hero.id),
            title: hero.title,
            subtitle: hero.subtitle,
            button_text,
            button_link,
            background_image_url: hero.background_image_url,
            overlay_opacity: hero.overlay_opacity,
            is_active: hero.is_active,
            enable_carousel: hero.enable_carousel,
            carousel_interval: hero.carousel_interval,
            carousel_images: hero.carousel_images,
            updated_at: Some(hero.updated_at),
        }
    }
}
