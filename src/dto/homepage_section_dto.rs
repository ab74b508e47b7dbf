use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::homepage_section::HomepageSection;

fn default_true() -> bool {
    true
}

/// Request para crear una sección de homepage
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    #[validate(length(min = 1, max = 100))]
    pub section_key: String,

    pub title: Option<String>,

    pub description: Option<String>,

    pub button_text: Option<String>,

    pub button_link: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,

    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

/// Request para upsert de una sección por su clave
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertSectionRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    pub button_text: Option<String>,

    pub button_link: Option<String>,

    pub is_active: Option<bool>,

    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// Response de sección para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub id: Uuid,
    pub section_key: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub is_active: bool,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<HomepageSection> for SectionResponse {
    fn from(section: HomepageSection) -> Self {
        Self {
            id: section.id,
            section_key: section.section_key,
            title: section.title,
            description: section.description,
            button_text: section.button_text,
            button_link: section.button_link,
            is_active: section.is_active,
            sort_order: section.sort_order,
            created_at: section.created_at,
            updated_at: section.updated_at,
        }
    }
}

/// Query del listado de secciones
#[derive(Debug, Deserialize)]
pub struct SectionListQuery {
    pub all: Option<String>,
}

impl SectionListQuery {
    pub fn show_all(&self) -> bool {
        self.all.as_deref() == Some("true")
    }
}
