use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::page::Page;

fn default_true() -> bool {
    true
}

/// Request para crear una página del CMS
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    #[validate(custom = "crate::utils::validation::validate_slug")]
    pub slug: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    pub meta_title: Option<String>,

    pub meta_desc: Option<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request para actualizar una página existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    #[validate(custom = "crate::utils::validation::validate_slug")]
    pub slug: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,

    pub meta_title: Option<String>,

    pub meta_desc: Option<String>,

    pub is_active: Option<bool>,
}

/// Response de página para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub meta_title: Option<String>,
    pub meta_desc: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            id: page.id,
            slug: page.slug,
            title: page.title,
            content: page.content,
            meta_title: page.meta_title,
            meta_desc: page.meta_desc,
            is_active: page.is_active,
            created_at: page.created_at,
            updated_at: page.updated_at,
        }
    }
}
