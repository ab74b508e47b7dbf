use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service::Service;

fn default_true() -> bool {
    true
}

/// Request para crear un servicio
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(custom = "crate::utils::validation::validate_slug")]
    pub slug: String,

    pub description: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request para actualizar un servicio existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_slug")]
    pub slug: Option<String>,

    pub description: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub features: Option<Vec<String>>,

    pub is_active: Option<bool>,
}

/// Response de servicio para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            title: service.title,
            slug: service.slug,
            description: service.description,
            image_url: service.image_url,
            features: service.features,
            is_active: service.is_active,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}
