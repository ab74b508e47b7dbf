use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fleet_type::FleetType;

fn default_true() -> bool {
    true
}

/// Request para crear un fleet type
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFleetTypeRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    pub description: Option<String>,

    pub icon: Option<String>,

    #[serde(default, rename = "order")]
    pub sort_order: i32,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request para actualizar un fleet type existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFleetTypeRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub icon: Option<String>,

    #[serde(rename = "order")]
    pub sort_order: Option<i32>,

    pub is_active: Option<bool>,
}

/// Response de fleet type para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetTypeResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FleetType> for FleetTypeResponse {
    fn from(fleet_type: FleetType) -> Self {
        Self {
            id: fleet_type.id,
            name: fleet_type.name,
            description: fleet_type.description,
            icon: fleet_type.icon,
            sort_order: fleet_type.sort_order,
            is_active: fleet_type.is_active,
            created_at: fleet_type.created_at,
            updated_at: fleet_type.updated_at,
        }
    }
}
