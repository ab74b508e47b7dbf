use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

fn default_true() -> bool {
    true
}

/// Request para crear un vehículo del catálogo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    // Acepta cualquier string definido por los fleet types
    #[validate(length(min = 1, max = 50))]
    pub category: String,

    pub description: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub price: Option<Decimal>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,

    pub description: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    pub price: Option<Decimal>,

    pub features: Option<Vec<String>>,

    pub is_active: Option<bool>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<Decimal>,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Resumen de vehículo embebido en las reservas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub image_url: Option<String>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            category: vehicle.category,
            description: vehicle.description,
            image_url: vehicle.image_url,
            price: vehicle.price,
            features: vehicle.features,
            is_active: vehicle.is_active,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
