//! Modelo de FleetType
//!
//! Categorías de vehículos definidas por el admin. Los vehículos las
//! referencian por nombre (sin foreign key); el borrado se bloquea con
//! un conteo a nivel de aplicación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FleetType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
