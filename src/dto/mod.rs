//! DTOs del sistema
//!
//! Requests y responses de la API. Los campos se serializan en
//! camelCase para mantener el contrato con el frontend existente.

pub mod auth_dto;
pub mod booking_dto;
pub mod common;
pub mod contact_dto;
pub mod fleet_type_dto;
pub mod hero_dto;
pub mod homepage_section_dto;
pub mod page_dto;
pub mod service_dto;
pub mod site_settings_dto;
pub mod upload_dto;
pub mod vehicle_dto;

pub use common::ApiResponse;
