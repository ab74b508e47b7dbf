//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod booking;
pub mod fleet_type;
pub mod hero;
pub mod homepage_section;
pub mod media;
pub mod page;
pub mod service;
pub mod site_settings;
pub mod user;
pub mod vehicle;
