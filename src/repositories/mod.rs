//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla. Todas las queries son runtime-checked
//! (`query_as` + bind) contra PostgreSQL.

pub mod booking_repository;
pub mod fleet_type_repository;
pub mod hero_repository;
pub mod homepage_section_repository;
pub mod media_repository;
pub mod page_repository;
pub mod service_repository;
pub mod site_settings_repository;
pub mod user_repository;
pub mod vehicle_repository;
