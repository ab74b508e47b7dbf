//! Controllers del sistema
//!
//! Validación y reglas de negocio entre las rutas y los repositorios.
//! Se construyen por request a partir del estado compartido.

pub mod auth_controller;
pub mod booking_controller;
pub mod contact_controller;
pub mod fleet_type_controller;
pub mod hero_controller;
pub mod homepage_section_controller;
pub mod page_controller;
pub mod service_controller;
pub mod site_settings_controller;
pub mod upload_controller;
pub mod vehicle_controller;
