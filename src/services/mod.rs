//! Services module
//!
//! Este módulo contiene las integraciones con servicios externos:
//! email transaccional (Resend) y storage de imágenes (Supabase o disco).

pub mod email_service;
pub mod storage_service;

pub use email_service::EmailService;
pub use storage_service::{storage_from_config, StorageProvider};
