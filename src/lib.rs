//! Backend de reservas y CMS para un negocio de chofer/alquiler de
//! vehículos de lujo.
//!
//! API REST JSON bajo /api/... con autenticación JWT para el panel de
//! administración, persistencia en PostgreSQL vía sqlx y proveedores
//! externos opcionales (Resend para email, Supabase para imágenes).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
