//! Rutas de la API
//!
//! Un router por recurso bajo /api/..., más el health check y el
//! serving estático de uploads locales. Las rutas de mutación van
//! detrás del middleware JWT + admin.

pub mod auth_routes;
pub mod booking_routes;
pub mod contact_routes;
pub mod fleet_type_routes;
pub mod hero_routes;
pub mod homepage_section_routes;
pub mod page_routes;
pub mod service_routes;
pub mod site_settings_routes;
pub mod upload_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

// Valores de Cache-Control de los GET públicos
pub(crate) const CACHE_PUBLIC_5M: &str = "public, s-maxage=300, stale-while-revalidate=600";
pub(crate) const CACHE_PUBLIC_1M: &str = "public, s-maxage=60, stale-while-revalidate=120";

/// Router de la API completa
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes::create_auth_router(state.clone()))
        .nest("/api/booking", booking_routes::create_booking_router(state.clone()))
        .nest("/api/cms/vehicles", vehicle_routes::create_vehicle_router(state.clone()))
        .nest("/api/cms/services", service_routes::create_service_router(state.clone()))
        .nest("/api/cms/pages", page_routes::create_page_router(state.clone()))
        .nest("/api/cms/fleet-types", fleet_type_routes::create_fleet_type_router(state.clone()))
        .nest("/api/cms/hero", hero_routes::create_hero_router(state.clone()))
        .nest(
            "/api/cms/homepage-sections",
            homepage_section_routes::create_homepage_section_router(state.clone()),
        )
        .nest(
            "/api/cms/site-settings",
            site_settings_routes::create_site_settings_router(state.clone()),
        )
        .nest("/api/contact", contact_routes::create_contact_router())
        .nest("/api/upload", upload_routes::create_upload_router(state))
}

/// Aplicación completa con middleware y estado
pub fn create_app(state: AppState) -> Router {
    let upload_dir = state.config.upload_dir.clone();

    Router::new()
        .route("/health", get(health_check))
        .merge(create_api_router(state.clone()))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(cors_middleware(&state.config))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "chauffeur-booking-api",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
