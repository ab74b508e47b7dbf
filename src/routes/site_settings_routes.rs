use axum::{
    extract::State,
    http::header,
    middleware,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::site_settings_controller::SiteSettingsController;
use crate::dto::site_settings_dto::ContactInfo;
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::routes::CACHE_PUBLIC_1M;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_site_settings_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", put(update_contact_info))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/", get(get_contact_info)).merge(admin)
}

/// Info de contacto del sitio; valores por defecto si no está cargada
async fn get_contact_info(State(state): State<AppState>) -> impl IntoResponse {
    let controller = SiteSettingsController::new(state.pool.clone());
    let response = controller.get_contact_info().await;
    ([(header::CACHE_CONTROL, CACHE_PUBLIC_1M)], Json(response))
}

async fn update_contact_info(
    State(state): State<AppState>,
    AppJson(request): AppJson<ContactInfo>,
) -> Result<Json<ContactInfo>, AppError> {
    let controller = SiteSettingsController::new(state.pool.clone());
    let response = controller.update_contact_info(request).await?;
    Ok(Json(response))
}
