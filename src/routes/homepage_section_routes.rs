use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tracing::error;

use crate::controllers::homepage_section_controller::HomepageSectionController;
use crate::dto::homepage_section_dto::{
    CreateSectionRequest, SectionListQuery, SectionResponse, UpsertSectionRequest,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::routes::CACHE_PUBLIC_5M;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_homepage_section_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_section))
        .route("/:key", put(upsert_section).delete(delete_section))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_sections))
        .route("/:key", get(get_section))
        .merge(admin)
}

/// Listado público (?all=true incluye inactivas); [] ante errores de DB
async fn list_sections(
    State(state): State<AppState>,
    Query(query): Query<SectionListQuery>,
) -> impl IntoResponse {
    let controller = HomepageSectionController::new(state.pool.clone());
    let sections = controller.list(query.show_all()).await.unwrap_or_else(|e| {
        error!("Error listando secciones: {}", e);
        Vec::new()
    });

    ([(header::CACHE_CONTROL, CACHE_PUBLIC_5M)], Json(sections))
}

async fn get_section(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SectionResponse>, AppError> {
    let controller = HomepageSectionController::new(state.pool.clone());
    let response = controller.get_by_key(&key).await?;
    Ok(Json(response))
}

async fn create_section(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateSectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = HomepageSectionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Upsert por clave: crea la sección si no existe
async fn upsert_section(
    State(state): State<AppState>,
    Path(key): Path<String>,
    AppJson(request): AppJson<UpsertSectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = HomepageSectionController::new(state.pool.clone());
    let response = controller.upsert(&key, request).await?;
    Ok(Json(response))
}

async fn delete_section(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = HomepageSectionController::new(state.pool.clone());
    controller.delete(&key).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Sección eliminada exitosamente"
    })))
}
