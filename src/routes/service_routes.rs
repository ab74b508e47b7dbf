use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tracing::error;
use uuid::Uuid;

use crate::controllers::service_controller::ServiceController;
use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::routes::CACHE_PUBLIC_1M;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_service_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_service))
        .route("/:id", put(update_service).delete(delete_service))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_services))
        .route("/:id", get(get_service))
        .route("/slug/:slug", get(get_service_by_slug))
        .merge(admin)
}

/// Listado público; devuelve [] ante errores de DB para no romper el frontend
async fn list_services(State(state): State<AppState>) -> impl IntoResponse {
    let controller = ServiceController::new(state.pool.clone());
    let services = controller.list_active().await.unwrap_or_else(|e| {
        error!("Error listando servicios: {}", e);
        Vec::new()
    });

    ([(header::CACHE_CONTROL, CACHE_PUBLIC_1M)], Json(services))
}

async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

/// Detalle por slug para las páginas públicas de servicios
async fn get_service_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceResponse>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.get_by_slug(&slug).await?;
    Ok(Json(response))
}

async fn create_service(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<UpdateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Servicio eliminado exitosamente"
    })))
}
