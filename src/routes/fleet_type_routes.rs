use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::fleet_type_controller::FleetTypeController;
use crate::dto::fleet_type_dto::{
    CreateFleetTypeRequest, FleetTypeResponse, UpdateFleetTypeRequest,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::routes::CACHE_PUBLIC_5M;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_fleet_type_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_fleet_type))
        .route("/:id", put(update_fleet_type).delete(delete_fleet_type))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_fleet_types))
        .route("/:id", get(get_fleet_type))
        .merge(admin)
}

async fn list_fleet_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let controller = FleetTypeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(([(header::CACHE_CONTROL, CACHE_PUBLIC_5M)], Json(response)))
}

async fn get_fleet_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FleetTypeResponse>, AppError> {
    let controller = FleetTypeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_fleet_type(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateFleetTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = FleetTypeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_fleet_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<UpdateFleetTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = FleetTypeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_fleet_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FleetTypeController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Fleet type eliminado exitosamente"
    })))
}
