use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::page_controller::PageController;
use crate::dto::page_dto::{CreatePageRequest, PageResponse, UpdatePageRequest};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_page_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_page))
        .route("/:id", put(update_page).delete(delete_page))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_pages))
        .route("/:id", get(get_page))
        .merge(admin)
}

async fn list_pages(State(state): State<AppState>) -> Result<Json<Vec<PageResponse>>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageResponse>, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_page(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreatePageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<UpdatePageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = PageController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PageController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Página eliminada exitosamente"
    })))
}
