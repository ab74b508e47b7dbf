use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BookingFilters, BookingResponse, CreateBookingRequest, UpdateBookingRequest,
};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_booking_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/list", get(list_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/update", put(update_booking))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/create", post(create_booking))
        .merge(admin)
}

/// Alta pública de reservas desde el funnel del sitio
async fn create_booking(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(filters): Query<BookingFilters>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list(filters.status).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}
