use axum::{
    extract::State,
    http::{header, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::hero_controller::HeroController;
use crate::dto::hero_dto::{CreateHeroRequest, UpdateHeroRequest};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::routes::CACHE_PUBLIC_5M;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_hero_router(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_hero).put(update_hero))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/", get(get_hero)).merge(admin)
}

/// Hero activo o copy por defecto; nunca falla
async fn get_hero(State(state): State<AppState>) -> impl IntoResponse {
    let controller = HeroController::new(state.pool.clone());
    let response = controller.get().await;
    ([(header::CACHE_CONTROL, CACHE_PUBLIC_5M)], Json(response))
}

async fn create_hero(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateHeroRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = HeroController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_hero(
    State(state): State<AppState>,
    AppJson(request): AppJson<UpdateHeroRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = HeroController::new(state.pool.clone());
    let response = controller.update(request).await?;
    Ok(Json(response))
}
