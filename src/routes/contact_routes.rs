use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::contact_controller::ContactController;
use crate::dto::common::ApiResponse;
use crate::dto::contact_dto::ContactRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::AppJson;

pub fn create_contact_router() -> Router<AppState> {
    Router::new().route("/", post(submit_contact))
}

/// Formulario público de contacto; la notificación es best-effort
async fn submit_contact(
    State(state): State<AppState>,
    AppJson(request): AppJson<ContactRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ContactController::new(&state);
    let response = controller.submit(request).await?;
    Ok(Json(response))
}
