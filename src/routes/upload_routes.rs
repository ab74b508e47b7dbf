use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    middleware,
    routing::post,
    Json, Router,
};

use crate::controllers::upload_controller::UploadController;
use crate::dto::upload_dto::UploadResponse;
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_upload_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/image", post(upload_image))
        .route_layer(middleware::from_fn(admin_only_middleware))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        // El límite de axum (2MB) queda por debajo del máximo de 5MB
        .layer(DefaultBodyLimit::max(6 * 1024 * 1024))
}

/// Subida de imagen multipart (campo `file`)
async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Error reading file: {}", e)))?;
            file = Some((filename, content_type, data.to_vec()));
            break;
        }
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;

    let controller = UploadController::new(&state);
    let response = controller
        .upload_image(&filename, &content_type, bytes)
        .await?;

    Ok(Json(response))
}
