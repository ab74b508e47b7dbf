use serde::Serialize;
use uuid::Uuid;

/// Response de subida de imagen
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub id: Uuid,
}
