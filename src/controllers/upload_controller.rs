use crate::dto::upload_dto::UploadResponse;
use crate::repositories::media_repository::MediaRepository;
use crate::services::storage_service::{storage_from_config, unique_filename, StorageProvider};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Tipos MIME de imagen aceptados
const VALID_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Tamaño máximo de archivo: 5MB
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

pub struct UploadController {
    media_repository: MediaRepository,
    storage: Box<dyn StorageProvider>,
}

impl UploadController {
    pub fn new(state: &AppState) -> Self {
        Self {
            media_repository: MediaRepository::new(state.pool.clone()),
            storage: storage_from_config(&state.config, state.http_client.clone()),
        }
    }

    pub async fn upload_image(
        &self,
        original_filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, AppError> {
        if !VALID_IMAGE_TYPES.contains(&content_type) {
            return Err(AppError::BadRequest("Invalid file type".to_string()));
        }

        if bytes.len() > MAX_FILE_SIZE {
            return Err(AppError::BadRequest("File too large (max 5MB)".to_string()));
        }

        if bytes.is_empty() {
            return Err(AppError::BadRequest("No file provided".to_string()));
        }

        let filename = unique_filename(original_filename);
        let url = self.storage.store(&filename, content_type, bytes).await?;

        let media = self.media_repository.create(&url, &filename, "image").await?;

        Ok(UploadResponse {
            url: media.url,
            id: media.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_image_types() {
        assert!(VALID_IMAGE_TYPES.contains(&"image/png"));
        assert!(VALID_IMAGE_TYPES.contains(&"image/webp"));
        assert!(!VALID_IMAGE_TYPES.contains(&"image/gif"));
        assert!(!VALID_IMAGE_TYPES.contains(&"application/pdf"));
    }
}
