//! Servicio de storage de imágenes
//!
//! Sube los archivos a Supabase Storage cuando está configurado; en
//! desarrollo cae al disco local bajo `UPLOAD_DIR`, servido en /uploads.

use async_trait::async_trait;
use reqwest::Client;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Guardar los bytes y devolver la URL pública resultante
    async fn store(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError>;
}

/// Storage en Supabase (bucket público)
pub struct SupabaseStorage {
    client: Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(client: Client, base_url: String, api_key: String, bucket: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            bucket,
        }
    }
}

#[async_trait]
impl StorageProvider for SupabaseStorage {
    async fn store(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        let object_path = urlencoding::encode(filename).into_owned();
        let upload_url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, object_path
        );

        let response = self
            .client
            .post(&upload_url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error subiendo a Supabase: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Supabase Storage respondió {}: {}",
                status, text
            )));
        }

        log::info!("🖼️ Imagen subida a Supabase: {}/{}", self.bucket, object_path);

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, object_path
        ))
    }
}

/// Storage en disco local para desarrollo
pub struct LocalStorage {
    upload_dir: String,
    public_base_url: String,
}

impl LocalStorage {
    pub fn new(upload_dir: String, public_base_url: String) -> Self {
        Self {
            upload_dir,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl StorageProvider for LocalStorage {
    async fn store(
        &self,
        filename: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| AppError::Internal(format!("Error creando upload dir: {}", e)))?;

        let path = std::path::Path::new(&self.upload_dir).join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Error guardando archivo: {}", e)))?;

        log::info!("🖼️ Imagen guardada en {}", path.display());

        Ok(format!("{}/uploads/{}", self.public_base_url, filename))
    }
}

/// Elegir el proveedor según la configuración del entorno
pub fn storage_from_config(
    config: &EnvironmentConfig,
    client: Client,
) -> Box<dyn StorageProvider> {
    match (&config.supabase_url, &config.supabase_key) {
        (Some(url), Some(key)) => Box::new(SupabaseStorage::new(
            client,
            url.clone(),
            key.clone(),
            config.supabase_storage_bucket.clone(),
        )),
        _ => Box::new(LocalStorage::new(
            config.upload_dir.clone(),
            config.public_base_url.clone(),
        )),
    }
}

/// Nombre único para el objeto, conservando la extensión original
pub fn unique_filename(original: &str) -> String {
    let extension = original
        .rsplit('.')
        .next()
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= 5
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    format!("{}.{}", Uuid::new_v4(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_filename_keeps_extension() {
        let name = unique_filename("photo.JPG");
        assert!(name.ends_with(".jpg"));
        assert_ne!(unique_filename("photo.jpg"), unique_filename("photo.jpg"));
    }

    #[test]
    fn test_unique_filename_falls_back_to_bin() {
        assert!(unique_filename("noextension").ends_with(".bin"));
        assert!(unique_filename("weird.ext!!").ends_with(".bin"));
    }

    #[test]
    fn test_supabase_public_url_shape() {
        let storage = SupabaseStorage::new(
            Client::new(),
            "https://proj.supabase.co/".to_string(),
            "key".to_string(),
            "alsama-images".to_string(),
        );
        assert_eq!(storage.base_url, "https://proj.supabase.co");
    }
}
