use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::service_dto::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::repositories::service_repository::ServiceRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError};

pub struct ServiceController {
    repository: ServiceRepository,
}

impl ServiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateServiceRequest,
    ) -> Result<ApiResponse<ServiceResponse>, AppError> {
        request.validate()?;

        // Verificar que el slug no exista
        if self.repository.slug_exists(&request.slug, None).await? {
            return Err(conflict_error("Service", "slug", &request.slug));
        }

        let service = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            service.into(),
            "Servicio creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ServiceResponse, AppError> {
        let service = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service", &id.to_string()))?;

        Ok(service.into())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<ServiceResponse, AppError> {
        let service = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found_error("Service", slug))?;

        Ok(service.into())
    }

    /// Listado público de servicios activos
    pub async fn list_active(&self) -> Result<Vec<ServiceResponse>, AppError> {
        let services = self.repository.find_active().await?;
        Ok(services.into_iter().map(ServiceResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceRequest,
    ) -> Result<ApiResponse<ServiceResponse>, AppError> {
        request.validate()?;

        if let Some(ref slug) = request.slug {
            if self.repository.slug_exists(slug, Some(id)).await? {
                return Err(conflict_error("Service", "slug", slug));
            }
        }

        let service = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            service.into(),
            "Servicio actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
