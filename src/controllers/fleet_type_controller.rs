use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::fleet_type_dto::{
    CreateFleetTypeRequest, FleetTypeResponse, UpdateFleetTypeRequest,
};
use crate::repositories::fleet_type_repository::FleetTypeRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct FleetTypeController {
    repository: FleetTypeRepository,
    vehicle_repository: VehicleRepository,
}

impl FleetTypeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FleetTypeRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateFleetTypeRequest,
    ) -> Result<ApiResponse<FleetTypeResponse>, AppError> {
        request.validate()?;

        // El nombre es único
        if self.repository.name_exists(&request.name, None).await? {
            return Err(AppError::BadRequest(
                "Fleet type with this name already exists".to_string(),
            ));
        }

        let fleet_type = self.repository.create(request).await?;

        Ok(ApiResponse::success_with_message(
            fleet_type.into(),
            "Fleet type creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<FleetTypeResponse, AppError> {
        let fleet_type = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Fleet type", &id.to_string()))?;

        Ok(fleet_type.into())
    }

    pub async fn list(&self) -> Result<Vec<FleetTypeResponse>, AppError> {
        let fleet_types = self.repository.find_all().await?;
        Ok(fleet_types.into_iter().map(FleetTypeResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFleetTypeRequest,
    ) -> Result<ApiResponse<FleetTypeResponse>, AppError> {
        request.validate()?;

        if let Some(ref name) = request.name {
            if self.repository.name_exists(name, Some(id)).await? {
                return Err(AppError::BadRequest(
                    "Fleet type with this name already exists".to_string(),
                ));
            }
        }

        let fleet_type = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            fleet_type.into(),
            "Fleet type actualizado exitosamente".to_string(),
        ))
    }

    /// El borrado se bloquea si algún vehículo usa la categoría.
    /// El vínculo es por igualdad de strings, sin foreign key.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let fleet_type = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Fleet type", &id.to_string()))?;

        let vehicles_count = self
            .vehicle_repository
            .count_by_category(&fleet_type.name)
            .await?;

        if vehicles_count > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete fleet type. {} vehicle(s) are using this type. Please reassign or delete those vehicles first.",
                vehicles_count
            )));
        }

        self.repository.delete(id).await
    }
}
