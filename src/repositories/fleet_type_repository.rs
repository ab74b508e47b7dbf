use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::fleet_type_dto::{CreateFleetTypeRequest, UpdateFleetTypeRequest};
use crate::models::fleet_type::FleetType;
use crate::utils::errors::AppError;

pub struct FleetTypeRepository {
    pool: PgPool,
}

impl FleetTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateFleetTypeRequest) -> Result<FleetType, AppError> {
        let fleet_type = sqlx::query_as::<_, FleetType>(
            r#"
            INSERT INTO fleet_types (name, description, icon, sort_order, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(request.name)
        .bind(request.description)
        .bind(request.icon)
        .bind(request.sort_order)
        .bind(request.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(fleet_type)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FleetType>, AppError> {
        let fleet_type = sqlx::query_as::<_, FleetType>("SELECT * FROM fleet_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(fleet_type)
    }

    pub async fn find_all(&self) -> Result<Vec<FleetType>, AppError> {
        let fleet_types = sqlx::query_as::<_, FleetType>(
            "SELECT * FROM fleet_types ORDER BY sort_order ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(fleet_types)
    }

    pub async fn name_exists(
        &self,
        name: &str,
        exclude_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM fleet_types WHERE name = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFleetTypeRequest,
    ) -> Result<FleetType, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Fleet type not found".to_string()))?;

        let fleet_type = sqlx::query_as::<_, FleetType>(
            r#"
            UPDATE fleet_types
            SET name = $2, description = $3, icon = $4, sort_order = $5,
                is_active = $6, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.description.or(current.description))
        .bind(request.icon.or(current.icon))
        .bind(request.sort_order.unwrap_or(current.sort_order))
        .bind(request.is_active.unwrap_or(current.is_active))
        .fetch_one(&self.pool)
        .await?;

        Ok(fleet_type)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fleet_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fleet type not found".to_string()));
        }

        Ok(())
    }
}
