use std::str::FromStr;

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::VehicleSummary;
use crate::models::booking::BookingStatus;
use crate::repositories::booking_repository::{BookingRepository, BookingRow};
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::parse_booking_date;

pub struct BookingController {
    repository: BookingRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BookingRepository::new(pool),
        }
    }

    /// Alta pública de una reserva; siempre entra en estado pending
    pub async fn create(&self, request: CreateBookingRequest) -> Result<BookingResponse, AppError> {
        request.validate()?;

        // La fecha ya pasó la validación de formato y de futuro
        let date = parse_booking_date(&request.date)
            .ok_or_else(|| AppError::BadRequest("Invalid booking date".to_string()))?;

        let booking = self
            .repository
            .create(
                request.customer_name,
                request.customer_email,
                request.customer_phone,
                request.service_type,
                request.vehicle_id,
                date,
                request.time,
                request.pickup_location,
                request.destination,
                request.message,
            )
            .await?;

        Ok(BookingResponse::from_booking(booking, None))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingResponse, AppError> {
        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;

        Ok(row_to_response(row))
    }

    pub async fn list(&self, status: Option<String>) -> Result<Vec<BookingResponse>, AppError> {
        let rows = self.repository.find_all(status.as_deref()).await?;
        Ok(rows.into_iter().map(row_to_response).collect())
    }

    /// Actualización de estado: cualquier estado puede pasar a cualquier otro
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let status = match request.status {
            Some(raw) => Some(BookingStatus::from_str(&raw).map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid status '{}'. Allowed values: pending, confirmed, completed, cancelled",
                    raw
                ))
            })?),
            None => None,
        };

        let booking = match status {
            Some(status) => self
                .repository
                .update_status(id, status.as_str())
                .await?
                .ok_or_else(|| not_found_error("Booking", &id.to_string()))?,
            // Sin cambios: solo verificar existencia y devolver la reserva
            None => {
                let row = self
                    .repository
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;
                return Ok(ApiResponse::success(row_to_response(row)));
            }
        };

        Ok(ApiResponse::success_with_message(
            BookingResponse::from_booking(booking, None),
            "Reserva actualizada exitosamente".to_string(),
        ))
    }
}

fn row_to_response(row: BookingRow) -> BookingResponse {
    let vehicle = match (row.vehicle_id, row.vehicle_name) {
        (Some(id), Some(name)) => Some(VehicleSummary {
            id,
            name,
            category: row.vehicle_category.unwrap_or_default(),
            image_url: row.vehicle_image_url,
        }),
        _ => None,
    };

    BookingResponse {
        id: row.id,
        customer_name: row.customer_name,
        customer_email: row.customer_email,
        customer_phone: row.customer_phone,
        service_type: row.service_type,
        date: row.date,
        time: row.time,
        pickup_location: row.pickup_location,
        destination: row.destination,
        message: row.message,
        status: row.status,
        vehicle,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
