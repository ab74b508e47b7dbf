use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::VehicleSummary;
use crate::models::booking::Booking;

/// Request público para crear una reserva
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 255))]
    pub customer_name: String,

    #[validate(email)]
    pub customer_email: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub customer_phone: String,

    #[validate(length(min = 1, max = 100))]
    pub service_type: String,

    pub vehicle_id: Option<Uuid>,

    // YYYY-MM-DD o RFC3339; no puede estar en el pasado
    #[validate(custom = "crate::utils::validation::validate_future_date")]
    pub date: String,

    #[validate(custom = "crate::utils::validation::validate_time_hhmm")]
    pub time: String,

    #[validate(length(min = 1, max = 500))]
    pub pickup_location: String,

    pub destination: Option<String>,

    pub message: Option<String>,
}

/// Request de admin para actualizar el estado de una reserva.
/// El estado llega como string y se parsea a mano para responder 400
/// ante valores no soportados.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub status: Option<String>,
}

/// Filtros del listado de reservas
#[derive(Debug, Deserialize)]
pub struct BookingFilters {
    pub status: Option<String>,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub date: NaiveDate,
    pub time: String,
    pub pickup_location: String,
    pub destination: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub vehicle: Option<VehicleSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingResponse {
    pub fn from_booking(booking: Booking, vehicle: Option<VehicleSummary>) -> Self {
        Self {
            id: booking.id,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            customer_phone: booking.customer_phone,
            service_type: booking.service_type,
            date: booking.date,
            time: booking.time,
            pickup_location: booking.pickup_location,
            destination: booking.destination,
            message: booking.message,
            status: booking.status,
            vehicle,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}
