use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::utils::errors::AppError;

/// Fila de reserva con el resumen del vehículo asociado (LEFT JOIN)
#[derive(Debug, sqlx::FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_type: String,
    pub vehicle_id: Option<Uuid>,
    pub date: NaiveDate,
    pub time: String,
    pub pickup_location: String,
    pub destination: Option<String>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub vehicle_name: Option<String>,
    pub vehicle_category: Option<String>,
    pub vehicle_image_url: Option<String>,
}

const BOOKING_WITH_VEHICLE: &str = r#"
    SELECT b.*, v.name AS vehicle_name, v.category AS vehicle_category,
           v.image_url AS vehicle_image_url
    FROM bookings b
    LEFT JOIN vehicles v ON v.id = b.vehicle_id
"#;

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        customer_name: String,
        customer_email: String,
        customer_phone: String,
        service_type: String,
        vehicle_id: Option<Uuid>,
        date: NaiveDate,
        time: String,
        pickup_location: String,
        destination: Option<String>,
        message: Option<String>,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (customer_name, customer_email, customer_phone, service_type,
                                  vehicle_id, date, time, pickup_location, destination, message, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'pending')
            RETURNING *
            "#,
        )
        .bind(customer_name)
        .bind(customer_email)
        .bind(customer_phone)
        .bind(service_type)
        .bind(vehicle_id)
        .bind(date)
        .bind(time)
        .bind(pickup_location)
        .bind(destination)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BookingRow>, AppError> {
        let query = format!("{} WHERE b.id = $1", BOOKING_WITH_VEHICLE);
        let booking = sqlx::query_as::<_, BookingRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    /// Listado de reservas, opcionalmente filtrado por estado
    pub async fn find_all(&self, status: Option<&str>) -> Result<Vec<BookingRow>, AppError> {
        let bookings = match status {
            Some(status) => {
                let query = format!(
                    "{} WHERE b.status = $1 ORDER BY b.created_at DESC",
                    BOOKING_WITH_VEHICLE
                );
                sqlx::query_as::<_, BookingRow>(&query)
                    .bind(status)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{} ORDER BY b.created_at DESC", BOOKING_WITH_VEHICLE);
                sqlx::query_as::<_, BookingRow>(&query)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(bookings)
    }

    /// Escritura directa del estado; cualquier estado puede pasar a cualquier otro
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }
}
