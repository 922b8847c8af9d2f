//! Booking model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Booking model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub barber_shop_id: Uuid,
    pub barber_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub customer_name: String,
    /// Full international phone number
    pub customer_phone: String,
    /// ISO 3166-1 alpha-2 country code
    pub customer_country: String,
    pub created_at: DateTime<Utc>,
}

/// Start/end pair of an existing booking, as consumed by slot computation
#[derive(Debug, Clone, Copy, FromRow)]
pub struct BookingInterval {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    pub barber_shop_id: Uuid,
    pub barber_id: Uuid,
    pub service_id: Uuid,
    /// Appointment start (ISO 8601)
    pub start_time: DateTime<Utc>,
    /// Service duration in minutes
    #[validate(range(min = 1, message = "Service duration must be positive"))]
    pub duration: i64,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    /// Local phone number as typed by the customer
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub customer_phone: String,
    /// ISO 3166-1 alpha-2 country code
    pub customer_country: String,
}

impl CreateBooking {
    /// Appointment end, derived from start and service duration
    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::minutes(self.duration)
    }
}
