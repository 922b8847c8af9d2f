//! Bookings repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingInterval, CreateBooking},
};

/// Postgres exclusion_violation; raised when an insert loses the slot race
const EXCLUSION_VIOLATION: &str = "23P01";

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Intervals of a barber's bookings whose start falls within [start, end]
    pub async fn find_intervals_for_barber(
        &self,
        barber_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<BookingInterval>> {
        let intervals = sqlx::query_as::<_, BookingInterval>(
            r#"
            SELECT start_time, end_time
            FROM bookings
            WHERE barber_id = $1 AND start_time >= $2 AND start_time <= $3
            ORDER BY start_time
            "#,
        )
        .bind(barber_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(intervals)
    }

    /// Bookings for a barber overlapping [start, end), half-open
    pub async fn find_overlapping_for_barber(
        &self,
        barber_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE barber_id = $1 AND start_time < $3 AND end_time > $2",
        )
        .bind(barber_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Bookings held by a customer phone overlapping [start, end), across all shops
    pub async fn find_overlapping_for_phone(
        &self,
        customer_phone: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE customer_phone = $1 AND start_time < $3 AND end_time > $2",
        )
        .bind(customer_phone)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Create a booking. The no-overlap invariants are enforced here by the
    /// table's exclusion constraints, so a concurrent request that passed the
    /// advisory checks still cannot double-book.
    pub async fn create(&self, booking: &CreateBooking) -> AppResult<Booking> {
        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                barber_shop_id, barber_id, service_id,
                start_time, end_time,
                customer_name, customer_phone, customer_country
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(booking.barber_shop_id)
        .bind(booking.barber_id)
        .bind(booking.service_id)
        .bind(booking.start_time)
        .bind(booking.end_time())
        .bind(&booking.customer_name)
        .bind(&booking.customer_phone)
        .bind(&booking.customer_country)
        .fetch_one(&self.pool)
        .await
        .map_err(map_overlap_violation)?;

        Ok(created)
    }
}

/// Translate an exclusion-constraint violation into the conflict the advisory
/// checks would have reported, keyed by which constraint fired
fn map_overlap_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return match db.constraint() {
                Some("bookings_customer_no_overlap") => {
                    AppError::Conflict("Client has existing booking at this time".to_string())
                }
                _ => AppError::Conflict("Time slot is already booked".to_string()),
            };
        }
    }
    AppError::Database(e)
}
