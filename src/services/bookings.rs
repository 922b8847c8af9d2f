//! Booking creation protocol and conflict checks

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking},
    repository::Repository,
};

/// Gate for booking creation. The three steps are independently callable and
/// are invoked in order by the handler: slot check, customer check, create.
/// The first two are advisory fast paths for clear error messages; the
/// storage constraints re-validate the same predicates at insert time.
#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The barber must be free over `[start, start + duration)`
    pub async fn check_time_slot_availability(&self, request: &CreateBooking) -> AppResult<()> {
        let overlapping = self
            .repository
            .bookings
            .find_overlapping_for_barber(request.barber_id, request.start_time, request.end_time())
            .await?;

        if !overlapping.is_empty() {
            return Err(AppError::Conflict("Time slot is already booked".to_string()));
        }

        Ok(())
    }

    /// The customer must not already hold a booking over the interval, with
    /// any barber at any shop. Expects `customer_phone` already normalized to
    /// the full international number.
    pub async fn client_has_booking_at_time(&self, request: &CreateBooking) -> AppResult<()> {
        let overlapping = self
            .repository
            .bookings
            .find_overlapping_for_phone(
                &request.customer_phone,
                request.start_time,
                request.end_time(),
            )
            .await?;

        if !overlapping.is_empty() {
            return Err(AppError::Conflict(
                "Client has existing booking at this time".to_string(),
            ));
        }

        Ok(())
    }

    /// Persist the booking. Racing requests that both passed the checks are
    /// resolved here: the insert fails with a conflict when another booking
    /// won the slot in between.
    pub async fn create_booking(&self, request: &CreateBooking) -> AppResult<Booking> {
        self.repository.bookings.create(request).await
    }
}
