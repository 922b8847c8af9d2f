//! Booking endpoints

use axum::{extract::State, http::StatusCode, Json};
use chrono::Timelike;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, CreateBooking},
    services::phone,
};

/// Create a booking. Field validation, phone normalization and the
/// business-hours gate run before the conflict protocol; the protocol's
/// checks run in order (slot, then customer) before the insert.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 409, description = "Slot taken or customer already booked", body = crate::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let full_number =
        phone::validate_international_phone(&request.customer_phone, &request.customer_country)
            .map_err(|e| AppError::Validation(e.to_string()))?;

    // The protocol and the stored booking both use the normalized number
    let mut request = request;
    request.customer_phone = full_number;

    check_start_within_hours(&request, &state)?;

    let services = &state.services;
    services.bookings.check_time_slot_availability(&request).await?;
    services.bookings.client_has_booking_at_time(&request).await?;
    let booking = services.bookings.create_booking(&request).await?;

    tracing::info!(
        booking_id = %booking.id,
        barber_id = %booking.barber_id,
        "booking created"
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

/// Bookings may start between opening and half past closing, inclusive
fn check_start_within_hours(request: &CreateBooking, state: &crate::AppState) -> AppResult<()> {
    let hours = state.services.business_hours;
    let time = request.start_time.time();
    let start_minute = time.hour() * 60 + time.minute();

    let earliest = hours.open_hour * 60;
    let latest = hours.close_hour * 60 + 30;

    if start_minute < earliest || start_minute > latest {
        return Err(AppError::Validation(format!(
            "Bookings must start between {:02}:00 and {:02}:30",
            hours.open_hour, hours.close_hour
        )));
    }

    Ok(())
}
