//! Barber availability endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::availability::{AvailabilityQuery, AvailabilityResponse},
    services::cache::AvailabilityCache,
};

/// Availability for a barber over a date range, served through the
/// short-TTL cache so UI re-renders don't repeat the query
#[utoipa::path(
    get,
    path = "/availability",
    tag = "availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Available dates and per-date slot counts", body = AvailabilityResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_availability(
    State(state): State<crate::AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<AvailabilityResponse>> {
    let key = AvailabilityCache::key(query.barber_id, query.start_date, query.end_date);

    if let Some(cached) = state.services.availability_cache.get(&key) {
        return Ok(Json(cached));
    }

    let response = state.services.availability.get_available_dates(&query).await?;
    state.services.availability_cache.put(key, response.clone());

    Ok(Json(response))
}
