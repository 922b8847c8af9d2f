//! Supported country listing for the booking form

use axum::Json;

use crate::models::country::{self, CountryInfo};

/// Countries the booking form accepts phone numbers from
#[utoipa::path(
    get,
    path = "/countries",
    tag = "countries",
    responses(
        (status = 200, description = "Supported countries", body = Vec<CountryInfo>)
    )
)]
pub async fn list_countries() -> Json<Vec<CountryInfo>> {
    Json(country::all().iter().map(CountryInfo::from).collect())
}
