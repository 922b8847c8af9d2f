//! Barbershop profile endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::barbershop::BarberShopProfile};

/// Shop profile by slug, with its barbers and services
#[utoipa::path(
    get,
    path = "/barbershops/{slug}",
    tag = "barbershops",
    params(
        ("slug" = String, Path, description = "Shop URL slug")
    ),
    responses(
        (status = 200, description = "Shop profile", body = BarberShopProfile),
        (status = 404, description = "Unknown slug", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_barbershop(
    State(state): State<crate::AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<BarberShopProfile>> {
    let profile = state.services.barbershops.get_profile(&slug).await?;
    Ok(Json(profile))
}
