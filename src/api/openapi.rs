//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{availability, barbershops, bookings, countries, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trimly API",
        version = "1.0.0",
        description = "Barbershop Booking System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Trimly Team", email = "dev@trimly.app")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Barbershops
        barbershops::get_barbershop,
        // Countries
        countries::list_countries,
        // Availability
        availability::get_availability,
        // Bookings
        bookings::create_booking,
    ),
    components(
        schemas(
            // Barbershops
            crate::models::BarberShop,
            crate::models::Barber,
            crate::models::Service,
            crate::models::BarberShopProfile,
            // Countries
            crate::models::CountryInfo,
            // Availability
            crate::models::AvailabilityResponse,
            crate::models::DateAvailability,
            // Bookings
            crate::models::Booking,
            crate::models::CreateBooking,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "barbershops", description = "Shop profiles"),
        (name = "countries", description = "Supported phone countries"),
        (name = "availability", description = "Barber availability"),
        (name = "bookings", description = "Appointment booking")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
