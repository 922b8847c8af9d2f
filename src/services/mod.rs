//! Business logic services

pub mod availability;
pub mod barbershops;
pub mod bookings;
pub mod cache;
pub mod phone;

use std::sync::Arc;

use chrono::Duration;

use crate::{config::BookingConfig, models::availability::BusinessHours, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub availability: availability::AvailabilityService,
    pub barbershops: barbershops::BarberShopsService,
    pub bookings: bookings::BookingsService,
    pub availability_cache: Arc<cache::AvailabilityCache>,
    pub business_hours: BusinessHours,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, booking: &BookingConfig) -> Self {
        let business_hours = BusinessHours {
            open_hour: booking.open_hour,
            close_hour: booking.close_hour,
        };
        let cache_ttl = Duration::seconds(booking.availability_cache_ttl_seconds as i64);

        Self {
            availability: availability::AvailabilityService::new(repository.clone(), business_hours),
            barbershops: barbershops::BarberShopsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone()),
            availability_cache: Arc::new(cache::AvailabilityCache::new(cache_ttl)),
            business_hours,
            repository,
        }
    }
}
