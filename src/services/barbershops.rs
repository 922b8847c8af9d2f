//! Barbershop profile service

use crate::{error::AppResult, models::barbershop::BarberShopProfile, repository::Repository};

#[derive(Clone)]
pub struct BarberShopsService {
    repository: Repository,
}

impl BarberShopsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Shop profile with its barbers and services, looked up by slug
    pub async fn get_profile(&self, slug: &str) -> AppResult<BarberShopProfile> {
        let shop = self.repository.barbershops.get_by_slug(slug).await?;
        let barbers = self.repository.barbershops.list_barbers(shop.id).await?;
        let services = self.repository.barbershops.list_services(shop.id).await?;

        Ok(BarberShopProfile {
            shop,
            barbers,
            services,
        })
    }
}
