//! Barbershops repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::barbershop::{Barber, BarberShop, Service},
};

#[derive(Clone)]
pub struct BarberShopsRepository {
    pool: Pool<Postgres>,
}

impl BarberShopsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a shop by its URL slug
    pub async fn get_by_slug(&self, slug: &str) -> AppResult<BarberShop> {
        sqlx::query_as::<_, BarberShop>("SELECT * FROM barbershops WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Barbershop '{}' not found", slug)))
    }

    /// List barbers working at a shop
    pub async fn list_barbers(&self, barber_shop_id: Uuid) -> AppResult<Vec<Barber>> {
        let barbers = sqlx::query_as::<_, Barber>(
            "SELECT * FROM barbers WHERE barber_shop_id = $1 ORDER BY name",
        )
        .bind(barber_shop_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(barbers)
    }

    /// List services offered by a shop
    pub async fn list_services(&self, barber_shop_id: Uuid) -> AppResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE barber_shop_id = $1 ORDER BY name",
        )
        .bind(barber_shop_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }
}
