//! Barbershop, barber and service models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Barbershop (tenant) model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BarberShop {
    pub id: Uuid,
    /// URL slug, unique per shop
    pub slug: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Barber working at a shop
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Barber {
    pub id: Uuid,
    pub barber_shop_id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Service offered by a shop
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Service {
    pub id: Uuid,
    pub barber_shop_id: Uuid,
    pub name: String,
    /// Duration in minutes
    pub duration_minutes: i32,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Shop profile with barbers and services, as consumed by the booking form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BarberShopProfile {
    #[serde(flatten)]
    pub shop: BarberShop,
    pub barbers: Vec<Barber>,
    pub services: Vec<Service>,
}
