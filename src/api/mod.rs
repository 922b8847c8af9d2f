//! API handlers for Trimly REST endpoints

pub mod availability;
pub mod barbershops;
pub mod bookings;
pub mod countries;
pub mod health;
pub mod openapi;
