//! Availability view types (derived, never persisted)

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Availability of a single calendar date
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DateAvailability {
    pub date: NaiveDate,
    pub is_available: bool,
    /// Free slots for the requested service duration
    pub available_slots: u32,
    /// Theoretical slot count for a fully open day
    pub total_slots: u32,
}

/// Barber availability query parameters
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct AvailabilityQuery {
    pub barber_id: Uuid,
    /// Range start (ISO 8601)
    pub start_date: DateTime<Utc>,
    /// Range end (ISO 8601)
    pub end_date: DateTime<Utc>,
    /// Service duration in minutes
    pub service_duration: i64,
}

/// Barber availability over a date range
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityResponse {
    pub barber_id: Uuid,
    /// Dates with at least one free slot, ascending
    pub available_dates: Vec<NaiveDate>,
    /// ISO date string -> availability
    pub date_availability: BTreeMap<String, DateAvailability>,
}

/// Opening window used for slot generation (24-hour clock)
#[derive(Debug, Clone, Copy)]
pub struct BusinessHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl BusinessHours {
    /// Theoretical 30-minute slot count for one day
    pub fn total_slots(&self) -> u32 {
        (self.close_hour - self.open_hour) * 2
    }
}
