//! Barber availability engine

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        availability::{AvailabilityQuery, AvailabilityResponse, BusinessHours, DateAvailability},
        booking::BookingInterval,
    },
    repository::Repository,
};

/// Slot granularity, aligned to the top and half of each hour
const SLOT_INTERVAL_MINUTES: i64 = 30;

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    hours: BusinessHours,
}

impl AvailabilityService {
    pub fn new(repository: Repository, hours: BusinessHours) -> Self {
        Self { repository, hours }
    }

    /// Which dates in the range have at least one free slot for the barber,
    /// plus per-date slot counts. Bookings are fetched once for the whole
    /// range; a storage failure fails the resolution.
    pub async fn get_available_dates(
        &self,
        query: &AvailabilityQuery,
    ) -> AppResult<AvailabilityResponse> {
        // Make the range inclusive of both boundary calendar days
        let start = midnight(query.start_date.date_naive());
        let end = end_of_day(query.end_date.date_naive());

        let bookings = self
            .repository
            .bookings
            .find_intervals_for_barber(query.barber_id, start, end)
            .await?;

        Ok(build_availability(
            query.barber_id,
            &bookings,
            start.date_naive(),
            end.date_naive(),
            query.service_duration,
            self.hours,
        ))
    }
}

/// Free slot start times ("HH:MM") for one calendar date, ascending.
/// A candidate slot is `[t, t + duration)` on a 30-minute boundary; it is
/// discarded when it would run past closing or overlaps an existing booking
/// (half-open: `[a,b)` and `[c,d)` overlap iff `a < d && b > c`).
pub fn calculate_available_slots(
    date: NaiveDate,
    existing_bookings: &[BookingInterval],
    service_duration: i64,
    hours: BusinessHours,
) -> Vec<String> {
    let mut available_slots = Vec::new();

    let day_start = midnight(date);
    let closing = day_start + Duration::minutes(i64::from(hours.close_hour) * 60);

    let mut minute = i64::from(hours.open_hour) * 60;
    let last_boundary = i64::from(hours.close_hour) * 60;
    while minute <= last_boundary {
        let slot_start = day_start + Duration::minutes(minute);
        let slot_end = slot_start + Duration::minutes(service_duration);

        // Later boundaries only end later, so nothing after this fits either
        if slot_end > closing {
            break;
        }

        let has_conflict = existing_bookings
            .iter()
            .any(|b| slot_start < b.end_time && slot_end > b.start_time);

        if !has_conflict {
            available_slots.push(format!("{:02}:{:02}", minute / 60, minute % 60));
        }

        minute += SLOT_INTERVAL_MINUTES;
    }

    available_slots
}

/// Walk each calendar day in [first, last] and compute its availability.
/// Bookings are matched to days by calendar date, not by instant.
pub fn build_availability(
    barber_id: Uuid,
    bookings: &[BookingInterval],
    first: NaiveDate,
    last: NaiveDate,
    service_duration: i64,
    hours: BusinessHours,
) -> AvailabilityResponse {
    let total_slots = hours.total_slots();
    let mut available_dates = Vec::new();
    let mut date_availability = BTreeMap::new();

    let mut date = first;
    while date <= last {
        let day_bookings: Vec<BookingInterval> = bookings
            .iter()
            .copied()
            .filter(|b| b.start_time.date_naive() == date)
            .collect();

        let slots = calculate_available_slots(date, &day_bookings, service_duration, hours);

        let availability = DateAvailability {
            date,
            is_available: !slots.is_empty(),
            available_slots: slots.len() as u32,
            total_slots,
        };

        if availability.is_available {
            available_dates.push(date);
        }
        date_availability.insert(date.format("%Y-%m-%d").to_string(), availability);

        date = date + Duration::days(1);
    }

    AvailabilityResponse {
        barber_id,
        available_dates,
        date_availability,
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    midnight(date) + Duration::days(1) - Duration::milliseconds(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOURS: BusinessHours = BusinessHours {
        open_hour: 9,
        close_hour: 19,
    };

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }

    fn booking(date: NaiveDate, start_min: i64, end_min: i64) -> BookingInterval {
        BookingInterval {
            start_time: midnight(date) + Duration::minutes(start_min),
            end_time: midnight(date) + Duration::minutes(end_min),
        }
    }

    #[test]
    fn test_empty_day_yields_twenty_slots() {
        let slots = calculate_available_slots(day(), &[], 30, HOURS);

        assert_eq!(slots.len(), 20);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("18:30"));
        // A 19:00 start would end after close
        assert!(!slots.iter().any(|s| s == "19:00"));
    }

    #[test]
    fn test_booked_slot_excluded() {
        let bookings = [booking(day(), 10 * 60, 10 * 60 + 30)];
        let slots = calculate_available_slots(day(), &bookings, 30, HOURS);

        assert!(!slots.iter().any(|s| s == "10:00"));
        assert!(slots.iter().any(|s| s == "09:30"));
        assert!(slots.iter().any(|s| s == "10:30"));
        assert_eq!(slots.len(), 19);
    }

    #[test]
    fn test_long_booking_blocks_every_touched_boundary() {
        // [10:00, 11:30)
        let bookings = [booking(day(), 10 * 60, 11 * 60 + 30)];
        let slots = calculate_available_slots(day(), &bookings, 30, HOURS);

        for taken in ["10:00", "10:30", "11:00"] {
            assert!(!slots.iter().any(|s| s == taken), "{taken} should be taken");
        }
        assert!(slots.iter().any(|s| s == "09:30"));
        assert!(slots.iter().any(|s| s == "11:30"));
    }

    #[test]
    fn test_long_service_shrinks_tail() {
        let slots = calculate_available_slots(day(), &[], 60, HOURS);

        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        // A 60-minute service must start by 18:00 to finish by close
        assert_eq!(slots.last().map(String::as_str), Some("18:00"));
    }

    #[test]
    fn test_oversized_service_yields_no_slots() {
        let slots = calculate_available_slots(day(), &[], 11 * 60, HOURS);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_slots_strictly_ascending() {
        let bookings = [
            booking(day(), 9 * 60 + 30, 10 * 60),
            booking(day(), 14 * 60, 15 * 60),
        ];
        let slots = calculate_available_slots(day(), &bookings, 30, HOURS);

        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_thirty_free_days() {
        let barber_id = Uuid::new_v4();
        let first = day();
        let last = first + Duration::days(29);

        let response = build_availability(barber_id, &[], first, last, 30, HOURS);

        assert_eq!(response.barber_id, barber_id);
        assert_eq!(response.available_dates.len(), 30);
        assert_eq!(response.date_availability.len(), 30);
        for availability in response.date_availability.values() {
            assert!(availability.is_available);
            assert_eq!(availability.available_slots, 20);
            assert_eq!(availability.total_slots, 20);
        }
        for pair in response.available_dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_fully_booked_day_not_available() {
        let first = day();
        let last = first + Duration::days(2);
        // Whole opening window taken on the middle day
        let middle = first + Duration::days(1);
        let bookings = [booking(middle, 9 * 60, 19 * 60)];

        let response = build_availability(Uuid::new_v4(), &bookings, first, last, 30, HOURS);

        assert_eq!(response.available_dates.len(), 2);
        assert!(!response.available_dates.contains(&middle));

        let key = middle.format("%Y-%m-%d").to_string();
        let middle_availability = &response.date_availability[&key];
        assert!(!middle_availability.is_available);
        assert_eq!(middle_availability.available_slots, 0);
        assert_eq!(middle_availability.total_slots, 20);
    }

    #[test]
    fn test_bookings_only_count_on_their_own_day() {
        let first = day();
        let last = first + Duration::days(1);
        let bookings = [booking(first, 10 * 60, 10 * 60 + 30)];

        let response = build_availability(Uuid::new_v4(), &bookings, first, last, 30, HOURS);

        let first_key = first.format("%Y-%m-%d").to_string();
        let next_key = last.format("%Y-%m-%d").to_string();
        assert_eq!(response.date_availability[&first_key].available_slots, 19);
        assert_eq!(response.date_availability[&next_key].available_slots, 20);
    }
}
