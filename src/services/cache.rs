//! Short-TTL memoization of availability responses

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::availability::AvailabilityResponse;

/// Clock seam so freshness can be tested without waiting on wall time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheEntry {
    response: AvailabilityResponse,
    stored_at: DateTime<Utc>,
}

/// Process-local cache of availability responses keyed by barber and date
/// range. Entries go stale after the TTL; nothing is evicted proactively.
/// Handlers run concurrently, so the map is Mutex-protected.
pub struct AvailabilityCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    clock: Box<dyn Clock>,
}

impl AvailabilityCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Box::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Box<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Cache key for a lookup. The instants must match byte for byte across
    /// calls for a hit; no normalization happens at this layer.
    pub fn key(barber_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!("{}-{}-{}", barber_id, start.to_rfc3339(), end.to_rfc3339())
    }

    /// Fresh entry for the key, if any. A stale entry counts as a miss and
    /// stays in place until the next `put` overwrites it.
    pub fn get(&self, key: &str) -> Option<AvailabilityResponse> {
        let entries = self.entries.lock().expect("availability cache lock poisoned");
        let entry = entries.get(key)?;

        if self.clock.now() - entry.stored_at < self.ttl {
            Some(entry.response.clone())
        } else {
            None
        }
    }

    /// Store a response, stamped with the current clock reading
    pub fn put(&self, key: String, response: AvailabilityResponse) {
        let stored_at = self.clock.now();
        let mut entries = self.entries.lock().expect("availability cache lock poisoned");
        entries.insert(key, CacheEntry { response, stored_at });
    }
}
