//! Caller-owned cache of externally supplied ephemeris states.
//!
//! The cache is an explicit value passed by the caller — never a module
//! global — so the engine stays side-effect-free and testable. Entries are
//! keyed by body name and calendar date and considered fresh for 24 hours
//! after insertion.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use impact_orbits::StateVector;

/// How long a cached state stays fresh.
pub const CACHE_VALIDITY_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    body: String,
    date: NaiveDate,
}

/// A cached ephemeris state and the instant it was supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachedState {
    pub state: StateVector,
    pub fetched_at: DateTime<Utc>,
}

/// Keyed store of externally supplied state vectors.
#[derive(Debug, Clone, Default)]
pub struct EphemerisCache {
    entries: HashMap<CacheKey, CachedState>,
}

impl EphemerisCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a state for `body` at the calendar date of `moment`.
    pub fn insert(
        &mut self,
        body: &str,
        moment: DateTime<Utc>,
        state: StateVector,
        fetched_at: DateTime<Utc>,
    ) {
        self.entries.insert(
            CacheKey {
                body: body.to_ascii_lowercase(),
                date: moment.date_naive(),
            },
            CachedState { state, fetched_at },
        );
    }

    /// Fetch the entry for `body` on the date of `moment`, if still fresh
    /// as of `now`.
    pub fn get(&self, body: &str, moment: DateTime<Utc>, now: DateTime<Utc>) -> Option<&CachedState> {
        let key = CacheKey {
            body: body.to_ascii_lowercase(),
            date: moment.date_naive(),
        };
        self.entries
            .get(&key)
            .filter(|entry| now - entry.fetched_at < chrono::Duration::hours(CACHE_VALIDITY_HOURS))
    }

    /// Drop entries that are no longer fresh as of `now`.
    pub fn purge_stale(&mut self, now: DateTime<Utc>) {
        self.entries
            .retain(|_, entry| now - entry.fetched_at < chrono::Duration::hours(CACHE_VALIDITY_HOURS));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
