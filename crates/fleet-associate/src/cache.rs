//! Time-bounded snapshot of the driver roster.
//!
//! A refresh fetches the full record set before swapping it in, so a
//! reader either sees the previous complete snapshot or the new complete
//! snapshot, never a partial one. This is a memoization layer, not a
//! general-purpose cache: there is no incremental update path.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::debug;

use fleet_model::DriverNameRecord;

use crate::store::{DriverRoster, StoreError};

/// Default snapshot lifetime: five minutes.
pub fn default_roster_ttl() -> TimeDelta {
    TimeDelta::minutes(5)
}

struct CacheEntry {
    records: Arc<[DriverNameRecord]>,
    fetched_at: DateTime<Utc>,
}

pub struct RosterCache {
    ttl: TimeDelta,
    entry: Mutex<Option<CacheEntry>>,
}

impl RosterCache {
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Return the cached snapshot, refreshing from `roster` when no value
    /// exists or the cached one is older than the TTL.
    pub fn get(
        &self,
        roster: &dyn DriverRoster,
        now: DateTime<Utc>,
    ) -> Result<Arc<[DriverNameRecord]>, StoreError> {
        {
            let guard = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(entry) = guard.as_ref()
                && now - entry.fetched_at < self.ttl
            {
                return Ok(Arc::clone(&entry.records));
            }
        }

        // Fetch fully outside the lock, then swap.
        let records: Arc<[DriverNameRecord]> = roster.active_name_records()?.into();
        debug!(count = records.len(), "refreshed driver roster cache");

        let mut guard = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(CacheEntry {
            records: Arc::clone(&records),
            fetched_at: now,
        });
        Ok(records)
    }

    /// Drop the snapshot; the next read refetches.
    pub fn clear(&self) {
        let mut guard = self.entry.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }
}
