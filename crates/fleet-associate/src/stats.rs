//! Association statistics for operational dashboards. Pure read.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::store::{EventStore, StoreError};

/// Aggregate association counts over the event store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationStats {
    pub total_events: usize,
    pub associated: usize,
    pub unassociated: usize,
    /// associated / total, 0.0 when the store is empty.
    pub association_rate: f64,
    /// Associations written in the 24 hours before `now`.
    pub associated_last_24h: usize,
}

pub fn association_stats(
    store: &dyn EventStore,
    clock: &dyn Clock,
) -> Result<AssociationStats, StoreError> {
    let events = store.all_events()?;
    let now = clock.now();
    let cutoff = now - TimeDelta::hours(24);

    let total_events = events.len();
    let associated = events.iter().filter(|e| e.driver_id.is_some()).count();
    let associated_last_24h = events
        .iter()
        .filter(|e| e.associated_at.is_some_and(|at| at > cutoff && at <= now))
        .count();

    Ok(AssociationStats {
        total_events,
        associated,
        unassociated: total_events - associated,
        association_rate: if total_events == 0 {
            0.0
        } else {
            associated as f64 / total_events as f64
        },
        associated_last_24h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryFleetStore;
    use crate::store::EventStore as _;
    use chrono::{DateTime, TimeZone, Utc};
    use fleet_model::{DriverId, EventId, SourceSystem, VehicleEvent};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn empty_store_reports_zero_rate() {
        let store = InMemoryFleetStore::new();
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap());
        let stats = association_stats(&store, &clock).unwrap();
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.association_rate, 0.0);
    }

    #[test]
    fn counts_partition_and_respect_the_window() {
        let store = InMemoryFleetStore::new();
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
        let clock = FixedClock(now);

        for (id, name) in [("e1", "John Smith"), ("e2", "Jane Doe"), ("e3", "")] {
            store.insert_event(VehicleEvent::new(
                EventId::new(id).unwrap(),
                name,
                SourceSystem::Lytx,
                "speeding",
                now - TimeDelta::days(2),
            ));
        }

        let driver = DriverId::new("d1").unwrap();
        // Recent association, inside the 24h window.
        store
            .assign_driver(
                &EventId::new("e1").unwrap(),
                &driver,
                now - TimeDelta::hours(2),
            )
            .unwrap();
        // Old association, outside the window.
        store
            .assign_driver(
                &EventId::new("e2").unwrap(),
                &driver,
                now - TimeDelta::hours(30),
            )
            .unwrap();

        let stats = association_stats(&store, &clock).unwrap();
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.associated, 2);
        assert_eq!(stats.unassociated, 1);
        assert!((stats.association_rate - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats.associated_last_24h, 1);
    }
}
