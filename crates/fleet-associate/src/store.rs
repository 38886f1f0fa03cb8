//! Boundary traits for the external data stores.
//!
//! Persistence, querying, and transactional guarantees belong to the
//! hosted backend; these traits are the seams the engine talks through.
//! [`crate::memory::InMemoryFleetStore`] implements all three for tests
//! and the CLI harness.

use chrono::{DateTime, Utc};
use thiserror::Error;

use fleet_model::{DriverId, DriverNameRecord, EventId, Incident, VehicleEvent};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("driver roster query failed: {0}")]
    Roster(String),
    #[error("event read failed: {0}")]
    EventRead(String),
    #[error("event write failed for {event_id}: {message}")]
    EventWrite { event_id: EventId, message: String },
    #[error("incident write failed: {0}")]
    IncidentWrite(String),
}

/// Read-only query over the driver roster.
pub trait DriverRoster: Send + Sync {
    /// Name mappings for active drivers across all systems. The active
    /// filter is applied here, at the data-source boundary.
    fn active_name_records(&self) -> Result<Vec<DriverNameRecord>, StoreError>;
}

/// The event records the engine reads and writes back to.
pub trait EventStore: Send + Sync {
    /// Persist a resolved driver id plus the association timestamp.
    fn assign_driver(
        &self,
        event_id: &EventId,
        driver_id: &DriverId,
        associated_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Full event listing, used by the statistics query.
    fn all_events(&self) -> Result<Vec<VehicleEvent>, StoreError>;
}

/// Write-only incident sink.
pub trait IncidentStore: Send + Sync {
    fn create(&self, incident: Incident) -> Result<(), StoreError>;
}
