//! Event-to-driver association on top of the matching core.
//!
//! The engine owns a TTL-bounded roster snapshot, resolves each event's
//! free-text driver name, writes the association (and any derived
//! incident) through the store seams, and reports aggregate statistics.

#![deny(unsafe_code)]

pub mod cache;
pub mod clock;
pub mod engine;
pub mod incidents;
pub mod memory;
pub mod stats;
pub mod store;

pub use cache::{RosterCache, default_roster_ttl};
pub use clock::{Clock, SystemClock};
pub use engine::{AssociationEngine, BatchReport};
pub use incidents::{build_incident, incident_severity_for, incident_type_for};
pub use memory::InMemoryFleetStore;
pub use stats::{AssociationStats, association_stats};
pub use store::{DriverRoster, EventStore, IncidentStore, StoreError};
