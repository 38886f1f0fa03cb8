//! Shared domain types for fleet event-to-driver association.

#![deny(unsafe_code)]

pub mod driver;
pub mod error;
pub mod event;
pub mod ids;
pub mod incident;
pub mod matching;
pub mod system;

pub use driver::DriverNameRecord;
pub use error::{ModelError, Result};
pub use event::VehicleEvent;
pub use ids::{DriverId, EventId, VehicleId};
pub use incident::{Incident, IncidentSeverity, IncidentStatus, IncidentType};
pub use matching::{
    AssociationMethod, AssociationOptions, BatchSummary, EventAssociationResult, MatchCandidate,
    NameMatchResult,
};
pub use system::SourceSystem;
