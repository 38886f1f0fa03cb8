//! Incident records derived from safety-relevant vehicle events.
//!
//! Incidents use controlled vocabularies rather than source free text so
//! downstream reporting can group them. The event-type and severity
//! mapping rules live in the association crate; this module only defines
//! the vocabularies and the record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DriverId, EventId, SourceSystem, VehicleId};

/// Controlled incident classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    /// Harsh acceleration, braking, or cornering.
    HarshDriving,
    Speeding,
    FollowingTooClose,
    Distraction,
    Fatigue,
    /// Safety or unauthorized-use policy violations.
    PolicyViolation,
}

impl IncidentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HarshDriving => "harsh_driving",
            Self::Speeding => "speeding",
            Self::FollowingTooClose => "following_too_close",
            Self::Distraction => "distraction",
            Self::Fatigue => "fatigue",
            Self::PolicyViolation => "policy_violation",
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controlled incident severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentSeverity {
    Low,
    Moderate,
    High,
    Critical,
}

/// Workflow state of an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    Open,
    UnderReview,
    Closed,
}

/// A safety incident created as a side effect of event association.
///
/// Write-only from the association engine's perspective; this subsystem
/// never reads incidents back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub driver_id: DriverId,
    pub vehicle_id: Option<VehicleId>,
    pub incident_type: IncidentType,
    pub source_system: SourceSystem,
    /// Id of the vehicle event this incident was derived from.
    pub external_event_id: EventId,
    pub occurred_at: DateTime<Utc>,
    pub location: Option<String>,
    pub severity: IncidentSeverity,
    pub status: IncidentStatus,
}
