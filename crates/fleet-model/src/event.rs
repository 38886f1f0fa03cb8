//! Vehicle events as reported by the telemetry and safety systems.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DriverId, EventId, SourceSystem, VehicleId};

/// A safety or telemetry event consumed from an external system.
///
/// `driver_name` is free text exactly as the source reported it;
/// `driver_id` is filled in by the association engine once the name has
/// been resolved against the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleEvent {
    pub id: EventId,
    /// Free-text driver name as reported by the source system.
    pub driver_name: String,
    /// Resolved driver, if an association has already been made.
    pub driver_id: Option<DriverId>,
    /// When the association was last written, if ever.
    pub associated_at: Option<DateTime<Utc>>,
    pub vehicle_id: Option<VehicleId>,
    pub source: SourceSystem,
    /// Source-specific event classification (e.g. "harsh braking").
    pub event_type: String,
    pub occurred_at: DateTime<Utc>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Severity text as reported by the source, if any.
    pub severity: Option<String>,
}

impl VehicleEvent {
    /// Builder-style constructor with the required fields only.
    pub fn new(
        id: EventId,
        driver_name: impl Into<String>,
        source: SourceSystem,
        event_type: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            driver_name: driver_name.into(),
            driver_id: None,
            associated_at: None,
            vehicle_id: None,
            source,
            event_type: event_type.into(),
            occurred_at,
            location: None,
            latitude: None,
            longitude: None,
            severity: None,
        }
    }

    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_driver_id(mut self, driver_id: DriverId) -> Self {
        self.driver_id = Some(driver_id);
        self
    }
}
