//! Rules deriving incident records from safety-relevant events.
//!
//! The rule tables are configuration data: case-insensitive substrings of
//! the source event type, first match wins. Event types outside the
//! allow-list never produce incidents.

use fleet_model::{DriverId, Incident, IncidentSeverity, IncidentStatus, IncidentType, VehicleEvent};

/// Source event-type substring -> incident classification.
const INCIDENT_TYPE_RULES: &[(&str, IncidentType)] = &[
    ("harsh acceleration", IncidentType::HarshDriving),
    ("harsh brak", IncidentType::HarshDriving),
    ("harsh corner", IncidentType::HarshDriving),
    ("harsh driving", IncidentType::HarshDriving),
    ("speed", IncidentType::Speeding),
    ("following too close", IncidentType::FollowingTooClose),
    ("following distance", IncidentType::FollowingTooClose),
    ("tailgat", IncidentType::FollowingTooClose),
    ("distract", IncidentType::Distraction),
    ("fatigue", IncidentType::Fatigue),
    ("drowsy", IncidentType::Fatigue),
    ("microsleep", IncidentType::Fatigue),
    ("safety violation", IncidentType::PolicyViolation),
    ("unauthorized", IncidentType::PolicyViolation),
];

/// Source severity substring -> controlled severity.
const SEVERITY_RULES: &[(&str, IncidentSeverity)] = &[
    ("critical", IncidentSeverity::Critical),
    ("extreme", IncidentSeverity::Critical),
    ("high", IncidentSeverity::High),
    ("severe", IncidentSeverity::High),
    ("major", IncidentSeverity::High),
    ("low", IncidentSeverity::Low),
    ("minor", IncidentSeverity::Low),
];

/// Classify a source event type, or `None` when it is not safety-relevant.
pub fn incident_type_for(event_type: &str) -> Option<IncidentType> {
    let lowered = event_type.trim().to_ascii_lowercase();
    INCIDENT_TYPE_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map(|(_, incident_type)| *incident_type)
}

/// Map free-text severity onto the controlled vocabulary. Unrecognized or
/// missing severity defaults to moderate.
pub fn incident_severity_for(severity: Option<&str>) -> IncidentSeverity {
    let Some(raw) = severity else {
        return IncidentSeverity::Moderate;
    };
    let lowered = raw.trim().to_ascii_lowercase();
    SEVERITY_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
        .map_or(IncidentSeverity::Moderate, |(_, severity)| *severity)
}

/// Build the incident for a matched event, or `None` when the event type
/// is outside the allow-list.
pub fn build_incident(event: &VehicleEvent, driver_id: &DriverId) -> Option<Incident> {
    let incident_type = incident_type_for(&event.event_type)?;
    Some(Incident {
        driver_id: driver_id.clone(),
        vehicle_id: event.vehicle_id.clone(),
        incident_type,
        source_system: event.source,
        external_event_id: event.id.clone(),
        occurred_at: event.occurred_at,
        location: event.location.clone(),
        severity: incident_severity_for(event.severity.as_deref()),
        status: IncidentStatus::Open,
    })
}
