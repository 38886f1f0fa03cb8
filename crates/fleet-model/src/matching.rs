//! Match and association result types.
//!
//! [`NameMatchResult`] is transient: produced per query, never persisted.
//! [`EventAssociationResult`] is written back alongside the event record
//! and feeds the batch summary counters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{DriverId, EventId, SourceSystem};

/// A scored candidate driver for a free-text name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub driver_id: DriverId,
    /// Confidence in [0, 1] that the candidate is the named person.
    pub confidence: f64,
    /// The roster spelling that produced this score.
    pub matched_name: String,
    pub matched_system: SourceSystem,
}

/// Best match for a name query plus runner-up alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameMatchResult {
    pub best: MatchCandidate,
    /// Up to three runner-ups, confidence descending.
    pub alternatives: Vec<MatchCandidate>,
}

/// How an event was linked to a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationMethod {
    /// Confidence >= 0.9 or exact case-insensitive name equality.
    ExactMatch,
    FuzzyMatch,
    ManualOverride,
    /// No candidate cleared the threshold. Implies no driver id.
    Unmatched,
}

impl AssociationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactMatch => "exact_match",
            Self::FuzzyMatch => "fuzzy_match",
            Self::ManualOverride => "manual_override",
            Self::Unmatched => "unmatched",
        }
    }
}

impl fmt::Display for AssociationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-event outcome of an association run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAssociationResult {
    pub event_id: EventId,
    pub driver_id: Option<DriverId>,
    pub confidence: f64,
    pub matched_name: Option<String>,
    pub matched_system: Option<SourceSystem>,
    pub method: AssociationMethod,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<MatchCandidate>,
    /// Failure description. Absence of a match is not a failure and does
    /// not set this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EventAssociationResult {
    /// An unmatched outcome with no error: nothing cleared the threshold.
    pub fn unmatched(event_id: EventId) -> Self {
        Self {
            event_id,
            driver_id: None,
            confidence: 0.0,
            matched_name: None,
            matched_system: None,
            method: AssociationMethod::Unmatched,
            alternatives: Vec::new(),
            error: None,
        }
    }

    /// A failed outcome: the event could not be processed.
    pub fn failed(event_id: EventId, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::unmatched(event_id)
        }
    }

    /// True when a driver was resolved and no error occurred.
    pub fn is_matched(&self) -> bool {
        self.driver_id.is_some() && self.error.is_none()
    }
}

/// Tuning knobs for the association engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationOptions {
    /// Minimum confidence for a fuzzy match to be accepted.
    pub minimum_confidence: f64,
    /// Only accept exact case-insensitive name equality in the same system.
    pub require_exact_match: bool,
    /// Overwrite an existing resolved driver id on the event record.
    pub update_existing: bool,
    /// Create incident records for safety-relevant event types.
    pub create_incidents: bool,
    /// Events processed per batch chunk.
    pub batch_size: usize,
}

impl Default for AssociationOptions {
    fn default() -> Self {
        Self {
            minimum_confidence: 0.7,
            require_exact_match: false,
            update_existing: false,
            create_incidents: false,
            batch_size: 100,
        }
    }
}

/// Aggregate counters for a batch association run.
///
/// Every event lands in exactly one of `matched`, `failed`, or
/// `unmatched`, so the three always sum to `total`. The confidence bands
/// count matched events only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub matched: usize,
    pub failed: usize,
    pub unmatched: usize,
    /// Matched with confidence >= 0.9.
    pub high_confidence: usize,
    /// Matched with confidence in [0.7, 0.9).
    pub medium_confidence: usize,
    /// Matched below 0.7 (possible with a lowered threshold).
    pub low_confidence: usize,
}

impl BatchSummary {
    /// Fold one per-event result into the counters.
    pub fn record(&mut self, result: &EventAssociationResult) {
        self.total += 1;
        if result.error.is_some() {
            self.failed += 1;
        } else if result.driver_id.is_some() {
            self.matched += 1;
            if result.confidence >= 0.9 {
                self.high_confidence += 1;
            } else if result.confidence >= 0.7 {
                self.medium_confidence += 1;
            } else {
                self.low_confidence += 1;
            }
        } else {
            self.unmatched += 1;
        }
    }

    /// Partition invariant: matched + failed + unmatched == total.
    pub fn is_consistent(&self) -> bool {
        self.matched + self.failed + self.unmatched == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_id(raw: &str) -> EventId {
        EventId::new(raw).unwrap()
    }

    #[test]
    fn unmatched_result_has_no_driver_and_no_error() {
        let result = EventAssociationResult::unmatched(event_id("e1"));
        assert_eq!(result.method, AssociationMethod::Unmatched);
        assert!(result.driver_id.is_none());
        assert!(result.error.is_none());
        assert!(!result.is_matched());
    }

    #[test]
    fn summary_partitions_every_result() {
        let mut summary = BatchSummary::default();
        summary.record(&EventAssociationResult::unmatched(event_id("e1")));
        summary.record(&EventAssociationResult::failed(event_id("e2"), "boom"));

        let mut matched = EventAssociationResult::unmatched(event_id("e3"));
        matched.driver_id = Some(DriverId::new("d1").unwrap());
        matched.confidence = 0.92;
        matched.method = AssociationMethod::ExactMatch;
        summary.record(&matched);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.matched, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.unmatched, 1);
        assert_eq!(summary.high_confidence, 1);
        assert!(summary.is_consistent());
    }

    #[test]
    fn method_serializes_snake_case() {
        let json = serde_json::to_string(&AssociationMethod::ExactMatch).unwrap();
        assert_eq!(json, "\"exact_match\"");
    }
}
