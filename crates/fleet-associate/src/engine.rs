//! The association engine: resolves free-text event driver names against
//! the cached roster and writes the outcome back to the event store.
//!
//! Every per-event failure is folded into that event's
//! [`EventAssociationResult::error`] field; nothing propagates out of a
//! batch. Absence of a match is not a failure.

use std::sync::Arc;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use fleet_match::find_best_match;
use fleet_model::{
    AssociationMethod, AssociationOptions, BatchSummary, DriverId, EventAssociationResult,
    EventId, VehicleEvent,
};

use crate::cache::{RosterCache, default_roster_ttl};
use crate::clock::{Clock, SystemClock};
use crate::incidents::build_incident;
use crate::stats::{AssociationStats, association_stats};
use crate::store::{DriverRoster, EventStore, IncidentStore, StoreError};

/// Results plus aggregate counters for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<EventAssociationResult>,
    pub summary: BatchSummary,
}

pub struct AssociationEngine {
    roster: Arc<dyn DriverRoster>,
    events: Arc<dyn EventStore>,
    incidents: Arc<dyn IncidentStore>,
    cache: RosterCache,
    clock: Arc<dyn Clock>,
}

impl AssociationEngine {
    /// Engine with the default five-minute roster TTL and wall-clock time.
    pub fn new(
        roster: Arc<dyn DriverRoster>,
        events: Arc<dyn EventStore>,
        incidents: Arc<dyn IncidentStore>,
    ) -> Self {
        Self::with_clock(
            roster,
            events,
            incidents,
            default_roster_ttl(),
            Arc::new(SystemClock),
        )
    }

    /// Engine with an explicit TTL and clock, for tests and callers that
    /// manage time themselves.
    pub fn with_clock(
        roster: Arc<dyn DriverRoster>,
        events: Arc<dyn EventStore>,
        incidents: Arc<dyn IncidentStore>,
        roster_ttl: TimeDelta,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            roster,
            events,
            incidents,
            cache: RosterCache::new(roster_ttl),
            clock,
        }
    }

    /// Drop the roster snapshot; the next association refetches it.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Resolve one event's driver name and persist the association.
    ///
    /// Infallible by design: failures land in the result's `error` field.
    pub fn associate_event(
        &self,
        event: &VehicleEvent,
        options: &AssociationOptions,
    ) -> EventAssociationResult {
        if event.driver_name.trim().is_empty() {
            return EventAssociationResult::failed(event.id.clone(), "event has no driver name");
        }

        let records = match self.cache.get(self.roster.as_ref(), self.clock.now()) {
            Ok(records) => records,
            Err(error) => {
                warn!(event_id = %event.id, %error, "roster fetch failed");
                return EventAssociationResult::failed(event.id.clone(), error.to_string());
            }
        };
        if records.is_empty() {
            return EventAssociationResult::failed(
                event.id.clone(),
                "no active driver name records available for matching",
            );
        }

        let mut result = if options.require_exact_match {
            self.exact_match(event, &records)
        } else {
            self.fuzzy_match(event, &records, options)
        };

        if result.driver_id.is_some() {
            self.persist_association(event, options, &mut result);
        }
        result
    }

    /// Link an event to a driver chosen by a human, bypassing matching.
    ///
    /// Only persistence can fail; a failed write reports an error with an
    /// unmatched method so the caller can retry.
    pub fn manual_association(
        &self,
        event_id: &EventId,
        driver_id: &DriverId,
    ) -> EventAssociationResult {
        match self
            .events
            .assign_driver(event_id, driver_id, self.clock.now())
        {
            Ok(()) => EventAssociationResult {
                event_id: event_id.clone(),
                driver_id: Some(driver_id.clone()),
                confidence: 1.0,
                matched_name: None,
                matched_system: None,
                method: AssociationMethod::ManualOverride,
                alternatives: Vec::new(),
                error: None,
            },
            Err(error) => {
                warn!(%event_id, %driver_id, %error, "manual association write failed");
                EventAssociationResult::failed(event_id.clone(), error.to_string())
            }
        }
    }

    /// Associate a slice of events in chunks of `options.batch_size`.
    ///
    /// Yields exactly one result per input event; one event's failure
    /// never aborts the rest.
    pub fn associate_batch(
        &self,
        events: &[VehicleEvent],
        options: &AssociationOptions,
    ) -> BatchReport {
        let chunk_size = options.batch_size.max(1);
        let mut results = Vec::with_capacity(events.len());
        let mut summary = BatchSummary::default();

        for (index, chunk) in events.chunks(chunk_size).enumerate() {
            debug!(chunk = index, events = chunk.len(), "associating batch chunk");
            for event in chunk {
                let result = self.associate_event(event, options);
                summary.record(&result);
                results.push(result);
            }
        }

        debug!(
            total = summary.total,
            matched = summary.matched,
            failed = summary.failed,
            unmatched = summary.unmatched,
            "batch association finished"
        );
        BatchReport { results, summary }
    }

    /// Aggregate association counts for operational dashboards.
    pub fn stats(&self) -> Result<AssociationStats, StoreError> {
        association_stats(self.events.as_ref(), self.clock.as_ref())
    }

    fn exact_match(
        &self,
        event: &VehicleEvent,
        records: &[fleet_model::DriverNameRecord],
    ) -> EventAssociationResult {
        let needle = event.driver_name.trim();
        let hit = records
            .iter()
            .filter(|record| {
                record.system == event.source && record.mapped_name.eq_ignore_ascii_case(needle)
            })
            .min_by(|a, b| {
                a.driver_id
                    .cmp(&b.driver_id)
                    .then_with(|| a.mapped_name.cmp(&b.mapped_name))
            });

        match hit {
            Some(record) => EventAssociationResult {
                event_id: event.id.clone(),
                driver_id: Some(record.driver_id.clone()),
                confidence: 1.0,
                matched_name: Some(record.mapped_name.clone()),
                matched_system: Some(record.system),
                method: AssociationMethod::ExactMatch,
                alternatives: Vec::new(),
                error: None,
            },
            None => EventAssociationResult::unmatched(event.id.clone()),
        }
    }

    fn fuzzy_match(
        &self,
        event: &VehicleEvent,
        records: &[fleet_model::DriverNameRecord],
        options: &AssociationOptions,
    ) -> EventAssociationResult {
        let Some(matched) =
            find_best_match(&event.driver_name, records, options.minimum_confidence)
        else {
            return EventAssociationResult::unmatched(event.id.clone());
        };

        let method = if matched.best.confidence >= 0.9
            || matched
                .best
                .matched_name
                .eq_ignore_ascii_case(event.driver_name.trim())
        {
            AssociationMethod::ExactMatch
        } else {
            AssociationMethod::FuzzyMatch
        };

        EventAssociationResult {
            event_id: event.id.clone(),
            driver_id: Some(matched.best.driver_id),
            confidence: matched.best.confidence,
            matched_name: Some(matched.best.matched_name),
            matched_system: Some(matched.best.matched_system),
            method,
            alternatives: matched.alternatives,
            error: None,
        }
    }

    /// Write the association (and any derived incident) back to storage.
    ///
    /// The write is skipped when the event already carries a resolved
    /// driver id and `update_existing` is off, so re-running a batch never
    /// clobbers earlier associations. Incidents are only created when the
    /// write happened, keeping re-runs idempotent.
    fn persist_association(
        &self,
        event: &VehicleEvent,
        options: &AssociationOptions,
        result: &mut EventAssociationResult,
    ) {
        if !options.update_existing && event.driver_id.is_some() {
            debug!(event_id = %event.id, "association already present, write skipped");
            return;
        }
        let Some(driver_id) = result.driver_id.clone() else {
            return;
        };

        if let Err(error) = self
            .events
            .assign_driver(&event.id, &driver_id, self.clock.now())
        {
            warn!(event_id = %event.id, %error, "association write failed");
            result.error = Some(error.to_string());
            return;
        }

        if options.create_incidents
            && let Some(incident) = build_incident(event, &driver_id)
            && let Err(error) = self.incidents.create(incident)
        {
            warn!(event_id = %event.id, %error, "incident creation failed");
            result.error = Some(error.to_string());
        }
    }
}
