use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use fleet_associate::{
    AssociationEngine, Clock, DriverRoster, InMemoryFleetStore, StoreError, default_roster_ttl,
};
use fleet_model::{
    AssociationMethod, AssociationOptions, DriverId, DriverNameRecord, EventId, SourceSystem,
    VehicleEvent,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn seeded_store() -> Arc<InMemoryFleetStore> {
    let store = Arc::new(InMemoryFleetStore::new());
    store.insert_driver(DriverNameRecord::active(
        DriverId::new("d1").unwrap(),
        SourceSystem::Lytx,
        "Mike Smith",
        "Mike",
        "Smith",
    ));
    store.insert_driver(DriverNameRecord::active(
        DriverId::new("d2").unwrap(),
        SourceSystem::Guardian,
        "Jane Doe",
        "Jane",
        "Doe",
    ));
    store
}

fn engine_for(store: &Arc<InMemoryFleetStore>) -> AssociationEngine {
    AssociationEngine::with_clock(
        Arc::clone(store) as Arc<dyn fleet_associate::DriverRoster>,
        Arc::clone(store) as Arc<dyn fleet_associate::EventStore>,
        Arc::clone(store) as Arc<dyn fleet_associate::IncidentStore>,
        default_roster_ttl(),
        Arc::new(FixedClock(test_now())),
    )
}

fn event(id: &str, driver_name: &str, source: SourceSystem, event_type: &str) -> VehicleEvent {
    VehicleEvent::new(
        EventId::new(id).unwrap(),
        driver_name,
        source,
        event_type,
        test_now(),
    )
}

#[test]
fn nickname_spelling_produces_a_fuzzy_match() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let event = event("e1", "Michael Smith", SourceSystem::Lytx, "speeding");
    store.insert_event(event.clone());

    let result = engine.associate_event(&event, &AssociationOptions::default());
    assert_eq!(result.method, AssociationMethod::FuzzyMatch);
    assert_eq!(result.driver_id, Some(DriverId::new("d1").unwrap()));
    assert!(result.confidence >= 0.7, "confidence was {}", result.confidence);
    assert!(result.error.is_none());

    let stored = store.event(&EventId::new("e1").unwrap()).unwrap();
    assert_eq!(stored.driver_id, Some(DriverId::new("d1").unwrap()));
    assert_eq!(stored.associated_at, Some(test_now()));
}

#[test]
fn empty_driver_name_is_a_per_event_error() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let event = event("e1", "", SourceSystem::Lytx, "speeding");

    let result = engine.associate_event(&event, &AssociationOptions::default());
    assert_eq!(result.method, AssociationMethod::Unmatched);
    assert!(result.driver_id.is_none());
    assert!(result.error.is_some());
}

#[test]
fn unknown_name_is_unmatched_without_error() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let event = event("e1", "Zzyzx Quux", SourceSystem::Lytx, "speeding");
    store.insert_event(event.clone());

    let result = engine.associate_event(&event, &AssociationOptions::default());
    assert_eq!(result.method, AssociationMethod::Unmatched);
    assert!(result.driver_id.is_none());
    assert!(result.error.is_none());

    // No side effects below the threshold.
    let stored = store.event(&EventId::new("e1").unwrap()).unwrap();
    assert!(stored.driver_id.is_none());
}

#[test]
fn exact_mode_requires_same_system_equality() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let options = AssociationOptions {
        require_exact_match: true,
        ..AssociationOptions::default()
    };

    let hit = event("e1", "mike smith", SourceSystem::Lytx, "speeding");
    store.insert_event(hit.clone());
    let result = engine.associate_event(&hit, &options);
    assert_eq!(result.method, AssociationMethod::ExactMatch);
    assert_eq!(result.confidence, 1.0);

    // Same name, wrong system.
    let miss = event("e2", "mike smith", SourceSystem::Guardian, "speeding");
    store.insert_event(miss.clone());
    let result = engine.associate_event(&miss, &options);
    assert_eq!(result.method, AssociationMethod::Unmatched);
    assert!(result.driver_id.is_none());
}

#[test]
fn existing_association_is_not_clobbered_by_default() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let prior = DriverId::new("d2").unwrap();
    let event = event("e1", "Mike Smith", SourceSystem::Lytx, "speeding")
        .with_driver_id(prior.clone());
    store.insert_event(event.clone());

    let result = engine.associate_event(&event, &AssociationOptions::default());
    // The match is still computed and reported...
    assert_eq!(result.driver_id, Some(DriverId::new("d1").unwrap()));

    // ...but the persisted record keeps its original driver.
    let stored = store.event(&EventId::new("e1").unwrap()).unwrap();
    assert_eq!(stored.driver_id, Some(prior));

    // With update_existing the write goes through.
    let options = AssociationOptions {
        update_existing: true,
        ..AssociationOptions::default()
    };
    engine.associate_event(&event, &options);
    let stored = store.event(&EventId::new("e1").unwrap()).unwrap();
    assert_eq!(stored.driver_id, Some(DriverId::new("d1").unwrap()));
}

#[test]
fn safety_events_create_incidents_when_enabled() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let options = AssociationOptions {
        create_incidents: true,
        ..AssociationOptions::default()
    };

    let harsh = event("e1", "Mike Smith", SourceSystem::Lytx, "Harsh Braking").with_severity("High");
    store.insert_event(harsh.clone());
    engine.associate_event(&harsh, &options);

    let routine = event("e2", "Mike Smith", SourceSystem::Lytx, "ignition on");
    store.insert_event(routine.clone());
    engine.associate_event(&routine, &options);

    let incidents = store.incidents();
    assert_eq!(incidents.len(), 1);
    assert_eq!(incidents[0].external_event_id.as_str(), "e1");
    assert_eq!(incidents[0].driver_id.as_str(), "d1");
}

#[test]
fn manual_association_bypasses_matching() {
    let store = seeded_store();
    let engine = engine_for(&store);
    let event = event("e1", "someone illegible", SourceSystem::MtData, "refuel");
    store.insert_event(event.clone());

    let driver = DriverId::new("d2").unwrap();
    let result = engine.manual_association(&EventId::new("e1").unwrap(), &driver);
    assert_eq!(result.method, AssociationMethod::ManualOverride);
    assert_eq!(result.confidence, 1.0);
    assert!(result.error.is_none());

    let stored = store.event(&EventId::new("e1").unwrap()).unwrap();
    assert_eq!(stored.driver_id, Some(driver));
}

#[test]
fn manual_association_surfaces_persistence_failure() {
    let store = seeded_store();
    let engine = engine_for(&store);
    // Event was never inserted, so the write fails.
    let result = engine.manual_association(
        &EventId::new("ghost").unwrap(),
        &DriverId::new("d1").unwrap(),
    );
    assert_eq!(result.method, AssociationMethod::Unmatched);
    assert!(result.error.is_some());
}

#[test]
fn batch_yields_one_result_per_event_and_partitions_counts() {
    let store = seeded_store();
    let engine = engine_for(&store);

    let events = vec![
        event("e1", "Michael Smith", SourceSystem::Lytx, "speeding"),
        event("e2", "", SourceSystem::Lytx, "speeding"),
        event("e3", "Nobody Known", SourceSystem::Guardian, "fatigue"),
        event("e4", "Jane Doe", SourceSystem::Guardian, "fatigue"),
    ];
    for e in &events {
        store.insert_event(e.clone());
    }

    let options = AssociationOptions {
        batch_size: 2,
        ..AssociationOptions::default()
    };
    let report = engine.associate_batch(&events, &options);

    assert_eq!(report.results.len(), events.len());
    assert_eq!(report.summary.total, events.len());
    assert!(report.summary.is_consistent());
    assert_eq!(report.summary.matched, 2);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.unmatched, 1);
    assert_eq!(report.summary.high_confidence, 1); // Jane Doe is exact.
}

struct CountingRoster {
    fetches: AtomicUsize,
}

impl DriverRoster for CountingRoster {
    fn active_name_records(&self) -> Result<Vec<DriverNameRecord>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![DriverNameRecord::active(
            DriverId::new("d1").unwrap(),
            SourceSystem::Lytx,
            "Mike Smith",
            "Mike",
            "Smith",
        )])
    }
}

#[test]
fn clearing_the_cache_triggers_exactly_one_refetch() {
    let roster = Arc::new(CountingRoster {
        fetches: AtomicUsize::new(0),
    });
    let store = Arc::new(InMemoryFleetStore::new());
    let engine = AssociationEngine::with_clock(
        Arc::clone(&roster) as Arc<dyn DriverRoster>,
        Arc::clone(&store) as Arc<dyn fleet_associate::EventStore>,
        Arc::clone(&store) as Arc<dyn fleet_associate::IncidentStore>,
        default_roster_ttl(),
        Arc::new(FixedClock(test_now())),
    );

    let sample = event("e1", "Mike Smith", SourceSystem::Lytx, "speeding");
    store.insert_event(sample.clone());

    engine.associate_event(&sample, &AssociationOptions::default());
    engine.associate_event(&sample, &AssociationOptions::default());
    assert_eq!(roster.fetches.load(Ordering::SeqCst), 1);

    engine.clear_cache();
    engine.associate_event(&sample, &AssociationOptions::default());
    engine.associate_event(&sample, &AssociationOptions::default());
    assert_eq!(roster.fetches.load(Ordering::SeqCst), 2);
}
