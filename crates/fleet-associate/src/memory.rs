//! In-memory store backing tests and the CLI harness.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

use fleet_model::{DriverId, DriverNameRecord, EventId, Incident, VehicleEvent};

use crate::store::{DriverRoster, EventStore, IncidentStore, StoreError};

/// Mutex-guarded maps standing in for the hosted backend.
#[derive(Debug, Default)]
pub struct InMemoryFleetStore {
    drivers: Mutex<Vec<DriverNameRecord>>,
    events: Mutex<BTreeMap<EventId, VehicleEvent>>,
    incidents: Mutex<Vec<Incident>>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_driver(&self, record: DriverNameRecord) {
        self.drivers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }

    pub fn insert_event(&self, event: VehicleEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(event.id.clone(), event);
    }

    pub fn event(&self, id: &EventId) -> Option<VehicleEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn incidents(&self) -> Vec<Incident> {
        self.incidents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DriverRoster for InMemoryFleetStore {
    fn active_name_records(&self) -> Result<Vec<DriverNameRecord>, StoreError> {
        let drivers = self.drivers.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(drivers
            .iter()
            .filter(|record| record.is_active)
            .cloned()
            .collect())
    }
}

impl EventStore for InMemoryFleetStore {
    fn assign_driver(
        &self,
        event_id: &EventId,
        driver_id: &DriverId,
        associated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        let event = events
            .get_mut(event_id)
            .ok_or_else(|| StoreError::EventWrite {
                event_id: event_id.clone(),
                message: "event not found".to_string(),
            })?;
        event.driver_id = Some(driver_id.clone());
        event.associated_at = Some(associated_at);
        Ok(())
    }

    fn all_events(&self) -> Result<Vec<VehicleEvent>, StoreError> {
        let events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(events.values().cloned().collect())
    }
}

impl IncidentStore for InMemoryFleetStore {
    fn create(&self, incident: Incident) -> Result<(), StoreError> {
        self.incidents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(incident);
        Ok(())
    }
}
