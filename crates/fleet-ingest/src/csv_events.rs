//! Vehicle event ingestion from CSV exports.
//!
//! Each source system exports a different column set; ingestion resolves
//! columns by alias and tolerates missing optional fields. Rows without a
//! usable id or timestamp are skipped and reported rather than failing
//! the file.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use fleet_model::{DriverId, EventId, SourceSystem, VehicleEvent, VehicleId};

use crate::dates::parse_event_timestamp;
use crate::error::{IngestError, Result};
use crate::headers::{cell, find_column, normalize_header};

const ID_ALIASES: &[&str] = &["id", "eventid", "recordid"];
const DRIVER_ALIASES: &[&str] = &["driver", "drivername", "driverfullname", "operator"];
const SOURCE_ALIASES: &[&str] = &["source", "system", "sourcesystem", "provider"];
const TYPE_ALIASES: &[&str] = &["eventtype", "type", "event", "behavior", "behaviour"];
const TIMESTAMP_ALIASES: &[&str] = &[
    "timestamp",
    "occurredat",
    "eventtime",
    "eventdate",
    "datetime",
    "date",
];
const LOCATION_ALIASES: &[&str] = &["location", "site", "address"];
const LATITUDE_ALIASES: &[&str] = &["latitude", "lat"];
const LONGITUDE_ALIASES: &[&str] = &["longitude", "lon", "lng"];
const SEVERITY_ALIASES: &[&str] = &["severity", "priority", "level"];
const VEHICLE_ALIASES: &[&str] = &["vehicleid", "vehicle", "fleetnumber", "rego"];
const DRIVER_ID_ALIASES: &[&str] = &["driverid", "resolveddriverid"];
const ASSOCIATED_AT_ALIASES: &[&str] = &["associatedat", "assignedat"];

/// A row that could not be turned into an event.
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based data row number (header excluded).
    pub row: usize,
    pub reason: String,
}

/// Outcome counters for one file.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub rows_read: usize,
    pub events_loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Events plus the per-file report.
#[derive(Debug, Clone)]
pub struct EventIngest {
    pub events: Vec<VehicleEvent>,
    pub report: IngestReport,
}

/// Load vehicle events from a CSV export.
///
/// The file must carry id, driver, and timestamp columns (by any known
/// alias); everything else is optional. A missing source column tags all
/// rows [`SourceSystem::Unknown`].
pub fn read_events_csv(path: &Path) -> Result<EventIngest> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(normalize_header)
        .collect();

    let id_col = find_column(&headers, ID_ALIASES).ok_or(IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: "event id",
    })?;
    let driver_col = find_column(&headers, DRIVER_ALIASES).ok_or(IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: "driver name",
    })?;
    let timestamp_col =
        find_column(&headers, TIMESTAMP_ALIASES).ok_or(IngestError::MissingColumn {
            path: path.to_path_buf(),
            column: "timestamp",
        })?;
    let source_col = find_column(&headers, SOURCE_ALIASES);
    let type_col = find_column(&headers, TYPE_ALIASES);
    let location_col = find_column(&headers, LOCATION_ALIASES);
    let latitude_col = find_column(&headers, LATITUDE_ALIASES);
    let longitude_col = find_column(&headers, LONGITUDE_ALIASES);
    let severity_col = find_column(&headers, SEVERITY_ALIASES);
    let vehicle_col = find_column(&headers, VEHICLE_ALIASES);
    let driver_id_col = find_column(&headers, DRIVER_ID_ALIASES);
    let associated_at_col = find_column(&headers, ASSOCIATED_AT_ALIASES);

    let mut events = Vec::new();
    let mut report = IngestReport::default();

    for (index, record) in reader.records().enumerate() {
        let row_number = index + 1;
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                warn!(row = row_number, %error, "unreadable CSV row");
                report.rows_read += 1;
                report.skipped.push(SkippedRow {
                    row: row_number,
                    reason: error.to_string(),
                });
                continue;
            }
        };
        report.rows_read += 1;

        let id = match cell(&record, Some(id_col)).map(EventId::new) {
            Some(Ok(id)) => id,
            _ => {
                report.skipped.push(SkippedRow {
                    row: row_number,
                    reason: "missing event id".to_string(),
                });
                continue;
            }
        };
        let Some(occurred_at) =
            cell(&record, Some(timestamp_col)).and_then(parse_event_timestamp)
        else {
            report.skipped.push(SkippedRow {
                row: row_number,
                reason: "missing or unparseable timestamp".to_string(),
            });
            continue;
        };

        let driver_name = cell(&record, Some(driver_col)).unwrap_or_default();
        let source = cell(&record, source_col)
            .map_or(SourceSystem::Unknown, SourceSystem::parse);
        let event_type = cell(&record, type_col).unwrap_or_default();

        let mut event = VehicleEvent::new(id, driver_name, source, event_type, occurred_at);
        event.location = cell(&record, location_col).map(str::to_string);
        event.latitude = cell(&record, latitude_col).and_then(|v| v.parse().ok());
        event.longitude = cell(&record, longitude_col).and_then(|v| v.parse().ok());
        event.severity = cell(&record, severity_col).map(str::to_string);
        event.vehicle_id = cell(&record, vehicle_col).and_then(|v| VehicleId::new(v).ok());
        // Re-exported events may already carry a resolved association.
        event.driver_id = cell(&record, driver_id_col).and_then(|v| DriverId::new(v).ok());
        event.associated_at = cell(&record, associated_at_col).and_then(parse_event_timestamp);

        events.push(event);
        report.events_loaded += 1;
    }

    debug!(
        path = %path.display(),
        rows = report.rows_read,
        loaded = report.events_loaded,
        skipped = report.skipped.len(),
        "event CSV ingested"
    );
    Ok(EventIngest { events, report })
}
