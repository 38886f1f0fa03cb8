//! CSV ingestion of vehicle events and driver rosters.
//!
//! The external systems export CSV with inconsistent headers, mixed date
//! conventions, and the occasional malformed row. Ingestion resolves
//! columns by alias, parses what it can, and reports what it skipped.

#![deny(unsafe_code)]

pub mod csv_events;
pub mod csv_roster;
pub mod dates;
mod error;
mod headers;

pub use csv_events::{EventIngest, IngestReport, SkippedRow, read_events_csv};
pub use csv_roster::read_roster_csv;
pub use dates::parse_event_timestamp;
pub use error::{IngestError, Result};
