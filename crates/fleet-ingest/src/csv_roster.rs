//! Driver roster ingestion from CSV exports.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use fleet_match::extract_names;
use fleet_model::{DriverId, DriverNameRecord, SourceSystem};

use crate::error::{IngestError, Result};
use crate::headers::{cell, find_column, normalize_header};

const DRIVER_ID_ALIASES: &[&str] = &["driverid", "id", "employeeid", "staffid"];
const NAME_ALIASES: &[&str] = &["mappedname", "name", "drivername", "fullname"];
const SYSTEM_ALIASES: &[&str] = &["system", "source", "sourcesystem"];
const FIRST_NAME_ALIASES: &[&str] = &["firstname", "givenname"];
const LAST_NAME_ALIASES: &[&str] = &["lastname", "surname", "familyname"];
const ACTIVE_ALIASES: &[&str] = &["isactive", "active", "status"];

/// Load active driver name records from a roster CSV.
///
/// The file must carry driver-id and name columns. First and last names
/// are taken from explicit columns when present and derived from the full
/// name otherwise. Rows flagged inactive are dropped; a missing active
/// column means every row is active.
pub fn read_roster_csv(path: &Path) -> Result<Vec<DriverNameRecord>> {
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

    let id_col = find_column(&headers, DRIVER_ID_ALIASES).ok_or(IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: "driver id",
    })?;
    let name_col = find_column(&headers, NAME_ALIASES).ok_or(IngestError::MissingColumn {
        path: path.to_path_buf(),
        column: "driver name",
    })?;
    let system_col = find_column(&headers, SYSTEM_ALIASES);
    let first_col = find_column(&headers, FIRST_NAME_ALIASES);
    let last_col = find_column(&headers, LAST_NAME_ALIASES);
    let active_col = find_column(&headers, ACTIVE_ALIASES);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(Ok(driver_id)) = cell(&row, Some(id_col)).map(DriverId::new) else {
            continue;
        };
        let Some(mapped_name) = cell(&row, Some(name_col)) else {
            continue;
        };
        if !cell(&row, active_col).is_none_or(is_active_flag) {
            continue;
        }

        let system = cell(&row, system_col)
            .map_or(SourceSystem::Standard, SourceSystem::parse);
        let (first_name, last_name) = match (cell(&row, first_col), cell(&row, last_col)) {
            (Some(first), Some(last)) => (first.to_string(), last.to_string()),
            _ => {
                let parts = extract_names(mapped_name);
                (parts.first, parts.last)
            }
        };

        records.push(DriverNameRecord {
            driver_id,
            system,
            mapped_name: mapped_name.to_string(),
            first_name,
            last_name,
            is_active: true,
        });
    }

    debug!(path = %path.display(), records = records.len(), "roster CSV ingested");
    Ok(records)
}

fn is_active_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "active"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_active_flags() {
        for flag in ["true", "1", "Yes", "ACTIVE", " y "] {
            assert!(is_active_flag(flag), "{flag:?} should be active");
        }
        for flag in ["false", "0", "no", "inactive", "terminated"] {
            assert!(!is_active_flag(flag), "{flag:?} should be inactive");
        }
    }
}
