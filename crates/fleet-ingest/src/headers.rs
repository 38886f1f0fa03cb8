//! Header resolution for CSV exports with inconsistent column naming.

/// Lowercase a header and strip the BOM, spaces, underscores, and hyphens,
/// so "Driver Name", "driver_name", and "DRIVER-NAME" all compare equal.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Index of the first header matching any alias, if present.
pub(crate) fn find_column(headers: &[String], aliases: &[&str]) -> Option<usize> {
    for alias in aliases {
        if let Some(index) = headers.iter().position(|header| header == alias) {
            return Some(index);
        }
    }
    None
}

/// Non-empty trimmed cell at `index`, if the row has one.
pub(crate) fn cell<'a>(row: &'a csv::StringRecord, index: Option<usize>) -> Option<&'a str> {
    let value = row.get(index?)?.trim();
    if value.is_empty() { None } else { Some(value) }
}
