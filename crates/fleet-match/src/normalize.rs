//! Free-text name canonicalization.
//!
//! Every external system spells driver names differently ("SMITH, john",
//! "John  Smith", "john smith (contractor)"). [`normalize_name`] reduces
//! them to a single comparable form before any scoring happens.

use serde::{Deserialize, Serialize};

/// Canonicalize a free-text person name.
///
/// - Trims and collapses internal whitespace
/// - Strips characters outside `[A-Za-z0-9 '-]`
/// - Title-cases each token; hyphen segments are title-cased individually
///   and the segment after an apostrophe keeps a leading capital
///   (`o'connor` becomes `O'Connor`)
///
/// Pure and idempotent. Empty or whitespace-only input yields an empty
/// string.
pub fn normalize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .filter(|ch| ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '\'' | '-'))
        .collect();

    cleaned
        .split_whitespace()
        .map(title_case_token)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case_token(token: &str) -> String {
    token
        .split('-')
        .map(title_case_apostrophes)
        .collect::<Vec<_>>()
        .join("-")
}

fn title_case_apostrophes(segment: &str) -> String {
    segment
        .split('\'')
        .map(title_case_segment)
        .collect::<Vec<_>>()
        .join("'")
}

fn title_case_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(segment.len());
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

/// Name components extracted from a free-text name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    pub first: String,
    pub middle: Option<String>,
    pub last: String,
}

/// Split a free-text name into first/middle/last components.
///
/// Recognizes the "Last, First [Middle]" convention when the first
/// whitespace-delimited token of the raw input ends with a comma (the
/// comma itself never survives normalization, so this check runs on the
/// raw text). Otherwise the first token is the first name, the final
/// token the last name, and any interior tokens become the middle name.
/// A single token yields a first name and an empty last name.
pub fn extract_names(raw: &str) -> NameParts {
    let raw_tokens: Vec<&str> = raw.split_whitespace().collect();

    if raw_tokens.len() >= 2 && raw_tokens[0].ends_with(',') {
        let last = normalize_name(raw_tokens[0].trim_end_matches(','));
        let first = normalize_name(raw_tokens[1]);
        let middle = join_normalized(&raw_tokens[2..]);
        return NameParts {
            first,
            middle,
            last,
        };
    }

    let normalized = normalize_name(raw);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    match tokens.as_slice() {
        [] => NameParts {
            first: String::new(),
            middle: None,
            last: String::new(),
        },
        [only] => NameParts {
            first: (*only).to_string(),
            middle: None,
            last: String::new(),
        },
        [first, middle @ .., last] => NameParts {
            first: (*first).to_string(),
            middle: if middle.is_empty() {
                None
            } else {
                Some(middle.join(" "))
            },
            last: (*last).to_string(),
        },
    }
}

fn join_normalized(tokens: &[&str]) -> Option<String> {
    let joined = normalize_name(&tokens.join(" "));
    if joined.is_empty() { None } else { Some(joined) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_title_cases() {
        assert_eq!(normalize_name("  john   SMITH "), "John Smith");
    }

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(normalize_name("john smith (contractor)"), "John Smith Contractor");
        assert_eq!(normalize_name("j@ne d*e"), "Jne De");
    }

    #[test]
    fn handles_hyphens_and_apostrophes() {
        assert_eq!(normalize_name("mary-jane o'connor"), "Mary-Jane O'Connor");
        assert_eq!(normalize_name("JEAN-LUC D'ANGELO"), "Jean-Luc D'Angelo");
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   \t "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["  john   SMITH ", "o'connor", "MARY-jane", "a b c d"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn extracts_first_and_last() {
        let parts = extract_names("john smith");
        assert_eq!(parts.first, "John");
        assert_eq!(parts.last, "Smith");
        assert_eq!(parts.middle, None);
    }

    #[test]
    fn interior_tokens_become_middle_name() {
        let parts = extract_names("john paul david smith");
        assert_eq!(parts.first, "John");
        assert_eq!(parts.middle.as_deref(), Some("Paul David"));
        assert_eq!(parts.last, "Smith");
    }

    #[test]
    fn recognizes_last_comma_first() {
        let parts = extract_names("SMITH, John");
        assert_eq!(parts.first, "John");
        assert_eq!(parts.last, "Smith");

        let with_middle = extract_names("smith, john, paul");
        assert_eq!(with_middle.first, "John");
        assert_eq!(with_middle.middle.as_deref(), Some("Paul"));
        assert_eq!(with_middle.last, "Smith");
    }

    #[test]
    fn single_token_is_first_name_only() {
        let parts = extract_names("Madonna");
        assert_eq!(parts.first, "Madonna");
        assert_eq!(parts.last, "");
    }
}
