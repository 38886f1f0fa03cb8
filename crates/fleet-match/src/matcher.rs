//! Candidate ranking over the driver roster.

use std::cmp::Ordering;

use fleet_model::{DriverNameRecord, MatchCandidate, NameMatchResult};

use crate::score::calculate_similarity;

/// Default threshold for accepting a match automatically.
pub const DEFAULT_MINIMUM_CONFIDENCE: f64 = 0.7;

/// Lower threshold used when listing candidates for human review.
pub const REVIEW_MINIMUM_CONFIDENCE: f64 = 0.5;

/// Number of runner-up candidates reported alongside the best match.
const MAX_ALTERNATIVES: usize = 3;

/// Find the best-scoring driver for a free-text name.
///
/// Scores `search_name` against every record's `mapped_name`, discards
/// scores below `minimum_confidence`, and returns the top candidate plus
/// up to three runner-ups. Returns `None` when the search name is blank
/// or no record clears the threshold.
///
/// Ordering is fully deterministic: confidence descending, then driver id
/// ascending, then mapped name ascending.
pub fn find_best_match(
    search_name: &str,
    records: &[DriverNameRecord],
    minimum_confidence: f64,
) -> Option<NameMatchResult> {
    let mut candidates = score_candidates(search_name, records, minimum_confidence);
    if candidates.is_empty() {
        return None;
    }
    let best = candidates.remove(0);
    candidates.truncate(MAX_ALTERNATIVES);
    Some(NameMatchResult {
        best,
        alternatives: candidates,
    })
}

/// Full ranked candidate list for disambiguation UIs.
///
/// Same scoring and ordering as [`find_best_match`] but returns every
/// candidate at or above `minimum_confidence` (callers typically pass
/// [`REVIEW_MINIMUM_CONFIDENCE`]).
pub fn find_all_matches(
    search_name: &str,
    records: &[DriverNameRecord],
    minimum_confidence: f64,
) -> Vec<MatchCandidate> {
    score_candidates(search_name, records, minimum_confidence)
}

fn score_candidates(
    search_name: &str,
    records: &[DriverNameRecord],
    minimum_confidence: f64,
) -> Vec<MatchCandidate> {
    if search_name.trim().is_empty() {
        return Vec::new();
    }

    let mut candidates: Vec<MatchCandidate> = records
        .iter()
        .filter_map(|record| {
            let confidence = calculate_similarity(search_name, &record.mapped_name);
            if confidence < minimum_confidence {
                return None;
            }
            Some(MatchCandidate {
                driver_id: record.driver_id.clone(),
                confidence,
                matched_name: record.mapped_name.clone(),
                matched_system: record.system,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.driver_id.cmp(&b.driver_id))
            .then_with(|| a.matched_name.cmp(&b.matched_name))
    });
    candidates
}
