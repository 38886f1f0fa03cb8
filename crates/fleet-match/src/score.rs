//! Similarity scoring between two free-text names.
//!
//! The score combines component-wise comparison (first/last), whole-string
//! edit-distance similarity, and token-set overlap. Taking the max of the
//! weighted blend and the strongest single signal prevents an exact
//! last-name match from being diluted by weighting while still rewarding
//! multi-signal agreement.

use std::collections::BTreeSet;

use rapidfuzz::distance::levenshtein;

use crate::nicknames::first_name_variants;
use crate::normalize::{extract_names, normalize_name};

const FIRST_NAME_VARIANT_SCORE: f64 = 0.8;
const FIRST_NAME_FUZZY_WEIGHT: f64 = 0.5;
const LAST_NAME_FUZZY_WEIGHT: f64 = 0.7;
const COMPONENT_WEIGHT: f64 = 0.6;
const OVERALL_WEIGHT: f64 = 0.2;
const TOKEN_WEIGHT: f64 = 0.2;
const SINGLE_SIGNAL_WEIGHT: f64 = 0.8;

/// Edit-distance similarity: `1 - distance / max_len`, 1.0 when both
/// inputs are empty.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein::distance(a.chars(), b.chars());
    1.0 - distance as f64 / max_len as f64
}

/// Confidence in [0, 1] that two name strings denote the same person.
///
/// Symmetric, and 1.0 whenever the normalized forms are equal
/// case-insensitively.
pub fn calculate_similarity(name1: &str, name2: &str) -> f64 {
    let normalized1 = normalize_name(name1);
    let normalized2 = normalize_name(name2);

    if normalized1.eq_ignore_ascii_case(&normalized2) {
        return 1.0;
    }

    let parts1 = extract_names(name1);
    let parts2 = extract_names(name2);

    let mut component_scores: Vec<f64> = Vec::with_capacity(2);
    if !parts1.first.is_empty() && !parts2.first.is_empty() {
        component_scores.push(first_name_score(&parts1.first, &parts2.first));
    }
    if !parts1.last.is_empty() && !parts2.last.is_empty() {
        component_scores.push(last_name_score(&parts1.last, &parts2.last));
    }
    let component_average = if component_scores.is_empty() {
        0.0
    } else {
        component_scores.iter().sum::<f64>() / component_scores.len() as f64
    };

    let lower1 = normalized1.to_ascii_lowercase();
    let lower2 = normalized2.to_ascii_lowercase();
    let overall_similarity = levenshtein_similarity(&lower1, &lower2);
    let token_similarity = token_jaccard(&lower1, &lower2);

    let weighted = component_average * COMPONENT_WEIGHT
        + overall_similarity * OVERALL_WEIGHT
        + token_similarity * TOKEN_WEIGHT;
    let strongest = component_average
        .max(overall_similarity)
        .max(token_similarity)
        * SINGLE_SIGNAL_WEIGHT;

    weighted.max(strongest)
}

fn first_name_score(first1: &str, first2: &str) -> f64 {
    if first1.eq_ignore_ascii_case(first2) {
        return 1.0;
    }
    let variants1 = first_name_variants(first1);
    let variants2 = first_name_variants(first2);
    if variants1.intersection(&variants2).next().is_some() {
        return FIRST_NAME_VARIANT_SCORE;
    }
    levenshtein_similarity(&first1.to_ascii_lowercase(), &first2.to_ascii_lowercase())
        * FIRST_NAME_FUZZY_WEIGHT
}

fn last_name_score(last1: &str, last2: &str) -> f64 {
    if last1.eq_ignore_ascii_case(last2) {
        return 1.0;
    }
    levenshtein_similarity(&last1.to_ascii_lowercase(), &last2.to_ascii_lowercase())
        * LAST_NAME_FUZZY_WEIGHT
}

/// Jaccard index over case-insensitive whitespace tokens.
fn token_jaccard(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();
    intersection as f64 / union as f64
}
