//! Driver name matching: normalization, nickname variants, similarity
//! scoring, and roster candidate ranking.
//!
//! Pure string work, no I/O; the association engine layers persistence on
//! top of these functions.

#![deny(unsafe_code)]

pub mod matcher;
pub mod nicknames;
pub mod normalize;
pub mod score;

pub use matcher::{
    DEFAULT_MINIMUM_CONFIDENCE, REVIEW_MINIMUM_CONFIDENCE, find_all_matches, find_best_match,
};
pub use nicknames::{formal_names_for, generate_name_variations, nicknames_for};
pub use normalize::{NameParts, extract_names, normalize_name};
pub use score::{calculate_similarity, levenshtein_similarity};
