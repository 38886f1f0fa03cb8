//! Type-safe enumerations shared across the fleet crates.
//!
//! External systems report free-text tags for where a record originated.
//! [`SourceSystem`] closes that open string set into a tagged enum with an
//! explicit `Unknown` variant, so unrecognized inputs are visible instead
//! of silently collapsing onto a real system.

use std::fmt;

use serde::{Deserialize, Serialize};

/// External system a driver name or vehicle event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSystem {
    /// Internal roster spelling, the canonical mapping.
    Standard,
    /// Hours-of-service / timesheet system.
    Hours,
    /// Payroll export (MYOB).
    Myob,
    /// MtData vehicle telematics.
    MtData,
    /// SmartFuel fuel-card system.
    SmartFuel,
    /// LYTX driver-safety camera platform.
    Lytx,
    /// Guardian distraction/fatigue detection.
    Guardian,
    /// Tag not recognized; carried through rather than guessed at.
    Unknown,
}

impl SourceSystem {
    /// Parse a free-text system tag. Total: unrecognized input maps to
    /// [`SourceSystem::Unknown`].
    ///
    /// Matching is case-insensitive and ignores spaces, underscores, and
    /// hyphens, so "LYTX", "lytx" and "Lytx Safety" all resolve to
    /// [`SourceSystem::Lytx`].
    pub fn parse(raw: &str) -> Self {
        let compact: String = raw
            .trim()
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match compact.as_str() {
            "standard" => Self::Standard,
            "hours" | "hoursofservice" => Self::Hours,
            "myob" => Self::Myob,
            "mtdata" => Self::MtData,
            "smartfuel" | "smartfill" => Self::SmartFuel,
            "lytx" | "lytxsafety" | "drivecam" => Self::Lytx,
            "guardian" => Self::Guardian,
            _ => Self::Unknown,
        }
    }

    /// Canonical display tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Hours => "Hours",
            Self::Myob => "MYOB",
            Self::MtData => "MtData",
            Self::SmartFuel => "SmartFuel",
            Self::Lytx => "LYTX",
            Self::Guardian => "Guardian",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_and_punctuation_insensitive() {
        assert_eq!(SourceSystem::parse("LYTX"), SourceSystem::Lytx);
        assert_eq!(SourceSystem::parse("lytx"), SourceSystem::Lytx);
        assert_eq!(SourceSystem::parse("Lytx Safety"), SourceSystem::Lytx);
        assert_eq!(SourceSystem::parse("mt_data"), SourceSystem::MtData);
        assert_eq!(SourceSystem::parse(" Smart-Fill "), SourceSystem::SmartFuel);
    }

    #[test]
    fn unrecognized_tags_become_unknown() {
        assert_eq!(SourceSystem::parse("teletrac"), SourceSystem::Unknown);
        assert_eq!(SourceSystem::parse(""), SourceSystem::Unknown);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&SourceSystem::MtData).unwrap();
        assert_eq!(json, "\"mt_data\"");
    }
}
