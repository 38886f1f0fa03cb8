//! Driver roster projection consumed by the matching core.

use serde::{Deserialize, Serialize};

use crate::{DriverId, SourceSystem};

/// One known spelling of a driver's name in one external system.
///
/// A driver typically carries several of these records, one per external
/// system (plus the canonical [`SourceSystem::Standard`] spelling). The set
/// is a read-only projection of the roster; records are never mutated once
/// cached, a refresh replaces the whole set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverNameRecord {
    /// Opaque identifier owned by the driver roster.
    pub driver_id: DriverId,
    /// System this spelling originates from.
    pub system: SourceSystem,
    /// The name exactly as that system reports it.
    pub mapped_name: String,
    /// First name component, already normalized by the roster.
    pub first_name: String,
    /// Last name component, already normalized by the roster.
    pub last_name: String,
    /// Whether the driver is currently active.
    pub is_active: bool,
}

impl DriverNameRecord {
    /// Convenience constructor for an active record.
    pub fn active(
        driver_id: DriverId,
        system: SourceSystem,
        mapped_name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            driver_id,
            system,
            mapped_name: mapped_name.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            is_active: true,
        }
    }
}
