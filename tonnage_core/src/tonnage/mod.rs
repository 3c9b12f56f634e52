//! Effective tonnage resolution for a single combatant
//!
//! Resolution order:
//! 1. Absent combatant: 0
//! 2. Building: configured virtual tonnage, returned as-is
//! 3. Turret: virtual tonnage by weight-class tag (light, medium, heavy, default)
//! 4. Mech: raw tonnage, divided by trooper count for squads of more than one
//! 5. Vehicle: raw tonnage
//! 6. First tag with a configured ratio scales the result
//! 7. Clamp to [tonnage_cap_min, tonnage_cap_max]

mod resolve;

pub use resolve::{apply_tonnage_ratio, clamp_tonnage, effective_tonnage, resolve_tonnage};

use thiserror::Error;

/// Failure while resolving a tonnage or the delta between two tonnages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("Combatant '{id}' has no numeric tonnage")]
    NanMass { id: String },
    #[error("Tonnage ratio for combatant '{id}' produced NaN")]
    NanTonnage { id: String },
    #[error("Tonnage delta {delta} / divisor {divisor} is not finite")]
    NonFiniteFraction { delta: f64, divisor: f64 },
}
