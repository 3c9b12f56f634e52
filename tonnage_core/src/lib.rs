//! tonnage_core - Tonnage-based accuracy modifier for tactical combat
//!
//! This library provides:
//! - Combatant: Buildings, turrets, mechs (and squads), vehicles
//! - TonnageConfig: Divisor, caps, virtual tonnages and tag ratios
//! - Effective tonnage: Per-unit-type mass resolution with ratio scaling and clamping
//! - Modifier: Attacker vs target tonnage delta as a capped to-hit modifier

pub mod config;
pub mod modifier;
pub mod prelude;
pub mod tonnage;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, TonnageConfig, VirtualTonnage};
pub use modifier::{cache_key, modifier, modifier_breakdown, ModifierBreakdown, ModifierCache};
pub use tonnage::{effective_tonnage, resolve_tonnage, ResolutionError};
pub use types::{Combatant, CombatantKind, SquadInfo, TagSet};
