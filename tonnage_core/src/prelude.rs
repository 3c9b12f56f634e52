//! Prelude module for convenient imports
//!
//! ```rust
//! use tonnage_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Combatant, CombatantKind, SquadInfo, TagSet};

// Tonnage and modifier
pub use crate::modifier::{cache_key, modifier, modifier_breakdown, ModifierBreakdown, ModifierCache};
pub use crate::tonnage::effective_tonnage;

// Config
pub use crate::config::TonnageConfig;
