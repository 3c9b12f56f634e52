//! Tonnage modifier - Attacker vs target mass difference as a to-hit modifier

mod breakdown;
mod cache;
mod calculation;

pub use breakdown::ModifierBreakdown;
pub use cache::ModifierCache;
pub use calculation::{cache_key, fraction_to_modifier, modifier, modifier_breakdown};
