//! ModifierBreakdown - Intermediate values of a modifier calculation

use serde::{Deserialize, Serialize};

/// Every step of one attacker/target modifier calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierBreakdown {
    // === Tonnage ===
    pub attacker_tonnage: f64,
    pub target_tonnage: f64,
    /// attacker_tonnage - target_tonnage
    pub delta: f64,
    /// delta / tonnage_divisor
    pub fraction: f64,

    // === Modifier ===
    /// Floored fraction before the cap
    pub raw_modifier: i32,
    /// Final modifier, within [-modifier_cap, modifier_cap]
    pub modifier: i32,

    // === Flags ===
    /// Whether a resolution error forced the neutral modifier
    pub degraded: bool,
}

impl Default for ModifierBreakdown {
    fn default() -> Self {
        ModifierBreakdown {
            attacker_tonnage: 0.0,
            target_tonnage: 0.0,
            delta: 0.0,
            fraction: 0.0,
            raw_modifier: 0,
            modifier: 0,
            degraded: false,
        }
    }
}

impl ModifierBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modifier cap changed the result
    pub fn was_capped(&self) -> bool {
        self.raw_modifier != self.modifier
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.degraded {
            return "Tonnage: unavailable (modifier 0)".to_string();
        }

        let mut summary = format!(
            "Tonnage: {:.1} vs {:.1} (delta {:+.1}) => {:+}",
            self.attacker_tonnage, self.target_tonnage, self.delta, self.modifier
        );
        if self.was_capped() {
            summary.push_str(&format!(" (capped from {:+})", self.raw_modifier));
        }
        summary
    }
}
