//! Modifier calculation from two effective tonnages

use super::breakdown::ModifierBreakdown;
use crate::config::TonnageConfig;
use crate::tonnage::{resolve_tonnage, ResolutionError};
use crate::types::Combatant;

/// Memoization key for an attacker/target pairing: `"<attacker>-<target>"`
pub fn cache_key(attacker: &Combatant, target: &Combatant) -> String {
    format!("{}-{}", attacker.id, target.id)
}

/// Tonnage modifier for an attack, within [-modifier_cap, modifier_cap]
///
/// Never fails; any resolution error yields 0.
pub fn modifier(
    attacker: Option<&Combatant>,
    target: Option<&Combatant>,
    config: &TonnageConfig,
) -> i32 {
    modifier_breakdown(attacker, target, config).modifier
}

/// Calculate the modifier, keeping every intermediate value
pub fn modifier_breakdown(
    attacker: Option<&Combatant>,
    target: Option<&Combatant>,
    config: &TonnageConfig,
) -> ModifierBreakdown {
    let mut breakdown = match resolve_breakdown(attacker, target, config) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            tracing::warn!("Failed to calculate tonnage delta modifier: {}", e);
            ModifierBreakdown {
                degraded: true,
                ..ModifierBreakdown::new()
            }
        }
    };

    let cap = config.signed_modifier_cap();
    breakdown.modifier = breakdown.raw_modifier.clamp(-cap, cap);
    breakdown
}

fn resolve_breakdown(
    attacker: Option<&Combatant>,
    target: Option<&Combatant>,
    config: &TonnageConfig,
) -> Result<ModifierBreakdown, ResolutionError> {
    let attacker_tonnage = resolve_tonnage(attacker, config)?;
    let target_tonnage = resolve_tonnage(target, config)?;
    let delta = attacker_tonnage - target_tonnage;
    tracing::debug!(
        "Tonnage delta: {} from attacker tonnage: {} - target tonnage: {}",
        delta,
        attacker_tonnage,
        target_tonnage
    );

    let fraction = delta / config.tonnage_divisor;
    if !fraction.is_finite() {
        return Err(ResolutionError::NonFiniteFraction {
            delta,
            divisor: config.tonnage_divisor,
        });
    }
    let raw_modifier = fraction_to_modifier(fraction);
    tracing::debug!(
        "Tonnage fraction: {} = delta: {} / divisor: {} => raw modifier: {}",
        fraction,
        delta,
        config.tonnage_divisor,
        raw_modifier
    );

    Ok(ModifierBreakdown {
        attacker_tonnage,
        target_tonnage,
        delta,
        fraction,
        raw_modifier,
        modifier: raw_modifier,
        degraded: false,
    })
}

/// Floor a non-zero fraction; negative fractions round away from zero
///
/// 3.2 => 3, -3.2 => -4, 0 => 0
pub fn fraction_to_modifier(fraction: f64) -> i32 {
    if fraction == 0.0 {
        0
    } else {
        fraction.floor() as i32
    }
}
