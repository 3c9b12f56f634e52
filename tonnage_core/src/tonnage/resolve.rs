//! Tonnage lookup, ratio scaling and clamping

use super::ResolutionError;
use crate::config::{TonnageConfig, VirtualTonnage};
use crate::types::{
    Combatant, CombatantKind, SquadInfo, TagSet, TAG_UNIT_HEAVY, TAG_UNIT_LIGHT, TAG_UNIT_MEDIUM,
};
use std::collections::HashMap;

/// Resolve a combatant's effective tonnage, degrading failures to the minimum cap
///
/// Never fails: an absent combatant is 0, a resolution error is logged and
/// replaced by `tonnage_cap_min` so the result stays inside the caps.
pub fn effective_tonnage(combatant: Option<&Combatant>, config: &TonnageConfig) -> f64 {
    match resolve_tonnage(combatant, config) {
        Ok(tonnage) => tonnage,
        Err(e) => {
            tracing::warn!(
                "Failed to resolve tonnage ({}), using min tonnage cap: {}",
                e,
                config.tonnage_cap_min
            );
            config.tonnage_cap_min
        }
    }
}

/// Resolve a combatant's effective tonnage
pub fn resolve_tonnage(
    combatant: Option<&Combatant>,
    config: &TonnageConfig,
) -> Result<f64, ResolutionError> {
    let Some(combatant) = combatant else {
        tracing::debug!("Combatant is absent, using tonnage of 0");
        return Ok(0.0);
    };

    let tonnage = match &combatant.kind {
        CombatantKind::Building => {
            let tonnage = config.virtual_tonnage.building;
            tracing::debug!(
                "Using virtual tonnage: {} for building: {}",
                tonnage,
                combatant.id
            );
            return Ok(tonnage);
        }
        CombatantKind::Turret => {
            let tonnage = turret_tonnage(&combatant.tags, &config.virtual_tonnage);
            tracing::debug!(
                "Using virtual tonnage: {} for turret: {}",
                tonnage,
                combatant.id
            );
            tonnage
        }
        CombatantKind::Mech { tonnage, squad } => mech_tonnage(&combatant.id, *tonnage, *squad)?,
        CombatantKind::Vehicle { tonnage } => {
            let tonnage = numeric_mass(&combatant.id, *tonnage)?;
            tracing::debug!("Using tonnage: {} for vehicle: {}", tonnage, combatant.id);
            tonnage
        }
        CombatantKind::Other => {
            tracing::debug!(
                "Combatant: {} has no known mass, using tonnage of 0",
                combatant.id
            );
            0.0
        }
    };

    let tonnage = apply_tonnage_ratio(tonnage, &combatant.tags, &config.unit_tonnage_ratio);
    // Infinite tonnage is left to the caps; NaN has no place between them
    if tonnage.is_nan() {
        return Err(ResolutionError::NanTonnage {
            id: combatant.id.clone(),
        });
    }

    Ok(clamp_tonnage(tonnage, config))
}

fn turret_tonnage(tags: &TagSet, virtual_tonnage: &VirtualTonnage) -> f64 {
    if tags.contains(TAG_UNIT_LIGHT) {
        virtual_tonnage.light_turret
    } else if tags.contains(TAG_UNIT_MEDIUM) {
        virtual_tonnage.medium_turret
    } else if tags.contains(TAG_UNIT_HEAVY) {
        virtual_tonnage.heavy_turret
    } else {
        virtual_tonnage.default_turret
    }
}

fn mech_tonnage(id: &str, raw: f64, squad: Option<SquadInfo>) -> Result<f64, ResolutionError> {
    let raw = numeric_mass(id, raw)?;

    match squad {
        Some(SquadInfo { troopers }) if troopers > 1 => {
            let tonnage = raw / f64::from(troopers);
            tracing::debug!(
                "Using tonnage: {} for squad: {} with raw tonnage: {} and trooper count: {}",
                tonnage,
                id,
                raw,
                troopers
            );
            Ok(tonnage)
        }
        _ => {
            tracing::debug!("Using tonnage: {} for mech: {}", raw, id);
            Ok(raw)
        }
    }
}

fn numeric_mass(id: &str, tonnage: f64) -> Result<f64, ResolutionError> {
    if tonnage.is_nan() {
        Err(ResolutionError::NanMass { id: id.to_string() })
    } else {
        Ok(tonnage)
    }
}

/// Scale by the ratio of the first tag (in tag order) that has one configured
pub fn apply_tonnage_ratio(tonnage: f64, tags: &TagSet, ratios: &HashMap<String, f64>) -> f64 {
    for tag in tags.iter() {
        if let Some(&ratio) = ratios.get(tag) {
            let scaled = tonnage * ratio;
            tracing::debug!(
                "Applying unit tonnage ratio {} from tag {}: {} * {} = {}",
                ratio,
                tag,
                tonnage,
                ratio,
                scaled
            );
            return scaled;
        }
    }
    tonnage
}

/// Clamp to the configured caps, max checked first
pub fn clamp_tonnage(tonnage: f64, config: &TonnageConfig) -> f64 {
    if tonnage > config.tonnage_cap_max {
        tracing::debug!(
            "Calculated tonnage: {} exceeds max tonnage cap: {}, using cap",
            tonnage,
            config.tonnage_cap_max
        );
        return config.tonnage_cap_max;
    }
    if tonnage < config.tonnage_cap_min {
        tracing::debug!(
            "Calculated tonnage: {} is below min tonnage cap: {}, using cap",
            tonnage,
            config.tonnage_cap_min
        );
        return config.tonnage_cap_min;
    }
    tonnage
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TonnageConfig {
        let mut config = TonnageConfig::default();
        config.tonnage_cap_min = 10.0;
        config.tonnage_cap_max = 100.0;
        config
    }

    #[test]
    fn test_absent_combatant_is_zero() {
        let tonnage = effective_tonnage(None, &config());
        assert!((tonnage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_building_ignores_tags_and_caps() {
        let mut config = config();
        config.virtual_tonnage.building = 500.0;
        config
            .unit_tonnage_ratio
            .insert("unit_fortified".to_string(), 2.0);

        let building = Combatant::building("bldg_1").with_tags(["unit_fortified"]);
        let tonnage = effective_tonnage(Some(&building), &config);
        // Above tonnage_cap_max, yet unclamped
        assert!((tonnage - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_turret_weight_class_order() {
        let config = config();

        let light = Combatant::turret("t1").with_tags(["unit_heavy", "unit_light"]);
        assert!((effective_tonnage(Some(&light), &config) - 40.0).abs() < f64::EPSILON);

        let medium = Combatant::turret("t2").with_tags(["unit_heavy", "unit_medium"]);
        assert!((effective_tonnage(Some(&medium), &config) - 60.0).abs() < f64::EPSILON);

        let heavy = Combatant::turret("t3").with_tags(["unit_heavy"]);
        assert!((effective_tonnage(Some(&heavy), &config) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_untagged_turret_uses_default() {
        let mut config = config();
        config.virtual_tonnage.default_turret = 45.0;
        let turret = Combatant::turret("t4");
        assert!((effective_tonnage(Some(&turret), &config) - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heavy_turret_still_gets_ratio() {
        let mut config = config();
        config
            .unit_tonnage_ratio
            .insert("unit_hardened".to_string(), 0.5);
        let turret = Combatant::turret("t5").with_tags(["unit_heavy", "unit_hardened"]);
        // 80 * 0.5
        assert!((effective_tonnage(Some(&turret), &config) - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_squad_divides_by_troopers() {
        let mut config = config();
        config.tonnage_cap_min = 0.0;
        let squad = Combatant::squad("ba_1", 80.0, 4);
        assert!((effective_tonnage(Some(&squad), &config) - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_trooper_squad_uses_raw_tonnage() {
        let squad = Combatant::squad("ba_2", 55.0, 1);
        assert!((effective_tonnage(Some(&squad), &config()) - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mech_and_vehicle_raw_tonnage() {
        let config = config();
        let mech = Combatant::mech("atlas", 100.0);
        let vehicle = Combatant::vehicle("demolisher", 80.0);
        assert!((effective_tonnage(Some(&mech), &config) - 100.0).abs() < f64::EPSILON);
        assert!((effective_tonnage(Some(&vehicle), &config) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_other_kind_clamps_to_min() {
        let other = Combatant::new("drop_pod", CombatantKind::Other);
        assert_eq!(resolve_tonnage(Some(&other), &config()), Ok(10.0));
    }

    #[test]
    fn test_first_ratio_tag_wins() {
        let mut ratios = HashMap::new();
        ratios.insert("unit_quad".to_string(), 1.5);
        ratios.insert("unit_lam".to_string(), 0.5);

        let tags: TagSet = ["unit_mech", "unit_lam", "unit_quad"].into_iter().collect();
        assert!((apply_tonnage_ratio(60.0, &tags, &ratios) - 30.0).abs() < f64::EPSILON);

        let tags: TagSet = ["unit_quad", "unit_lam"].into_iter().collect();
        assert!((apply_tonnage_ratio(60.0, &tags, &ratios) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_ratio_tag_leaves_tonnage() {
        let tags: TagSet = ["unit_mech"].into_iter().collect();
        let tonnage = apply_tonnage_ratio(60.0, &tags, &HashMap::new());
        assert!((tonnage - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_bounds() {
        let config = config();
        assert!((clamp_tonnage(150.0, &config) - 100.0).abs() < f64::EPSILON);
        assert!((clamp_tonnage(5.0, &config) - 10.0).abs() < f64::EPSILON);
        assert!((clamp_tonnage(42.5, &config) - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_trooper_squad_uses_raw_tonnage() {
        let squad = Combatant::squad("ba_3", 80.0, 0);
        assert_eq!(resolve_tonnage(Some(&squad), &config()), Ok(80.0));
    }

    #[test]
    fn test_infinite_mass_clamps_to_caps() {
        let config = config();
        let heavy = Combatant::vehicle("glitch_heavy", f64::INFINITY);
        assert_eq!(resolve_tonnage(Some(&heavy), &config), Ok(100.0));

        let light = Combatant::mech("glitch_light", f64::NEG_INFINITY);
        assert_eq!(resolve_tonnage(Some(&light), &config), Ok(10.0));
    }

    #[test]
    fn test_nan_mass_is_error() {
        let vehicle = Combatant::vehicle("glitch", f64::NAN);
        assert_eq!(
            resolve_tonnage(Some(&vehicle), &config()),
            Err(ResolutionError::NanMass {
                id: "glitch".to_string()
            })
        );
        // Degrades to the min cap
        assert!((effective_tonnage(Some(&vehicle), &config()) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_ratio_on_infinite_mass_is_error() {
        let mut config = config();
        config.unit_tonnage_ratio.insert("unit_ghost".to_string(), 0.0);
        let mech = Combatant::mech("ghost", f64::INFINITY).with_tags(["unit_ghost"]);
        assert_eq!(
            resolve_tonnage(Some(&mech), &config),
            Err(ResolutionError::NanTonnage {
                id: "ghost".to_string()
            })
        );
    }
}
