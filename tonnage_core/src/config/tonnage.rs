//! Tonnage modifier configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Tunables for the tonnage modifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TonnageConfig {
    /// Tons of difference per point of modifier
    #[serde(default = "default_tonnage_divisor")]
    pub tonnage_divisor: f64,
    /// Modifier is clamped to [-cap, cap]
    #[serde(default = "default_modifier_cap")]
    pub modifier_cap: u32,
    #[serde(default)]
    pub virtual_tonnage: VirtualTonnage,
    /// Tag -> multiplier; the first matching tag on a unit wins
    #[serde(default)]
    pub unit_tonnage_ratio: HashMap<String, f64>,
    #[serde(default = "default_tonnage_cap_min")]
    pub tonnage_cap_min: f64,
    #[serde(default = "default_tonnage_cap_max")]
    pub tonnage_cap_max: f64,
}

impl Default for TonnageConfig {
    fn default() -> Self {
        TonnageConfig {
            tonnage_divisor: default_tonnage_divisor(),
            modifier_cap: default_modifier_cap(),
            virtual_tonnage: VirtualTonnage::default(),
            unit_tonnage_ratio: HashMap::new(),
            tonnage_cap_min: default_tonnage_cap_min(),
            tonnage_cap_max: default_tonnage_cap_max(),
        }
    }
}

fn default_tonnage_divisor() -> f64 {
    25.0
}
fn default_modifier_cap() -> u32 {
    10
}
fn default_tonnage_cap_min() -> f64 {
    0.0
}
fn default_tonnage_cap_max() -> f64 {
    200.0
}

/// Stand-in tonnages for units that have no mass of their own
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VirtualTonnage {
    #[serde(default = "default_building")]
    pub building: f64,
    #[serde(default = "default_light_turret")]
    pub light_turret: f64,
    #[serde(default = "default_medium_turret")]
    pub medium_turret: f64,
    #[serde(default = "default_heavy_turret")]
    pub heavy_turret: f64,
    /// Used for turrets without a weight-class tag
    #[serde(default = "default_medium_turret")]
    pub default_turret: f64,
}

impl Default for VirtualTonnage {
    fn default() -> Self {
        VirtualTonnage {
            building: default_building(),
            light_turret: default_light_turret(),
            medium_turret: default_medium_turret(),
            heavy_turret: default_heavy_turret(),
            default_turret: default_medium_turret(),
        }
    }
}

fn default_building() -> f64 {
    100.0
}
fn default_light_turret() -> f64 {
    40.0
}
fn default_medium_turret() -> f64 {
    60.0
}
fn default_heavy_turret() -> f64 {
    80.0
}

impl TonnageConfig {
    /// Load and validate a config file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config: TonnageConfig = if is_json {
            super::load_json(path)?
        } else {
            super::load_toml(path)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TonnageConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: TonnageConfig = super::parse_json(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make every calculation degrade
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tonnage_divisor.is_finite() || self.tonnage_divisor == 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tonnage_divisor must be finite and non-zero, got {}",
                self.tonnage_divisor
            )));
        }
        if !self.tonnage_cap_min.is_finite() || !self.tonnage_cap_max.is_finite() {
            return Err(ConfigError::ValidationError(
                "tonnage caps must be finite".to_string(),
            ));
        }
        if self.tonnage_cap_min > self.tonnage_cap_max {
            return Err(ConfigError::ValidationError(format!(
                "tonnage_cap_min ({}) exceeds tonnage_cap_max ({})",
                self.tonnage_cap_min, self.tonnage_cap_max
            )));
        }

        let vt = &self.virtual_tonnage;
        let virtuals = [
            ("building", vt.building),
            ("light_turret", vt.light_turret),
            ("medium_turret", vt.medium_turret),
            ("heavy_turret", vt.heavy_turret),
            ("default_turret", vt.default_turret),
        ];
        for (name, value) in virtuals {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "virtual_tonnage.{} must be finite, got {}",
                    name, value
                )));
            }
        }

        for (tag, ratio) in &self.unit_tonnage_ratio {
            if !ratio.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "unit_tonnage_ratio for tag '{}' must be finite, got {}",
                    tag, ratio
                )));
            }
        }

        Ok(())
    }

    /// Modifier cap as a signed bound
    pub fn signed_modifier_cap(&self) -> i32 {
        i32::try_from(self.modifier_cap).unwrap_or(i32::MAX)
    }
}
