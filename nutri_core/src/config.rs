//! Configuration file support for nutri.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/nutri/config.toml`.
//! Every field has a default, so a missing or partial file is fine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Lowest accepted `calorie_ceiling`, above the BMR of realistic adult profiles
pub const MIN_CALORIE_CEILING: f64 = 4000.0;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub targets: TargetsConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Calorie target policy
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TargetsConfig {
    /// kcal subtracted for LOSE and added for GAIN
    #[serde(default = "default_calorie_offset")]
    pub calorie_offset: f64,

    /// Hard upper bound on the recommended calories.
    ///
    /// The ceiling is applied after the BMR floor, so for a profile whose
    /// BMR exceeds it the recommendation ends up below BMR. Values under
    /// [`MIN_CALORIE_CEILING`] are rejected to keep that out of reach for
    /// realistic profiles.
    #[serde(default = "default_calorie_ceiling")]
    pub calorie_ceiling: f64,

    /// Weight deltas smaller than this resolve to MAINTAIN
    #[serde(default = "default_maintain_tolerance_kg")]
    pub maintain_tolerance_kg: f64,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            calorie_offset: default_calorie_offset(),
            calorie_ceiling: default_calorie_ceiling(),
            maintain_tolerance_kg: default_maintain_tolerance_kg(),
        }
    }
}

/// Request validation bounds
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    #[serde(default = "default_min_age")]
    pub min_age: u32,

    #[serde(default = "default_max_age")]
    pub max_age: u32,

    /// Largest allowed distance between target and current weight
    #[serde(default = "default_max_target_delta_kg")]
    pub max_target_delta_kg: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_age: default_min_age(),
            max_age: default_max_age(),
            max_target_delta_kg: default_max_target_delta_kg(),
        }
    }
}

// Default value functions
fn default_calorie_offset() -> f64 {
    500.0
}

fn default_calorie_ceiling() -> f64 {
    4500.0
}

fn default_maintain_tolerance_kg() -> f64 {
    0.5
}

fn default_min_age() -> u32 {
    1
}

fn default_max_age() -> u32 {
    150
}

fn default_max_target_delta_kg() -> f64 {
    100.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|| PathBuf::from(".config"))
        });
        base.join("nutri").join("config.toml")
    }

    /// Check that the policy values are usable
    pub fn validate(&self) -> Result<()> {
        let targets = &self.targets;
        if !targets.calorie_offset.is_finite() || targets.calorie_offset < 0.0 {
            return Err(Error::Config(format!(
                "calorie_offset must be finite and non-negative, got {}",
                targets.calorie_offset
            )));
        }
        if !targets.calorie_ceiling.is_finite() || targets.calorie_ceiling < MIN_CALORIE_CEILING {
            return Err(Error::Config(format!(
                "calorie_ceiling must be finite and at least {}, got {}",
                MIN_CALORIE_CEILING, targets.calorie_ceiling
            )));
        }
        if !targets.maintain_tolerance_kg.is_finite() || targets.maintain_tolerance_kg < 0.0 {
            return Err(Error::Config(format!(
                "maintain_tolerance_kg must be finite and non-negative, got {}",
                targets.maintain_tolerance_kg
            )));
        }

        let validation = &self.validation;
        if validation.min_age > validation.max_age {
            return Err(Error::Config(format!(
                "age range is empty: min_age {} > max_age {}",
                validation.min_age, validation.max_age
            )));
        }
        if !validation.max_target_delta_kg.is_finite() || validation.max_target_delta_kg < 0.0 {
            return Err(Error::Config(format!(
                "max_target_delta_kg must be finite and non-negative, got {}",
                validation.max_target_delta_kg
            )));
        }

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
