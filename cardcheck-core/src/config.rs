//! Configuration management for `cardcheck-core`.
//!
//! This module defines the data structures that tune the validation engine:
//! the accepted digit-length window and the entropy pass threshold. It
//! handles serialization/deserialization of YAML configurations and provides
//! utilities for loading, merging, and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::Path;

pub use cardcheck_analysis::entropy::MAX_DIGIT_ENTROPY_BITS;

use crate::errors::CardcheckError;

/// Shortest digit count the engine will examine by default.
pub const DEFAULT_MIN_LENGTH: usize = 13;

/// Longest digit count the engine will examine by default.
pub const DEFAULT_MAX_LENGTH: usize = 19;

/// Default entropy pass threshold in bits per digit.
///
/// Note that this exceeds [`MAX_DIGIT_ENTROPY_BITS`]: under the shipped
/// defaults the entropy check can only ever refine confidence downward.
/// Deployments that want a reachable threshold must lower it in config.
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 3.5;

/// Accepted digit-count window for candidate numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct LengthConfig {
    /// Minimum digit count, inclusive.
    pub min: usize,
    /// Maximum digit count, inclusive.
    pub max: usize,
}

impl Default for LengthConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Configuration settings specific to the entropy check.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct EntropyConfig {
    /// The bits-per-digit score required for an entropy pass
    /// (default: 3.5).
    pub threshold: Option<f64>,
}

impl Hash for EntropyConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(t) = self.threshold {
            t.to_bits().hash(state);
        } else {
            0u64.hash(state);
        }
    }
}

/// Represents the top-level configuration structure for cardcheck.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Hash)]
#[serde(default)]
pub struct ValidationConfig {
    /// Accepted digit-count window.
    pub length: LengthConfig,
    /// Entropy check settings.
    pub entropy: EntropyConfig,
}

impl ValidationConfig {
    /// Loads a validation configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom validation config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ValidationConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the default thresholds from the embedded configuration.
    pub fn load_defaults() -> Result<Self> {
        debug!("Loading default thresholds from embedded string...");
        let default_yaml = include_str!("../config/default_checks.yaml");
        let config: ValidationConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default thresholds")?;
        Ok(config)
    }

    /// Resolves the effective entropy threshold, falling back to the default.
    pub fn entropy_threshold(&self) -> f64 {
        self.entropy.threshold.unwrap_or(DEFAULT_ENTROPY_THRESHOLD)
    }

    /// Checks the configuration for values the engine cannot operate with.
    ///
    /// A threshold above the ten-digit-alphabet ceiling is legal (the
    /// shipped default is), but logged, since it makes an entropy pass
    /// unreachable.
    pub fn validate(&self) -> Result<(), CardcheckError> {
        if self.length.min == 0 || self.length.min > self.length.max {
            return Err(CardcheckError::InvalidLengthBounds(
                self.length.min,
                self.length.max,
            ));
        }

        let threshold = self.entropy_threshold();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(CardcheckError::InvalidEntropyThreshold(threshold));
        }
        if threshold > MAX_DIGIT_ENTROPY_BITS {
            warn!(
                "Entropy threshold {} exceeds the {:.2}-bit ceiling of a ten-digit alphabet; the entropy check cannot pass",
                threshold, MAX_DIGIT_ENTROPY_BITS
            );
        }

        Ok(())
    }
}

/// Merges a user-provided configuration over the defaults.
///
/// User-supplied fields win; anything the user file omits keeps its
/// default value.
pub fn merge_configs(
    default_config: ValidationConfig,
    user_config: Option<ValidationConfig>,
) -> ValidationConfig {
    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        debug!(
            "User config provided. Length bounds: {}..={}",
            user_cfg.length.min, user_cfg.length.max
        );
        merged.length = user_cfg.length;

        if let Some(user_threshold) = user_cfg.entropy.threshold {
            debug!("Overriding entropy threshold with user value: {}", user_threshold);
            merged.entropy.threshold = Some(user_threshold);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = ValidationConfig::default();
        assert_eq!(config.length.min, DEFAULT_MIN_LENGTH);
        assert_eq!(config.length.max, DEFAULT_MAX_LENGTH);
        assert_eq!(config.entropy_threshold(), DEFAULT_ENTROPY_THRESHOLD);
    }

    #[test]
    fn test_embedded_defaults_parse() {
        let config = ValidationConfig::load_defaults().unwrap();
        assert_eq!(config.length.min, 13);
        assert_eq!(config.length.max, 19);
        assert_eq!(config.entropy.threshold, Some(3.5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_overrides_threshold_only() {
        let user = ValidationConfig {
            entropy: EntropyConfig {
                threshold: Some(3.0),
            },
            ..Default::default()
        };
        let merged = merge_configs(ValidationConfig::default(), Some(user));
        assert_eq!(merged.entropy_threshold(), 3.0);
        assert_eq!(merged.length.min, DEFAULT_MIN_LENGTH);
    }

    #[test]
    fn test_merge_without_user_config_is_identity() {
        let merged = merge_configs(ValidationConfig::default(), None);
        assert_eq!(merged, ValidationConfig::default());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let config = ValidationConfig {
            length: LengthConfig { min: 20, max: 13 },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CardcheckError::InvalidLengthBounds(20, 13))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_min() {
        let config = ValidationConfig {
            length: LengthConfig { min: 0, max: 19 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let config = ValidationConfig {
            entropy: EntropyConfig {
                threshold: Some(f64::NAN),
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CardcheckError::InvalidEntropyThreshold(_))
        ));
    }
}
