// cardcheck-core/src/engines/composite_engine.rs
//! A `ValidationEngine` implementation that composes the checksum,
//! entropy, and repetition checks into a single verdict.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use cardcheck_analysis::entropy::digit_entropy;
use cardcheck_analysis::luhn::luhn_valid;
use cardcheck_analysis::repetition::repetition_free;

use crate::config::ValidationConfig;
use crate::engine::ValidationEngine;
use crate::errors::CardcheckError;
use crate::issuer::classify_issuer;
use crate::normalize::normalize;
use crate::result::{Confidence, StageOutcome, ValidationReport, ValidationResult};

/// The standard composite validation engine.
///
/// Runs the stages in dependency order: normalize, length gate, issuer
/// classification, Luhn checksum, entropy score, repetition scan. The
/// length gate short-circuits the run; the statistical checks never see a
/// string outside the configured bounds.
#[derive(Debug, Clone)]
pub struct CompositeEngine {
    config: ValidationConfig,
    entropy_threshold: f64,
}

impl CompositeEngine {
    /// Initializes the engine with the provided configuration.
    ///
    /// Fails if the configuration is unusable (inverted length bounds,
    /// non-finite threshold). A threshold above the digit-alphabet ceiling
    /// is accepted but logged by the config validator.
    pub fn new(config: ValidationConfig) -> Result<Self, CardcheckError> {
        config.validate()?;
        let entropy_threshold = config.entropy_threshold();

        debug!(
            "Initializing CompositeEngine: length {}..={}, entropy threshold {}",
            config.length.min, config.length.max, entropy_threshold
        );

        Ok(Self {
            config,
            entropy_threshold,
        })
    }

    /// Initializes the engine with the embedded default thresholds.
    pub fn with_defaults() -> Result<Self, CardcheckError> {
        let config = ValidationConfig::load_defaults().map_err(CardcheckError::AnyhowWrapper)?;
        Self::new(config)
    }
}

impl ValidationEngine for CompositeEngine {
    fn validate(&self, raw: &str) -> ValidationReport {
        let digits = normalize(raw);
        let digit_count = digits.len();

        let mut trace = Vec::with_capacity(6);
        trace.push(StageOutcome::Normalized { digit_count });

        let min = self.config.length.min;
        let max = self.config.length.max;
        let length_ok = (min..=max).contains(&digit_count);
        trace.push(StageOutcome::LengthGate {
            digit_count,
            min,
            max,
            passed: length_ok,
        });

        if !length_ok {
            debug!("Length gate rejected candidate with {} digits", digit_count);
            return ValidationReport {
                result: ValidationResult {
                    digit_count,
                    ..Default::default()
                },
                trace,
            };
        }

        let issuer = classify_issuer(&digits);
        trace.push(StageOutcome::IssuerDetected { issuer });

        let luhn_passed = luhn_valid(&digits);
        trace.push(StageOutcome::LuhnChecksum { passed: luhn_passed });

        let entropy_bits = digit_entropy(&digits);
        let entropy_passed = entropy_bits >= self.entropy_threshold;
        trace.push(StageOutcome::EntropyScore {
            bits: entropy_bits,
            threshold: self.entropy_threshold,
            passed: entropy_passed,
        });

        let repetition_passed = repetition_free(&digits);
        trace.push(StageOutcome::RepetitionScan {
            passed: repetition_passed,
        });

        // The checksum alone decides validity; the statistical checks only
        // grade confidence.
        let confidence = if !luhn_passed {
            None
        } else if entropy_passed && repetition_passed {
            Some(Confidence::High)
        } else {
            Some(Confidence::Low)
        };

        ValidationReport {
            result: ValidationResult {
                valid: luhn_passed,
                length_ok: true,
                digit_count,
                issuer,
                luhn_passed,
                entropy_bits,
                entropy_passed,
                repetition_passed,
                confidence,
            },
            trace,
        }
    }

    fn config(&self) -> &ValidationConfig {
        &self.config
    }
}
