// cardcheck-core/src/result.rs
//! Provides the core data structures for reporting the outcome of a
//! validation run within the `cardcheck-core` library.
//!
//! A run produces two things: the final [`ValidationResult`] verdict and an
//! ordered [`StageOutcome`] trace recording what each stage observed. The
//! trace carries everything a presentation layer needs to reproduce its
//! diagnostics without re-running any check.

use serde::{Deserialize, Serialize};

use crate::issuer::Issuer;

/// Qualitative strength of a `valid` verdict.
///
/// `High` means every check passed; `Low` means the checksum passed but at
/// least one statistical check did not. Invalid numbers carry no
/// confidence at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Low,
}

/// The structured outcome of validating a single candidate number.
///
/// Immutable once produced and owned entirely by the caller. When
/// `length_ok` is false the run was short-circuited at the length gate and
/// every field after `digit_count` holds its default, not a measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ValidationResult {
    /// Final verdict. True iff the Luhn checksum passed.
    pub valid: bool,
    /// Whether the digit count fell inside the configured bounds.
    pub length_ok: bool,
    /// Number of digits after normalization.
    pub digit_count: usize,
    /// Brand heuristic from the leading digit.
    pub issuer: Issuer,
    pub luhn_passed: bool,
    /// Shannon entropy of the digit distribution, in bits per digit.
    pub entropy_bits: f64,
    pub entropy_passed: bool,
    pub repetition_passed: bool,
    /// Present only on valid results.
    #[serde(default)]
    pub confidence: Option<Confidence>,
}

/// A single stage outcome, recorded in the order the engine ran it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageOutcome {
    Normalized {
        digit_count: usize,
    },
    LengthGate {
        digit_count: usize,
        min: usize,
        max: usize,
        passed: bool,
    },
    IssuerDetected {
        issuer: Issuer,
    },
    LuhnChecksum {
        passed: bool,
    },
    EntropyScore {
        bits: f64,
        threshold: f64,
        passed: bool,
    },
    RepetitionScan {
        passed: bool,
    },
}

/// The full report for one validation call: the final result plus the
/// ordered stage trace that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub result: ValidationResult,
    pub trace: Vec<StageOutcome>,
}
