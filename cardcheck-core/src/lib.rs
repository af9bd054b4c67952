// cardcheck-core/src/lib.rs
//! # Cardcheck Core Library
//!
//! `cardcheck-core` provides the fundamental, platform-independent logic for
//! validating candidate payment-card numbers. A composite of three
//! independent checks — the Luhn mod-10 checksum, Shannon entropy of the
//! digit distribution, and an adjacent-repetition scan — is combined with a
//! length gate and a single-digit issuer heuristic into one structured
//! verdict.
//!
//! The library is designed to be pure and stateless: every validation call
//! is independent, performs no I/O, and returns a self-contained report.
//! Presentation concerns (trace printing, timing, exit codes) belong to the
//! caller.
//!
//! ## Modules
//!
//! * `config`: Defines `ValidationConfig` (length bounds, entropy threshold) and YAML loading/merging.
//! * `normalize`: Reduces raw input to its canonical digit-only form.
//! * `issuer`: Classifies the card brand from the leading digit.
//! * `result`: Defines `ValidationResult`, `StageOutcome`, and `ValidationReport`.
//! * `engine`: Defines the `ValidationEngine` trait, the seam between engine and collaborators.
//! * `engines`: Contains the concrete `CompositeEngine` implementation.
//! * `oneshot`: Convenience wrapper for single, non-batch validation calls.
//!
//! ## Usage Example
//!
//! ```rust
//! use cardcheck_core::{CompositeEngine, ValidationConfig, ValidationEngine};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the shipped default thresholds.
//!     let config = ValidationConfig::load_defaults()?;
//!
//!     // 2. Build the composite engine once; it is cheap to reuse.
//!     let engine = CompositeEngine::new(config)?;
//!
//!     // 3. Validate a candidate exactly as the user typed it.
//!     let report = engine.validate("4539 5787 6362 1486");
//!
//!     assert!(report.result.valid);
//!     assert_eq!(report.result.digit_count, 16);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The engine itself is infallible: every input string produces a report,
//! with out-of-bounds lengths yielding a degenerate `valid == false`
//! result. Fallibility exists only at the edges — configuration loading
//! and validation — expressed through `anyhow::Error` contexts and the
//! structured [`CardcheckError`] type.
//!
//! ## Design Principles
//!
//! * **Pure core:** no shared mutable state; safe to call concurrently
//!   without coordination.
//! * **Honest reporting:** the report carries everything a front end needs
//!   (including the confidence grade) so nothing is re-inferred or
//!   recomputed downstream.
//! * **Testable:** every stage is an isolated function with its own tests;
//!   the orchestrator is exercised end-to-end in `tests/`.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod issuer;
pub mod normalize;
pub mod oneshot;
pub mod result;

/// Re-exports the public configuration types and helpers.
pub use config::{
    merge_configs, EntropyConfig, LengthConfig, ValidationConfig, DEFAULT_ENTROPY_THRESHOLD,
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, MAX_DIGIT_ENTROPY_BITS,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::CardcheckError;

/// Re-exports the core validation engine trait.
pub use engine::ValidationEngine;

/// Re-exports the concrete `CompositeEngine` implementation.
pub use engines::composite_engine::CompositeEngine;

/// Re-exports the report value types.
pub use result::{Confidence, StageOutcome, ValidationReport, ValidationResult};

/// Re-exports the issuer heuristic.
pub use issuer::{classify_issuer, Issuer};

/// Re-exports input normalization.
pub use normalize::normalize;

/// Re-exports the one-shot convenience entry point.
pub use oneshot::oneshot_validate;
