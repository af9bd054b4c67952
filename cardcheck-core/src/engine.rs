// cardcheck-core/src/engine.rs
//! Defines the core ValidationEngine trait.
//!
//! The `ValidationEngine` trait is the seam between the validation logic
//! and its collaborators (CLI, tests, embedding applications). Callers hand
//! the engine a raw input string and receive a structured report; all
//! presentation concerns stay on the caller's side of the trait.
//!
//! License: MIT OR APACHE 2.0

use crate::config::ValidationConfig;
use crate::result::ValidationReport;

/// A trait that defines the core functionality of a validation engine.
pub trait ValidationEngine: Send + Sync {
    /// Validates a raw candidate number and returns the structured report.
    ///
    /// This method never fails: malformed input (wrong length, no digits)
    /// produces a degenerate report with `valid == false` rather than an
    /// error. Calls are pure and independent, so a single engine may be
    /// shared freely across threads.
    fn validate(&self, raw: &str) -> ValidationReport;

    /// Returns the configuration the engine was built with.
    ///
    /// This is used by external components, such as the trace renderer,
    /// to display threshold information without recomputing it.
    fn config(&self) -> &ValidationConfig;
}
