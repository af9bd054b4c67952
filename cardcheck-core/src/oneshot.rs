// cardcheck-core/src/oneshot.rs

//! `oneshot.rs`
//! Convenience wrapper for one-off validation calls.
//! Builds a [`CompositeEngine`] from the given configuration, runs a single
//! candidate through it, and returns the report.

use anyhow::Result;

use crate::config::ValidationConfig;
use crate::engine::ValidationEngine;
use crate::engines::composite_engine::CompositeEngine;
use crate::result::ValidationReport;

/// Validates a single candidate number in one call.
///
/// This is the primary entry point for callers that do not need to hold an
/// engine across calls. Engine construction cost is negligible here, but
/// batch callers should construct a [`CompositeEngine`] once and reuse it.
///
/// # Arguments
///
/// * `config` - The validation configuration (defaults + optional user overrides).
/// * `raw` - The candidate number exactly as the user supplied it.
pub fn oneshot_validate(config: ValidationConfig, raw: &str) -> Result<ValidationReport> {
    let engine = CompositeEngine::new(config)?;
    Ok(engine.validate(raw))
}
