//! errors.rs - Custom error types for the cardcheck-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `cardcheck-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CardcheckError {
    #[error("Invalid length bounds: min ({0}) must be at least 1 and no greater than max ({1})")]
    InvalidLengthBounds(usize, usize),

    #[error("Invalid entropy threshold: {0} (must be a finite, positive number of bits)")]
    InvalidEntropyThreshold(f64),

    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
