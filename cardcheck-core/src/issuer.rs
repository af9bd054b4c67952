// File: cardcheck-core/src/issuer.rs
//! Issuer classification from the leading digit of a normalized number.
//!
//! This is a deliberately simplistic heuristic: only the first digit is
//! examined, with no issuer-database or prefix-range lookup (Mastercard's
//! 2221-2720 range, for example, is not recognized).
//!
//! License: MIT OR APACHE 2.0

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Card brands recognized by the leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Issuer {
    Visa,
    Mastercard,
    #[default]
    Unknown,
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issuer::Visa => write!(f, "VISA"),
            Issuer::Mastercard => write!(f, "MASTERCARD"),
            Issuer::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// Immutable lookup table indexed by the leading byte, built once on first
// use. Never written after initialization.
static ISSUER_LOOKUP: Lazy<[Issuer; 256]> = Lazy::new(|| {
    let mut table = [Issuer::Unknown; 256];
    table[b'4' as usize] = Issuer::Visa;
    table[b'5' as usize] = Issuer::Mastercard;
    table
});

/// Classifies the issuer from the first byte of a normalized digit string.
///
/// Empty input maps to [`Issuer::Unknown`].
pub fn classify_issuer(digits: &str) -> Issuer {
    match digits.as_bytes().first() {
        Some(&byte) => ISSUER_LOOKUP[byte as usize],
        None => Issuer::Unknown,
    }
}
