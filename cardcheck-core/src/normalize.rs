// File: cardcheck-core/src/normalize.rs
//! Input normalization for candidate card numbers.
//!
//! Raw input arrives however the user typed it: grouped with spaces,
//! dashed, or pasted with surrounding punctuation. Normalization reduces
//! it to the canonical digit-only form every downstream check operates on.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

/// Strips every non-digit character from raw input, preserving digit order.
///
/// Returns a borrowed slice when the input is already digit-only, so the
/// common pre-cleaned case allocates nothing. Empty and fully non-digit
/// input yield an empty string rather than an error; the engine's length
/// gate is responsible for rejecting those.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(raw.chars().filter(|c| c.is_ascii_digit()).collect())
    }
}
