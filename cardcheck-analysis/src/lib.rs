// cardcheck-analysis/src/lib.rs
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod luhn;
pub mod repetition;

/// Common type definitions
pub type EntropyScore = f64;
