// cardcheck-core/src/engines/mod.rs
//! Concrete implementations of the `ValidationEngine` trait.

pub mod composite_engine;
