// cardcheck/src/logger.rs
//! Logger initialization for the cardcheck CLI.
//!
//! Wraps `env_logger` so the binary, commands, and integration tests share
//! a single initialization path.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// An explicit `level_override` takes precedence over `RUST_LOG`; `None`
/// defers to the environment with a `warn` default. Safe to call more than
/// once: later calls are no-ops.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
