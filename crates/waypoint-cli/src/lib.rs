//! waypoint-cli library root.
//!
//! Re-exports internal modules so that integration tests can exercise
//! views, rendering and config handling without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod state;
pub mod views;

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";
