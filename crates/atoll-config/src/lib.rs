//! Application configuration for Atoll.
//!
//! Settings persist to disk as a RON file next to the user's other config,
//! with CLI overrides via clap and change detection for host-driven
//! regeneration. Missing fields fall back to defaults so older files keep
//! loading.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, OutputConfig, default_config_dir};
pub use error::ConfigError;
