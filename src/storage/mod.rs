//! # Storage Layer
//!
//! Persistence and configuration for tally.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Users + tasks | Pretty JSON, one document | `productivity_data.json` (configurable) |
//! | Config | TOML | `./tally.toml`, `~/.config/tally/config.toml` |
//!
//! ## Write Policy
//!
//! - The whole document is rewritten on every commit
//! - Writes go through a temp file and a rename
//! - No file locking: one writer at a time is assumed
//!
//! ## Key Types
//!
//! - [`Database`] - The in-memory store bound to its data file
//! - [`Config`] - Effective configuration after layering

mod config;
mod database;

pub use config::{Config, ConfigError, ConfigFile, DEFAULT_SIMULATE_COUNT, LOCAL_CONFIG_FILE};
pub use database::{Database, DEFAULT_DATA_FILE};
