//! CycloKit Settings Crate
//!
//! Handles generation defaults, sampling resolution and export options,
//! persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, ExportSettings, ShapeDefaults, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
