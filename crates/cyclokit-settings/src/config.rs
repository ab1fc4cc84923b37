//! Configuration and settings management for CycloKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, stored by default in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Sampling resolution used by the curve generator
//! - Export options (numeric precision, optional simplification)
//! - Shape defaults applied when a generation request leaves them out

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use cyclokit_geometry::export::MAX_PRECISION;
use cyclokit_geometry::{
    Circle, CurveGenerator, ExportOptions, RegularPolygon, Resolution, Shape, ShapeDescriptor,
    ShapeType,
};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Directory created under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "cyclokit";
/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Export preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Digits after the decimal point in numeric tables
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Douglas–Peucker tolerance applied before export; `None` keeps every sample
    #[serde(default)]
    pub simplify_tolerance: Option<f64>,
}

fn default_precision() -> usize {
    ExportOptions::default().precision
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            simplify_tolerance: None,
        }
    }
}

/// Shape used when a request does not describe one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    pub shape: ShapeType,
    pub sides: usize,
    pub radius: f64,
    pub rotation_offset: f64,
    pub cycles: f64,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            shape: ShapeType::Polygon,
            sides: 4,
            radius: 1.0,
            rotation_offset: 0.0,
            cycles: 1.0,
        }
    }
}

impl ShapeDefaults {
    /// Plain-data description of the default shape.
    pub fn descriptor(&self) -> ShapeDescriptor {
        match self.shape {
            ShapeType::Circle => ShapeDescriptor::Circle {
                radius: self.radius,
            },
            ShapeType::Polygon => ShapeDescriptor::Polygon {
                sides: self.sides,
                radius: self.radius,
                rotation_offset: self.rotation_offset,
            },
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Generator sampling density
    #[serde(default)]
    pub resolution: Resolution,
    /// Export preferences
    #[serde(default)]
    pub export: ExportSettings,
    /// Shape defaults
    #[serde(default)]
    pub defaults: ShapeDefaults,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform location of the configuration file
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        path.push(CONFIG_DIR_NAME);
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Load the config at [`Config::default_path`], falling back to defaults
    /// when no file exists yet
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        // Resolution
        self.resolution
            .validate()
            .map_err(|e| invalid("resolution", e.to_string()))?;

        // Export
        if self.export.precision > MAX_PRECISION {
            return Err(ConfigError::out_of_range("export.precision", self.export.precision).into());
        }
        if let Some(tolerance) = self.export.simplify_tolerance {
            if !(tolerance.is_finite() && tolerance >= 0.0) {
                return Err(ConfigError::out_of_range("export.simplify_tolerance", tolerance).into());
            }
        }

        // Defaults
        if !(self.defaults.cycles.is_finite() && self.defaults.cycles > 0.0) {
            return Err(invalid("defaults.cycles", "must be > 0"));
        }
        self.defaults
            .descriptor()
            .build()
            .map_err(|e| invalid("defaults", e.to_string()))?;

        Ok(())
    }

    /// Generator configured with this resolution
    pub fn generator(&self) -> CurveGenerator {
        CurveGenerator::new(self.resolution)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            precision: self.export.precision,
        }
    }

    /// Builds the default shape.
    pub fn default_shape(&self) -> SettingsResult<Shape> {
        let shape = match self.defaults.shape {
            ShapeType::Circle => Circle::new(self.defaults.radius).map(Shape::Circle),
            ShapeType::Polygon => RegularPolygon::with_rotation(
                self.defaults.sides,
                self.defaults.radius,
                self.defaults.rotation_offset,
            )
            .map(Shape::Polygon),
        };
        shape.map_err(|e| invalid("defaults", e.to_string()))
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> SettingsError {
    SettingsError::InvalidSetting {
        key: key.to_string(),
        reason: reason.into(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )
            .into()),
        }
    }
}
