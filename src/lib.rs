//! # CycloKit
//!
//! Roulette curve generator: traces the path of a point attached to a
//! circle or regular polygon as it rolls without slipping along a line.
//!
//! ## Architecture
//!
//! CycloKit is organized as a workspace with multiple crates:
//!
//! 1. **cyclokit-core** - Planar points, angle helpers, error types
//! 2. **cyclokit-geometry** - Shapes, trace point, curve generation, export
//! 3. **cyclokit-settings** - Persisted configuration (JSON/TOML)
//! 4. **cyclokit** - Command-line binary that integrates all crates
//!
//! ## Features
//!
//! - **Cycloids**: closed-form sampling for rolling circles
//! - **Cyclogons**: arc-by-arc sampling around ground-contact pivots
//! - **Partial revolutions**: fractional cycle counts end on a partial arc
//! - **Export**: `X,Y` numeric tables, structured JSON records and
//!   animation records with per-sample rolling state

pub mod cli;

pub use cyclokit_core::{Error, GeometryError, Point, Result};

pub use cyclokit_geometry::{
    export, pose_at, pose_at_progress, poses, Circle, Curve, CurveGenerator, CurveKind,
    CurvePoint, ExportOptions, GenerationRequest, RegularPolygon, Resolution, SampleMeta, Shape,
    ShapeDescriptor, ShapePose, ShapeType, SnapState, TracePoint,
};

pub use cyclokit_settings::{Config, ExportSettings, SettingsError, ShapeDefaults};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, leaving stdout for curve data
/// - RUST_LOG environment variable support, `info` by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
