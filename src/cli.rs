//! Command-line interface for CycloKit.
//!
//! [`Args`] is parsed with [`clap`]. Values left out on the command line
//! fall back to the loaded [`Config`]; a request file replaces the shape
//! flags entirely. Curve data goes to `--output` or stdout.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use cyclokit_core::Point;
use cyclokit_geometry::export::{self, MAX_PRECISION};
use cyclokit_geometry::{Curve, ExportOptions, GenerationRequest, ShapeDescriptor, ShapeType};
use cyclokit_settings::Config;

/// Rolling shape selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Circle,
    Polygon,
}

impl From<ShapeArg> for ShapeType {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Circle => ShapeType::Circle,
            ShapeArg::Polygon => ShapeType::Polygon,
        }
    }
}

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `X,Y` numeric table
    #[default]
    Csv,
    /// Structured curve record
    Json,
    /// Curve record with per-sample rolling state
    Animation,
}

/// Command-line arguments for the roulette curve generator
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Rolling shape
    #[arg(long, value_enum)]
    pub shape: Option<ShapeArg>,

    /// Number of polygon sides
    #[arg(long)]
    pub sides: Option<usize>,

    /// Circumradius of the shape
    #[arg(long)]
    pub radius: Option<f64>,

    /// Polygon rotation offset in radians
    #[arg(long, allow_hyphen_values = true)]
    pub rotation_offset: Option<f64>,

    /// Trace point x, relative to the shape center
    #[arg(long, requires = "trace_y", allow_hyphen_values = true)]
    pub trace_x: Option<f64>,

    /// Trace point y, relative to the shape center
    #[arg(long, requires = "trace_x", allow_hyphen_values = true)]
    pub trace_y: Option<f64>,

    /// Number of full revolutions; fractions end on a partial arc
    #[arg(long)]
    pub cycles: Option<f64>,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Digits after the decimal point in CSV output
    #[arg(long)]
    pub precision: Option<usize>,

    /// Douglas–Peucker tolerance applied before export
    #[arg(long)]
    pub simplify: Option<f64>,

    /// Generation request file (JSON); replaces the shape flags
    #[arg(long, conflicts_with_all = ["shape", "sides", "radius", "rotation_offset", "trace_x", "trace_y", "cycles"])]
    pub request: Option<PathBuf>,

    /// Path to configuration file (JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file; stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the generator with parsed arguments
pub fn run(args: &Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let rendered = render(args, &config)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!("Curve written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write curve to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}

/// Generates the curve and formats it, without touching the output target
pub fn render(args: &Args, config: &Config) -> Result<String> {
    let precision = args.precision.unwrap_or(config.export.precision);
    if precision > MAX_PRECISION {
        anyhow::bail!(
            "Precision must be <= {}, got {}",
            MAX_PRECISION,
            precision
        );
    }

    let request = build_request(args, config)?;
    debug!("Generation request: {:?}", request);

    let mut curve = request.execute().context("Failed to generate curve")?;
    info!(
        "Generated {} with {} samples, arc length {:.4}",
        curve.kind(),
        curve.len(),
        curve.arc_length()
    );

    if let Some(tolerance) = args.simplify.or(config.export.simplify_tolerance) {
        curve = simplify(&curve, tolerance)?;
    }

    let options = ExportOptions { precision };
    let rendered = match args.format {
        OutputFormat::Csv => export::to_csv(&curve, &options),
        OutputFormat::Json => export::to_json_pretty(&curve).context("Failed to encode curve")?,
        OutputFormat::Animation => {
            export::to_animation_json(&curve).context("Failed to encode animation record")?
        }
    };
    Ok(rendered)
}

/// Builds the request from a request file or from the flags plus config defaults
pub fn build_request(args: &Args, config: &Config) -> Result<GenerationRequest> {
    if let Some(path) = &args.request {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {}", path.display()))?;
        return GenerationRequest::from_json(&json)
            .with_context(|| format!("Invalid request file {}", path.display()));
    }

    let defaults = &config.defaults;
    let radius = args.radius.unwrap_or(defaults.radius);
    let shape = match args.shape.map(ShapeType::from).unwrap_or(defaults.shape) {
        ShapeType::Circle => ShapeDescriptor::Circle { radius },
        ShapeType::Polygon => ShapeDescriptor::Polygon {
            sides: args.sides.unwrap_or(defaults.sides),
            radius,
            rotation_offset: args.rotation_offset.unwrap_or(defaults.rotation_offset),
        },
    };

    let mut request = GenerationRequest::new(shape, args.cycles.unwrap_or(defaults.cycles))
        .with_resolution(config.resolution);
    if let (Some(x), Some(y)) = (args.trace_x, args.trace_y) {
        request = request.with_trace_point(Point::new(x, y));
    }
    Ok(request)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load_or_default().context("Failed to load default config"),
    }
}

fn simplify(curve: &Curve, tolerance: f64) -> Result<Curve> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        anyhow::bail!("Simplify tolerance must be >= 0, got {}", tolerance);
    }
    let simplified = curve.simplify(tolerance);
    debug!(
        "Simplified {} samples to {} (tolerance {})",
        curve.len(),
        simplified.len(),
        tolerance
    );
    Ok(simplified)
}
