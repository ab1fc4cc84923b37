//! Roulette curve generation.
//!
//! [`CurveGenerator`] turns a shape, a trace-point position and a cycle
//! count into a [`Curve`]. Circles produce a cycloid from its closed-form
//! parametrization; regular polygons produce a cyclogon built one circular
//! arc per side around successive ground-contact pivots.
//!
//! The generator only holds read-only [`Resolution`] constants, so one
//! instance can be shared freely; each call returns a fresh curve.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use cyclokit_core::{GeometryError, Point};

use crate::curve::Curve;
use crate::model::Shape;

mod cyclogon;
mod cycloid;

pub use cyclogon::rolled_sides;
pub use cycloid::cycloid_point;

/// Upper bound on the number of samples a single generation may produce.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Sampling density used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    /// Sub-samples per polygon side.
    pub points_per_side: u32,
    /// Samples per radian of circle rotation.
    pub points_per_radian: f64,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            points_per_side: 50,
            points_per_radian: 30.0,
        }
    }
}

impl Resolution {
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.points_per_side == 0 {
            return Err(GeometryError::invalid_parameter(
                "points_per_side",
                "must be > 0",
            ));
        }
        if !(self.points_per_radian.is_finite() && self.points_per_radian > 0.0) {
            return Err(GeometryError::invalid_parameter(
                "points_per_radian",
                format!("must be > 0, got {}", self.points_per_radian),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CurveGenerator {
    resolution: Resolution,
}

impl CurveGenerator {
    pub fn new(resolution: Resolution) -> Self {
        Self { resolution }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Generates the curve traced by `trace_point` as `shape` rolls `cycles` times.
    ///
    /// `cycles` must be finite and positive; fractional values end on a
    /// partial revolution. Validation happens before any sampling.
    pub fn generate(
        &self,
        shape: &Arc<Shape>,
        trace_point: Point,
        cycles: f64,
    ) -> Result<Curve, GeometryError> {
        self.validate(trace_point, cycles)?;
        let curve = match shape.as_ref() {
            Shape::Circle(circle) => cycloid::generate(
                shape,
                circle,
                trace_point,
                cycles,
                self.resolution.points_per_radian,
            )?,
            Shape::Polygon(polygon) => cyclogon::generate(
                shape,
                polygon,
                trace_point,
                cycles,
                self.resolution.points_per_side,
            )?,
        };
        debug!(
            "Generated {} with {} samples ({} cycles, {} shape)",
            curve.kind(),
            curve.len(),
            cycles,
            shape.shape_type()
        );
        Ok(curve)
    }

    /// Like [`CurveGenerator::generate`], but only accepts circles.
    pub fn generate_cycloid(
        &self,
        shape: &Arc<Shape>,
        trace_point: Point,
        cycles: f64,
    ) -> Result<Curve, GeometryError> {
        match shape.as_ref() {
            Shape::Circle(_) => self.generate(shape, trace_point, cycles),
            other => Err(GeometryError::unsupported_shape(
                "generate_cycloid",
                other.shape_type().to_string(),
            )),
        }
    }

    /// Like [`CurveGenerator::generate`], but only accepts regular polygons.
    pub fn generate_cyclogon(
        &self,
        shape: &Arc<Shape>,
        trace_point: Point,
        cycles: f64,
    ) -> Result<Curve, GeometryError> {
        match shape.as_ref() {
            Shape::Polygon(_) => self.generate(shape, trace_point, cycles),
            other => Err(GeometryError::unsupported_shape(
                "generate_cyclogon",
                other.shape_type().to_string(),
            )),
        }
    }

    fn validate(&self, trace_point: Point, cycles: f64) -> Result<(), GeometryError> {
        if !(cycles.is_finite() && cycles > 0.0) {
            return Err(GeometryError::invalid_parameter(
                "cycles",
                format!("must be > 0, got {cycles}"),
            ));
        }
        if !trace_point.is_finite() {
            return Err(GeometryError::invalid_parameter(
                "trace_point",
                "coordinates must be finite",
            ));
        }
        self.resolution.validate()
    }
}

fn check_sample_budget(samples: f64) -> Result<usize, GeometryError> {
    if samples > MAX_SAMPLES as f64 {
        return Err(GeometryError::invalid_parameter(
            "cycles",
            format!("would produce {samples:.0} samples, limit is {MAX_SAMPLES}"),
        ));
    }
    Ok(samples as usize)
}
