//! Serializable generation inputs.
//!
//! Mirrors the generation input record:
//!
//! ```json
//! {
//!   "shape": { "kind": "polygon", "sides": 4, "radius": 1.0, "rotation_offset": 0.0 },
//!   "trace_point": { "x": 0.0, "y": 1.0 },
//!   "cycles": 1.5,
//!   "resolution": { "points_per_side": 50, "points_per_radian": 30.0 }
//! }
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cyclokit_core::{GeometryError, Point, Result};

use crate::curve::Curve;
use crate::generator::{CurveGenerator, Resolution};
use crate::model::{Circle, RegularPolygon, Shape};

/// Plain-data description of a rolling shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeDescriptor {
    Circle {
        radius: f64,
    },
    Polygon {
        sides: usize,
        radius: f64,
        #[serde(default)]
        rotation_offset: f64,
    },
}

impl ShapeDescriptor {
    /// Builds and validates the described shape.
    pub fn build(&self) -> std::result::Result<Shape, GeometryError> {
        match *self {
            ShapeDescriptor::Circle { radius } => Ok(Shape::Circle(Circle::new(radius)?)),
            ShapeDescriptor::Polygon {
                sides,
                radius,
                rotation_offset,
            } => Ok(Shape::Polygon(RegularPolygon::with_rotation(
                sides,
                radius,
                rotation_offset,
            )?)),
        }
    }
}

impl From<&Shape> for ShapeDescriptor {
    fn from(shape: &Shape) -> Self {
        match shape {
            Shape::Circle(c) => ShapeDescriptor::Circle {
                radius: c.radius(),
            },
            Shape::Polygon(p) => ShapeDescriptor::Polygon {
                sides: p.sides(),
                radius: p.radius(),
                rotation_offset: p.rotation_offset(),
            },
        }
    }
}

fn default_cycles() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub shape: ShapeDescriptor,
    /// Defaults to the shape's top point when absent.
    #[serde(default)]
    pub trace_point: Option<Point>,
    #[serde(default = "default_cycles")]
    pub cycles: f64,
    #[serde(default)]
    pub resolution: Resolution,
}

impl GenerationRequest {
    pub fn new(shape: ShapeDescriptor, cycles: f64) -> Self {
        Self {
            shape,
            trace_point: None,
            cycles,
            resolution: Resolution::default(),
        }
    }

    pub fn with_trace_point(mut self, trace_point: Point) -> Self {
        self.trace_point = Some(trace_point);
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the shape and generates the curve in one step.
    pub fn execute(&self) -> std::result::Result<Curve, GeometryError> {
        let shape = Arc::new(self.shape.build()?);
        let trace_point = self.trace_point.unwrap_or_else(|| shape.top_point());
        CurveGenerator::new(self.resolution).generate(&shape, trace_point, self.cycles)
    }
}
