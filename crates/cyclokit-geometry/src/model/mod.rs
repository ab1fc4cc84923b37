//! Geometric model of the shapes that can roll.

use std::fmt;

use serde::{Deserialize, Serialize};

use cyclokit_core::Point;

mod circle;
mod polygon;
mod segment;

pub use circle::{BorderProjection, Circle};
pub use polygon::{ClosestEdge, RegularPolygon, RestingEdge, Vertex};
pub use segment::{Segment, SegmentDistance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    #[default]
    Polygon,
    Circle,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polygon => write!(f, "polygon"),
            Self::Circle => write!(f, "circle"),
        }
    }
}

/// The active rolling shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(RegularPolygon),
    Circle(Circle),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Circle(_) => ShapeType::Circle,
        }
    }

    /// Circumscribed radius for polygons, radius for circles.
    pub fn radius(&self) -> f64 {
        match self {
            Shape::Polygon(p) => p.radius(),
            Shape::Circle(c) => c.radius(),
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Shape::Polygon(p) => p.center(),
            Shape::Circle(c) => c.center(),
        }
    }

    /// The canonical starting point for a trace point on this shape.
    pub fn top_point(&self) -> Point {
        match self {
            Shape::Polygon(p) => p.top_vertex().position,
            Shape::Circle(c) => c.top_point(),
        }
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        match self {
            Shape::Polygon(poly) => poly.contains_point(p),
            Shape::Circle(c) => c.contains_point(p),
        }
    }

    pub fn as_polygon(&self) -> Option<&RegularPolygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            Shape::Circle(_) => None,
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Polygon(_) => None,
        }
    }
}

impl From<RegularPolygon> for Shape {
    fn from(polygon: RegularPolygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
