//! The point whose trajectory is recorded while a shape rolls.
//!
//! A trace point is either free or snapped to the active shape's border.
//! Snap bookkeeping is an explicit state machine:
//!
//! ```text
//! Free ──snap_to_polygon_edge──▶ SnappedToEdge
//! Free ──snap_to_circle_border─▶ SnappedToAngle
//! any  ──set_position/translate─▶ Free
//! ```

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use tracing::warn;

use cyclokit_core::{GeometryError, Point};

use crate::model::Shape;

/// How the trace point relates to the active shape's border.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SnapState {
    #[default]
    Free,
    /// On polygon edge `edge_index` at parameter `t` in `[0, 1]`.
    SnappedToEdge { edge_index: usize, t: f64 },
    /// On a circle's border at `angle` radians from its center.
    SnappedToAngle { angle: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    position: Point,
    snap_state: SnapState,
}

impl TracePoint {
    /// Creates a free trace point.
    pub fn new(position: Point) -> Self {
        Self {
            position,
            snap_state: SnapState::Free,
        }
    }

    /// Creates a trace point resting at the shape's canonical top.
    pub fn at_shape_top(shape: &Shape) -> Self {
        let mut point = Self::new(shape.top_point());
        point.reset_to_shape_top(shape);
        point
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn snap_state(&self) -> SnapState {
        self.snap_state
    }

    pub fn is_snapped(&self) -> bool {
        self.snap_state != SnapState::Free
    }

    /// Moves the point freely; always clears the snap state.
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Point::new(x, y);
        self.snap_state = SnapState::Free;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.set_position(self.position.x + dx, self.position.y + dy);
    }

    pub fn distance_to(&self, p: &Point) -> f64 {
        self.position.distance_to(p)
    }

    /// Position expressed relative to `center`.
    pub fn relative_to(&self, center: &Point) -> Point {
        self.position - *center
    }

    /// Places the point on polygon edge `edge_index` at parameter `t`.
    ///
    /// `t` is clamped into `[0, 1]` and the edge index wraps around.
    pub fn snap_to_polygon_edge(
        &mut self,
        shape: &Shape,
        edge_index: usize,
        t: f64,
    ) -> Result<SnapState, GeometryError> {
        let Shape::Polygon(polygon) = shape else {
            return Err(GeometryError::unsupported_shape(
                "snap_to_polygon_edge",
                shape.shape_type().to_string(),
            ));
        };
        if t.is_nan() {
            return Err(GeometryError::invalid_parameter("t", "must be a number"));
        }
        let clamped = t.clamp(0.0, 1.0);
        if clamped != t {
            warn!("Edge parameter {} clamped to {}", t, clamped);
        }
        let edge_index = edge_index % polygon.sides();
        self.position = polygon.edge(edge_index).point_at(clamped);
        self.snap_state = SnapState::SnappedToEdge {
            edge_index,
            t: clamped,
        };
        Ok(self.snap_state)
    }

    /// Places the point on a circle's border at `angle`.
    pub fn snap_to_circle_border(
        &mut self,
        shape: &Shape,
        angle: f64,
    ) -> Result<SnapState, GeometryError> {
        let Shape::Circle(circle) = shape else {
            return Err(GeometryError::unsupported_shape(
                "snap_to_circle_border",
                shape.shape_type().to_string(),
            ));
        };
        if !angle.is_finite() {
            return Err(GeometryError::invalid_parameter("angle", "must be finite"));
        }
        self.position = circle.point_on_circle(angle);
        self.snap_state = SnapState::SnappedToAngle { angle };
        Ok(self.snap_state)
    }

    /// Projects the point onto the nearest spot of the shape's border.
    pub fn snap_to_nearest_edge(&mut self, shape: &Shape) -> SnapState {
        match shape {
            Shape::Polygon(polygon) => {
                let closest = polygon.find_closest_edge(&self.position);
                self.position = closest.closest_point;
                self.snap_state = SnapState::SnappedToEdge {
                    edge_index: closest.edge_index,
                    t: closest.t,
                };
            }
            Shape::Circle(circle) => {
                let projection = circle.project_to_border(&self.position);
                self.position = projection.point;
                self.snap_state = SnapState::SnappedToAngle {
                    angle: projection.angle,
                };
            }
        }
        self.snap_state
    }

    /// Moves the point to the polygon's top vertex or the circle's top point.
    pub fn reset_to_shape_top(&mut self, shape: &Shape) -> SnapState {
        match shape {
            Shape::Polygon(polygon) => {
                let top = polygon.top_vertex();
                self.position = top.position;
                self.snap_state = SnapState::SnappedToEdge {
                    edge_index: top.index,
                    t: 0.0,
                };
            }
            Shape::Circle(circle) => {
                self.position = circle.point_on_circle(FRAC_PI_2);
                self.snap_state = SnapState::SnappedToAngle { angle: FRAC_PI_2 };
            }
        }
        self.snap_state
    }
}
