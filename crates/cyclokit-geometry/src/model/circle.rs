use std::f64::consts::{FRAC_PI_2, PI, TAU};

use cyclokit_core::{GeometryError, Point};

/// Radial projection of a point onto a circle's border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderProjection {
    pub point: Point,
    pub angle: f64,
}

/// A circle described by its radius and center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    center: Point,
}

impl Circle {
    /// Creates a circle centered at the origin.
    pub fn new(radius: f64) -> Result<Self, GeometryError> {
        Self::with_center(radius, Point::ORIGIN)
    }

    pub fn with_center(radius: f64, center: Point) -> Result<Self, GeometryError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(GeometryError::invalid_geometry(format!(
                "radius must be positive, got {radius}"
            )));
        }
        if !center.is_finite() {
            return Err(GeometryError::invalid_geometry("center must be finite"));
        }
        Ok(Self { radius, center })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    pub fn point_on_circle(&self, angle: f64) -> Point {
        self.center + Point::from_polar(self.radius, angle)
    }

    pub fn top_point(&self) -> Point {
        self.point_on_circle(FRAC_PI_2)
    }

    pub fn bottom_point(&self) -> Point {
        self.point_on_circle(-FRAC_PI_2)
    }

    pub fn left_point(&self) -> Point {
        self.point_on_circle(PI)
    }

    pub fn right_point(&self) -> Point {
        self.point_on_circle(0.0)
    }

    /// Angle of `p` as seen from the center; `0.0` when `p` is the center.
    pub fn angle_to_point(&self, p: &Point) -> f64 {
        (*p - self.center).angle()
    }

    pub fn distance_from_center(&self, p: &Point) -> f64 {
        self.center.distance_to(p)
    }

    pub fn contains_point(&self, p: &Point) -> bool {
        self.distance_from_center(p) <= self.radius
    }

    pub fn project_to_border(&self, p: &Point) -> BorderProjection {
        let angle = self.angle_to_point(p);
        BorderProjection {
            point: self.point_on_circle(angle),
            angle,
        }
    }

    /// Signed distance to the border: negative inside, positive outside.
    pub fn distance_to_border(&self, p: &Point) -> f64 {
        self.distance_from_center(p) - self.radius
    }
}
