use serde::{Deserialize, Serialize};

use cyclokit_core::{Point, EPSILON};

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDistance {
    pub distance: f64,
    pub closest_point: Point,
    /// Parameter of `closest_point` along the segment, in `[0, 1]`.
    pub t: f64,
}

/// A straight segment between two points, e.g. a polygon edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point {
        self.point_at(0.5)
    }

    /// Point at parameter `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> Point {
        self.start.lerp(&self.end, t)
    }

    /// Unit vector from start to end; zero for a degenerate segment.
    pub fn direction(&self) -> Point {
        let d = self.end - self.start;
        let len = d.length();
        if len < EPSILON {
            Point::ORIGIN
        } else {
            d * (1.0 / len)
        }
    }

    /// Unit normal on the right-hand side of the direction of travel.
    ///
    /// For a polygon wound counter-clockwise this points outward.
    pub fn normal(&self) -> Point {
        let d = self.direction();
        Point::new(d.y, -d.x)
    }

    pub fn distance_to_point(&self, p: &Point) -> SegmentDistance {
        let d = self.end - self.start;
        let len_sq = d.dot(&d);
        let t = if len_sq < EPSILON * EPSILON {
            0.0
        } else {
            ((*p - self.start).dot(&d) / len_sq).clamp(0.0, 1.0)
        };
        let closest_point = self.point_at(t);
        SegmentDistance {
            distance: closest_point.distance_to(p),
            closest_point,
            t,
        }
    }

    /// Perpendicular distance from `p` to the infinite line through the segment.
    ///
    /// Falls back to the point distance when the segment is degenerate.
    pub fn perpendicular_distance(&self, p: &Point) -> f64 {
        let d = self.end - self.start;
        let len = d.length();
        if len < EPSILON {
            return self.start.distance_to(p);
        }
        d.cross(&(*p - self.start)).abs() / len
    }
}
