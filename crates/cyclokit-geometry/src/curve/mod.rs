//! Sampled roulette curves.
//!
//! A [`Curve`] is produced in a single generation pass and then treated as
//! read-only by its consumers. Points are kept in increasing parametric
//! order (rotation angle for cycloids, side progression for cyclogons);
//! no operation reorders them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use cyclokit_core::{Point, EPSILON};

use crate::model::Shape;

pub mod simplify;

pub use simplify::{simplify_mask, simplify_polyline};

/// Names of the curve-level metadata scalars.
pub mod keys {
    pub const CYCLES: &str = "cycles";
    pub const RADIUS: &str = "radius";
    pub const SIDES: &str = "sides";
    pub const TOTAL_DISTANCE: &str = "total_distance";
    pub const ROLLED_SIDES: &str = "rolled_sides";
    pub const SIDE_LENGTH: &str = "side_length";
    pub const EXTERIOR_ANGLE: &str = "exterior_angle";
    pub const ADJUSTMENT_ROTATION: &str = "adjustment_rotation";
    pub const DISTANCE: &str = "distance";
    pub const INITIAL_ANGLE: &str = "initial_angle";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Cycloid,
    Cyclogon,
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycloid => write!(f, "cycloid"),
            Self::Cyclogon => write!(f, "cyclogon"),
        }
    }
}

/// Rolling state captured with each sample, used to replay the motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleMeta {
    Cycloid {
        /// Cumulative rotation angle.
        theta: f64,
        center: Point,
    },
    Cyclogon {
        side_index: usize,
        /// Cumulative rotation angle.
        rotation: f64,
        /// Ground-contact vertex the polygon is rotating about.
        pivot: Point,
        center: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
    pub meta: SampleMeta,
}

impl CurvePoint {
    pub fn new(position: Point, meta: SampleMeta) -> Self {
        Self {
            x: position.x,
            y: position.y,
            meta,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Shape center at the instant of this sample.
    pub fn center(&self) -> Point {
        match self.meta {
            SampleMeta::Cycloid { center, .. } | SampleMeta::Cyclogon { center, .. } => center,
        }
    }

    /// Cumulative rotation; increases monotonically along a curve.
    pub fn rotation(&self) -> f64 {
        match self.meta {
            SampleMeta::Cycloid { theta, .. } => theta,
            SampleMeta::Cyclogon { rotation, .. } => rotation,
        }
    }

    pub fn pivot(&self) -> Option<Point> {
        match self.meta {
            SampleMeta::Cyclogon { pivot, .. } => Some(pivot),
            SampleMeta::Cycloid { .. } => None,
        }
    }

    fn map_positions(&mut self, f: impl Fn(Point) -> Point) {
        let moved = f(self.position());
        self.x = moved.x;
        self.y = moved.y;
        match &mut self.meta {
            SampleMeta::Cycloid { center, .. } => *center = f(*center),
            SampleMeta::Cyclogon { pivot, center, .. } => {
                *pivot = f(*pivot);
                *center = f(*center);
            }
        }
    }
}

/// Axis-aligned bounds of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Inclusive containment test with a small tolerance.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min_x - EPSILON
            && p.x <= self.max_x + EPSILON
            && p.y >= self.min_y - EPSILON
            && p.y <= self.max_y + EPSILON
    }
}

/// The translation and scale applied by [`Curve::normalize`].
///
/// A normalized point is `(p + offset) * scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizeTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl NormalizeTransform {
    pub fn apply(&self, p: &Point) -> Point {
        Point::new(
            (p.x + self.offset_x) * self.scale,
            (p.y + self.offset_y) * self.scale,
        )
    }

    pub fn invert(&self, p: &Point) -> Point {
        Point::new(
            p.x / self.scale - self.offset_x,
            p.y / self.scale - self.offset_y,
        )
    }
}

/// An ordered sequence of samples traced by a rolling shape.
#[derive(Debug, Clone)]
pub struct Curve {
    kind: CurveKind,
    source: Arc<Shape>,
    points: Vec<CurvePoint>,
    metadata: BTreeMap<String, f64>,
}

impl Curve {
    /// Creates an empty curve generated from `source`.
    pub fn new(kind: CurveKind, source: Arc<Shape>) -> Self {
        Self {
            kind,
            source,
            points: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub(crate) fn with_capacity(kind: CurveKind, source: Arc<Shape>, capacity: usize) -> Self {
        Self {
            kind,
            source,
            points: Vec::with_capacity(capacity),
            metadata: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// The shape that generated this curve.
    pub fn source(&self) -> &Arc<Shape> {
        &self.source
    }

    pub fn add_point(&mut self, point: CurvePoint) {
        self.points.push(point);
    }

    /// Snapshot copy of the samples.
    pub fn points(&self) -> Vec<CurvePoint> {
        self.points.clone()
    }

    pub fn as_slice(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Plain coordinates without rolling metadata.
    pub fn coordinates(&self) -> Vec<Point> {
        self.points.iter().map(CurvePoint::position).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    pub fn get(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    pub fn metadata(&self) -> &BTreeMap<String, f64> {
        &self.metadata
    }

    pub fn metadata_value(&self, key: &str) -> Option<f64> {
        self.metadata.get(key).copied()
    }

    pub fn set_metadata(&mut self, key: impl Into<String>, value: f64) {
        self.metadata.insert(key.into(), value);
    }

    /// Min/max over all samples; `None` for an empty curve.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let init = BoundingBox {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(self.points.iter().fold(init, |bb, p| BoundingBox {
            min_x: bb.min_x.min(p.x),
            min_y: bb.min_y.min(p.y),
            max_x: bb.max_x.max(p.x),
            max_y: bb.max_y.max(p.y),
        }))
    }

    /// Length of the polyline through all samples.
    pub fn arc_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].position().distance_to(&w[1].position()))
            .sum()
    }

    /// Index of and distance to the sample nearest `position`.
    pub fn find_closest_point(&self, position: &Point) -> Option<(usize, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.position().distance_to(position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    fn derived(&self, points: Vec<CurvePoint>) -> Curve {
        Curve {
            kind: self.kind,
            source: Arc::clone(&self.source),
            points,
            metadata: self.metadata.clone(),
        }
    }

    /// Samples in `start..end`; both bounds are clamped to the curve.
    pub fn slice(&self, start: usize, end: usize) -> Curve {
        let end = end.min(self.points.len());
        let start = start.min(end);
        self.derived(self.points[start..end].to_vec())
    }

    /// Every `step`-th sample, always ending on the last one.
    pub fn subsample(&self, step: usize) -> Curve {
        let step = if step == 0 {
            warn!("Subsample step 0 treated as 1");
            1
        } else {
            step
        };
        let mut points: Vec<CurvePoint> = self.points.iter().step_by(step).copied().collect();
        if let Some(last) = self.points.last() {
            if (self.points.len() - 1) % step != 0 {
                points.push(*last);
            }
        }
        self.derived(points)
    }

    /// Moves every sample, including its recorded center and pivot.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.map_positions(|q| q.translate(dx, dy));
        }
    }

    /// Scales every sample about the origin.
    pub fn scale(&mut self, factor: f64) {
        for p in &mut self.points {
            p.map_positions(|q| q * factor);
        }
    }

    /// Fits the curve into the unit box anchored at the origin.
    ///
    /// The larger bounding-box side becomes 1 and the aspect ratio is kept.
    /// Returns `None` (and leaves the curve untouched) when it is empty.
    pub fn normalize(&mut self) -> Option<NormalizeTransform> {
        let bb = self.bounding_box()?;
        let extent = bb.width().max(bb.height());
        let scale = if extent < EPSILON { 1.0 } else { 1.0 / extent };
        let transform = NormalizeTransform {
            offset_x: -bb.min_x,
            offset_y: -bb.min_y,
            scale,
        };
        for p in &mut self.points {
            p.map_positions(|q| transform.apply(&q));
        }
        Some(transform)
    }

    /// Reverses a previous [`Curve::normalize`].
    pub fn denormalize(&mut self, transform: &NormalizeTransform) {
        for p in &mut self.points {
            p.map_positions(|q| transform.invert(&q));
        }
    }

    /// Douglas–Peucker simplification; see [`simplify_mask`].
    pub fn simplify(&self, tolerance: f64) -> Curve {
        if tolerance < 0.0 {
            warn!("Negative simplify tolerance {} treated as 0", tolerance);
        }
        let mask = simplify_mask(&self.coordinates(), tolerance);
        let points = self
            .points
            .iter()
            .zip(mask)
            .filter_map(|(p, keep)| keep.then_some(*p))
            .collect();
        self.derived(points)
    }
}
