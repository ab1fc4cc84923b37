use std::f64::consts::TAU;
use std::sync::Arc;

use cyclokit_core::{GeometryError, Point};

use super::check_sample_budget;
use crate::curve::{keys, Curve, CurveKind, CurvePoint, SampleMeta};
use crate::model::{Circle, Shape};

/// Closed-form cycloid position after the circle has rotated by `theta`.
///
/// The circle rolls rightwards along `y = 0`, so its center sits at
/// `(R·θ, R)` and the traced point turns clockwise (`α − θ`).
pub fn cycloid_point(radius: f64, distance: f64, initial_angle: f64, theta: f64) -> Point {
    let center = Point::new(radius * theta, radius);
    center + Point::from_polar(distance, initial_angle - theta)
}

pub(super) fn generate(
    source: &Arc<Shape>,
    circle: &Circle,
    trace_point: Point,
    cycles: f64,
    points_per_radian: f64,
) -> Result<Curve, GeometryError> {
    let radius = circle.radius();
    let offset = trace_point - circle.center();
    let distance = offset.length();
    let initial_angle = offset.angle();

    let total_angle = cycles * TAU;
    let steps = check_sample_budget((total_angle * points_per_radian).ceil().max(1.0))?;

    let mut curve = Curve::with_capacity(CurveKind::Cycloid, Arc::clone(source), steps + 1);
    for i in 0..=steps {
        let theta = total_angle * i as f64 / steps as f64;
        curve.add_point(CurvePoint::new(
            cycloid_point(radius, distance, initial_angle, theta),
            SampleMeta::Cycloid {
                theta,
                center: Point::new(radius * theta, radius),
            },
        ));
    }

    curve.set_metadata(keys::CYCLES, cycles);
    curve.set_metadata(keys::RADIUS, radius);
    curve.set_metadata(keys::TOTAL_DISTANCE, radius * total_angle);
    curve.set_metadata(keys::DISTANCE, distance);
    curve.set_metadata(keys::INITIAL_ANGLE, initial_angle);
    Ok(curve)
}
