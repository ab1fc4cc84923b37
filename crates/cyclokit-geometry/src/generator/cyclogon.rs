use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::Arc;

use cyclokit_core::{approx_eq, GeometryError, Point};

use super::check_sample_budget;
use crate::curve::{keys, Curve, CurveKind, CurvePoint, SampleMeta};
use crate::model::{RegularPolygon, Shape};

/// Number of sides rolled for `cycles` revolutions of an `sides`-gon.
///
/// Values within [`cyclokit_core::EPSILON`] of a whole number of sides
/// snap to it, so float noise never produces a near-empty final arc.
pub fn rolled_sides(cycles: f64, sides: usize) -> f64 {
    let raw = cycles * sides as f64;
    let rounded = raw.round();
    if rounded >= 1.0 && approx_eq(raw, rounded) {
        rounded
    } else {
        raw
    }
}

pub(super) fn generate(
    source: &Arc<Shape>,
    polygon: &RegularPolygon,
    trace_point: Point,
    cycles: f64,
    points_per_side: u32,
) -> Result<Curve, GeometryError> {
    // Rest the polygon flush on a side before rolling.
    let resting = polygon.bottom_edge();
    let adjusted = (trace_point - polygon.center()).rotate(resting.adjustment_rotation);
    let distance = adjusted.length();
    let initial_angle = adjusted.angle();

    let radius = polygon.radius();
    let side_length = polygon.side_length();
    let exterior = polygon.exterior_angle();
    // Direction from the pivot to the center when a side lies flat.
    let base_angle = FRAC_PI_2 + (PI - polygon.interior_angle()) / 2.0;

    let raw = rolled_sides(cycles, polygon.sides());
    let total_sides = raw.ceil() as usize;
    let fraction = raw - raw.floor();
    let per_side = points_per_side as usize;
    check_sample_budget(total_sides as f64 * per_side as f64 + 1.0)?;

    let mut curve = Curve::with_capacity(
        CurveKind::Cyclogon,
        Arc::clone(source),
        total_sides * per_side + 1,
    );
    let mut pivot = Point::new(side_length, 0.0);
    let mut cumulative = 0.0;

    for side_index in 0..total_sides {
        let partial = side_index + 1 == total_sides && fraction > 0.0;
        let (steps, sweep) = if partial {
            (((per_side as f64 * fraction).ceil() as usize).max(1), fraction)
        } else {
            (per_side, 1.0)
        };
        // The first sample of each later side repeats the previous side's last one.
        let first = if side_index == 0 { 0 } else { 1 };

        for j in first..=steps {
            let local = sweep * exterior * j as f64 / steps as f64;
            let rotation = cumulative + local;
            let center = pivot + Point::from_polar(radius, base_angle - local);
            let position = center + Point::from_polar(distance, initial_angle - rotation);
            curve.add_point(CurvePoint::new(
                position,
                SampleMeta::Cyclogon {
                    side_index,
                    rotation,
                    pivot,
                    center,
                },
            ));
        }

        pivot.x += side_length;
        cumulative += exterior;
    }

    curve.set_metadata(keys::CYCLES, cycles);
    curve.set_metadata(keys::SIDES, polygon.sides() as f64);
    curve.set_metadata(keys::RADIUS, radius);
    curve.set_metadata(keys::TOTAL_DISTANCE, total_sides as f64 * side_length);
    curve.set_metadata(keys::ROLLED_SIDES, raw);
    curve.set_metadata(keys::SIDE_LENGTH, side_length);
    curve.set_metadata(keys::EXTERIOR_ANGLE, exterior);
    curve.set_metadata(keys::ADJUSTMENT_ROTATION, resting.adjustment_rotation);
    curve.set_metadata(keys::DISTANCE, distance);
    curve.set_metadata(keys::INITIAL_ANGLE, initial_angle);
    Ok(curve)
}
