//! Replay of the rolling motion from a generated curve.
//!
//! Each curve sample records the shape's center and cumulative rotation.
//! A [`ShapePose`] turns that into what a renderer needs to draw the
//! shape in sync with the curve's progress.

use cyclokit_core::Point;

use crate::curve::{keys, Curve, SampleMeta};
use crate::model::Shape;

/// Placement of the rolling shape at one curve sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePose {
    pub center: Point,
    /// Visual rotation (counter-clockwise) applied to the source shape.
    pub rotation: f64,
    /// Polygon vertices in curve coordinates; empty for circles.
    pub vertices: Vec<Point>,
    /// The traced point at this sample.
    pub trace_point: Point,
}

/// Pose of the source shape at sample `index`.
pub fn pose_at(curve: &Curve, index: usize) -> Option<ShapePose> {
    let sample = curve.get(index)?;
    let pose = match (sample.meta, curve.source().as_ref()) {
        (SampleMeta::Cycloid { theta, center }, _) => ShapePose {
            center,
            rotation: -theta,
            vertices: Vec::new(),
            trace_point: sample.position(),
        },
        (SampleMeta::Cyclogon { rotation, center, .. }, Shape::Polygon(polygon)) => {
            // Curve rotation is measured from the side-down orientation.
            let adjustment = curve
                .metadata_value(keys::ADJUSTMENT_ROTATION)
                .unwrap_or(0.0);
            let visual = adjustment - rotation;
            ShapePose {
                center,
                rotation: visual,
                vertices: polygon
                    .vertices()
                    .iter()
                    .map(|v| center + v.position.rotate(visual))
                    .collect(),
                trace_point: sample.position(),
            }
        }
        (SampleMeta::Cyclogon { rotation, center, .. }, Shape::Circle(_)) => ShapePose {
            center,
            rotation: -rotation,
            vertices: Vec::new(),
            trace_point: sample.position(),
        },
    };
    Some(pose)
}

/// Pose at `progress` in `[0, 1]` along the curve, snapped to the nearest sample.
pub fn pose_at_progress(curve: &Curve, progress: f64) -> Option<ShapePose> {
    if curve.is_empty() {
        return None;
    }
    let last = curve.len() - 1;
    let index = (progress.clamp(0.0, 1.0) * last as f64).round() as usize;
    pose_at(curve, index.min(last))
}

/// All poses in sample order.
pub fn poses(curve: &Curve) -> impl Iterator<Item = ShapePose> + '_ {
    (0..curve.len()).filter_map(move |i| pose_at(curve, i))
}
