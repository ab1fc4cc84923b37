//! Ramer–Douglas–Peucker polyline reduction.

use cyclokit_core::Point;

use crate::model::Segment;

/// Returns a keep-mask for `points` after Douglas–Peucker reduction.
///
/// Both endpoints are always kept. A point is dropped only when its
/// distance to the chord that replaces it is within `tolerance`; the
/// distance is measured to the chord segment, so every dropped point also
/// lies within `tolerance` of the simplified polyline.
pub fn simplify_mask(points: &[Point], tolerance: f64) -> Vec<bool> {
    let mut mask = vec![false; points.len()];
    if points.len() <= 2 {
        mask.iter_mut().for_each(|keep| *keep = true);
        return mask;
    }

    let tolerance = tolerance.max(0.0);
    let last = points.len() - 1;
    mask[0] = true;
    mask[last] = true;

    let mut pending = vec![(0usize, last)];
    while let Some((start, end)) = pending.pop() {
        if end <= start + 1 {
            continue;
        }
        let chord = Segment::new(points[start], points[end]);
        let mut max_distance = -1.0;
        let mut max_index = start;
        for (offset, p) in points[start + 1..end].iter().enumerate() {
            let distance = chord.distance_to_point(p).distance;
            if distance > max_distance {
                max_distance = distance;
                max_index = start + 1 + offset;
            }
        }
        if max_distance > tolerance {
            mask[max_index] = true;
            pending.push((max_index, end));
            pending.push((start, max_index));
        }
    }
    mask
}

/// Convenience wrapper returning the retained points.
pub fn simplify_polyline(points: &[Point], tolerance: f64) -> Vec<Point> {
    simplify_mask(points, tolerance)
        .into_iter()
        .zip(points)
        .filter_map(|(keep, p)| keep.then_some(*p))
        .collect()
}
