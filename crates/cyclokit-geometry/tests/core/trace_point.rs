use std::f64::consts::PI;

use cyclokit_core::{GeometryError, Point};
use cyclokit_geometry::{SnapState, TracePoint};

use crate::{assert_close, circle, polygon};

#[test]
fn test_snap_to_nearest_edge_polygon() {
    let shape = polygon(4, 2f64.sqrt());
    let mut point = TracePoint::new(Point::new(0.1, 0.2));
    let state = point.snap_to_nearest_edge(&shape);
    let SnapState::SnappedToEdge { edge_index, t } = state else {
        panic!("expected an edge snap, got {state:?}");
    };
    let expected = shape.as_polygon().unwrap().edge(edge_index).point_at(t);
    assert_close(point.position().x, expected.x);
    assert_close(point.position().y, expected.y);
    assert!(point.is_snapped());
}

#[test]
fn test_snap_to_nearest_edge_circle() {
    let shape = circle(2.0);
    let mut point = TracePoint::new(Point::new(-5.0, 0.0));
    let state = point.snap_to_nearest_edge(&shape);
    assert_eq!(state, SnapState::SnappedToAngle { angle: PI });
    assert_close(point.position().x, -2.0);
    assert_close(point.position().y, 0.0);
}

#[test]
fn test_snap_from_center_of_circle() {
    let shape = circle(1.0);
    let mut point = TracePoint::new(Point::ORIGIN);
    assert_eq!(
        point.snap_to_nearest_edge(&shape),
        SnapState::SnappedToAngle { angle: 0.0 }
    );
    assert_close(point.position().x, 1.0);
}

#[test]
fn test_explicit_snaps_recompute_position() {
    let shape = circle(3.0);
    let mut point = TracePoint::new(Point::ORIGIN);
    point.snap_to_circle_border(&shape, PI / 2.0).unwrap();
    assert_close(point.position().y, 3.0);

    let shape = polygon(3, 1.0);
    point.snap_to_polygon_edge(&shape, 0, 0.5).unwrap();
    let midpoint = shape.as_polygon().unwrap().edge(0).midpoint();
    assert_eq!(point.position(), midpoint);
}

#[test]
fn test_wrong_shape_is_unsupported() {
    let mut point = TracePoint::new(Point::new(1.0, 1.0));
    assert!(matches!(
        point.snap_to_polygon_edge(&circle(1.0), 0, 0.0),
        Err(GeometryError::UnsupportedShape { .. })
    ));
    assert!(matches!(
        point.snap_to_circle_border(&polygon(5, 1.0), 0.0),
        Err(GeometryError::UnsupportedShape { .. })
    ));
}

#[test]
fn test_nan_parameters_rejected() {
    let mut point = TracePoint::new(Point::ORIGIN);
    assert!(matches!(
        point.snap_to_polygon_edge(&polygon(3, 1.0), 0, f64::NAN),
        Err(GeometryError::InvalidParameter { .. })
    ));
    assert!(matches!(
        point.snap_to_circle_border(&circle(1.0), f64::NAN),
        Err(GeometryError::InvalidParameter { .. })
    ));
}

#[test]
fn test_relative_position() {
    let point = TracePoint::new(Point::new(3.0, 4.0));
    assert_eq!(point.relative_to(&Point::new(1.0, 1.0)), Point::new(2.0, 3.0));
    assert_close(point.distance_to(&Point::ORIGIN), 5.0);
}
