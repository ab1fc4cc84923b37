use std::f64::consts::{PI, TAU};

use cyclokit_core::{GeometryError, Point};
use cyclokit_geometry::{
    cycloid_point, CurveGenerator, CurveKind, Resolution, SampleMeta,
};

use crate::{assert_close, circle, polygon, TOLERANCE};

#[test]
fn test_unit_circle_rim_point() {
    let generator = CurveGenerator::default();
    let curve = generator
        .generate(&circle(1.0), Point::new(0.0, 1.0), 1.0)
        .unwrap();

    assert_eq!(curve.kind(), CurveKind::Cycloid);
    let first = curve.first().unwrap();
    assert_close(first.x, 0.0);
    assert_close(first.y, 2.0);

    // Half a turn later the rim point touches the ground.
    let half = cycloid_point(1.0, 1.0, PI / 2.0, PI);
    assert_close(half.x, PI);
    assert_close(half.y, 0.0);

    let last = curve.last().unwrap();
    assert_close(last.x, TAU);
    assert_close(last.y, 2.0);
    assert_close(curve.metadata_value("total_distance").unwrap(), TAU);
}

#[test]
fn test_samples_follow_closed_form() {
    let generator = CurveGenerator::default();
    let trace = Point::new(0.7, -1.2);
    let curve = generator.generate(&circle(2.0), trace, 2.5).unwrap();
    let distance = curve.metadata_value("distance").unwrap();
    let initial = curve.metadata_value("initial_angle").unwrap();
    assert_close(distance, trace.length());

    for sample in curve.as_slice() {
        let SampleMeta::Cycloid { theta, center } = sample.meta else {
            panic!("cycloid sample expected");
        };
        let expected = cycloid_point(2.0, distance, initial, theta);
        assert!((sample.x - expected.x).abs() < TOLERANCE);
        assert!((sample.y - expected.y).abs() < TOLERANCE);
        assert_close(center.y, 2.0);
        assert_close(center.x, 2.0 * theta);
    }
}

#[test]
fn test_sample_count_from_resolution() {
    let generator = CurveGenerator::new(Resolution {
        points_per_radian: 10.0,
        ..Resolution::default()
    });
    let curve = generator
        .generate(&circle(1.0), Point::new(0.0, 1.0), 1.0)
        .unwrap();
    // ceil(2π · 10) steps plus the starting sample.
    assert_eq!(curve.len(), 64);
}

#[test]
fn test_tiny_cycle_count_still_samples() {
    let curve = CurveGenerator::default()
        .generate(&circle(1.0), Point::new(0.0, 1.0), 1e-6)
        .unwrap();
    assert_eq!(curve.len(), 2);
}

#[test]
fn test_center_trace_point_is_a_line() {
    let curve = CurveGenerator::default()
        .generate(&circle(1.5), Point::ORIGIN, 1.0)
        .unwrap();
    for sample in curve.as_slice() {
        assert_close(sample.y, 1.5);
    }
}

#[test]
fn test_theta_strictly_increasing() {
    let curve = CurveGenerator::default()
        .generate(&circle(1.0), Point::new(0.5, 0.0), 3.0)
        .unwrap();
    let thetas: Vec<f64> = curve.as_slice().iter().map(|p| p.rotation()).collect();
    assert!(thetas.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_cycloid_entry_point_rejects_polygon() {
    let result = CurveGenerator::default().generate_cycloid(&polygon(4, 1.0), Point::ORIGIN, 1.0);
    assert!(matches!(
        result,
        Err(GeometryError::UnsupportedShape { .. })
    ));
}

#[test]
fn test_invalid_cycles_rejected() {
    let generator = CurveGenerator::default();
    for cycles in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = generator.generate(&circle(1.0), Point::new(0.0, 1.0), cycles);
        assert!(
            matches!(result, Err(GeometryError::InvalidParameter { .. })),
            "cycles = {cycles} should be rejected"
        );
    }
}

#[test]
fn test_non_finite_trace_point_rejected() {
    let result =
        CurveGenerator::default().generate(&circle(1.0), Point::new(f64::NAN, 0.0), 1.0);
    assert!(matches!(
        result,
        Err(GeometryError::InvalidParameter { .. })
    ));
}

#[test]
fn test_sample_budget_enforced() {
    let result =
        CurveGenerator::default().generate(&circle(1.0), Point::new(0.0, 1.0), 1e9);
    assert!(matches!(
        result,
        Err(GeometryError::InvalidParameter { .. })
    ));
}
