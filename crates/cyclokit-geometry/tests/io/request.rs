use std::fs;

use cyclokit_core::{Error, GeometryError, Point};
use cyclokit_geometry::{CurveKind, GenerationRequest, Resolution, Shape, ShapeDescriptor};
use tempfile::TempDir;

use crate::assert_close;

#[test]
fn test_request_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("request.json");
    let request = GenerationRequest::new(
        ShapeDescriptor::Polygon {
            sides: 5,
            radius: 1.5,
            rotation_offset: 0.25,
        },
        2.0,
    )
    .with_trace_point(Point::new(0.1, 0.2))
    .with_resolution(Resolution {
        points_per_side: 12,
        ..Resolution::default()
    });

    fs::write(&path, request.to_json().unwrap()).unwrap();
    let loaded = GenerationRequest::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, request);

    let curve = loaded.execute().unwrap();
    assert_eq!(curve.kind(), CurveKind::Cyclogon);
    assert_eq!(curve.len(), 10 * 12 + 1);
}

#[test]
fn test_minimal_circle_request_uses_defaults() {
    let request =
        GenerationRequest::from_json(r#"{ "shape": { "kind": "circle", "radius": 2.0 } }"#)
            .unwrap();
    assert_eq!(request.cycles, 1.0);
    assert_eq!(request.trace_point, None);
    assert_eq!(request.resolution, Resolution::default());

    let curve = request.execute().unwrap();
    let first = curve.first().unwrap();
    assert_close(first.x, 0.0);
    assert_close(first.y, 4.0);
}

#[test]
fn test_descriptor_from_shape() {
    let shape = ShapeDescriptor::Polygon {
        sides: 7,
        radius: 3.0,
        rotation_offset: 0.0,
    }
    .build()
    .unwrap();
    assert!(matches!(shape, Shape::Polygon(_)));
    assert_eq!(
        ShapeDescriptor::from(&shape),
        ShapeDescriptor::Polygon {
            sides: 7,
            radius: 3.0,
            rotation_offset: 0.0,
        }
    );
}

#[test]
fn test_invalid_requests() {
    let degenerate = GenerationRequest::new(
        ShapeDescriptor::Polygon {
            sides: 2,
            radius: 1.0,
            rotation_offset: 0.0,
        },
        1.0,
    );
    assert!(matches!(
        degenerate.execute(),
        Err(GeometryError::InvalidGeometry { .. })
    ));

    let no_cycles = GenerationRequest::new(ShapeDescriptor::Circle { radius: 1.0 }, 0.0);
    assert!(matches!(
        no_cycles.execute(),
        Err(GeometryError::InvalidParameter { .. })
    ));

    let malformed = GenerationRequest::from_json(r#"{ "shape": { "kind": "ellipse" } }"#);
    assert!(matches!(malformed, Err(Error::Json(_))));
}
