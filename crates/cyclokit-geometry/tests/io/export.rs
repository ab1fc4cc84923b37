use std::fs;

use cyclokit_core::Point;
use cyclokit_geometry::export::{self, ExportOptions};
use cyclokit_geometry::{CurveGenerator, CurveRecord};
use tempfile::TempDir;

use crate::{circle, polygon};

#[test]
fn test_write_csv_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("square.csv");
    let shape = polygon(4, 1.0);
    let curve = CurveGenerator::default()
        .generate(&shape, shape.top_point(), 1.0)
        .unwrap();

    let file = fs::File::create(&path).unwrap();
    export::write_csv(&curve, &ExportOptions { precision: 3 }, file).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("X,Y"));
    assert_eq!(content.lines().count(), curve.len() + 1);
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 2);
        for field in fields {
            let decimals = field.split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 3);
            field.parse::<f64>().unwrap();
        }
    }
}

#[test]
fn test_record_round_trips_through_json() {
    let curve = CurveGenerator::default()
        .generate(&circle(1.0), Point::new(0.0, 1.0), 0.5)
        .unwrap();
    let json = export::to_json_pretty(&curve).unwrap();
    let record: CurveRecord = serde_json::from_str(&json).unwrap();

    assert_eq!(record.curve_type, curve.kind());
    assert_eq!(record.point_count, curve.len());
    assert_eq!(record.points.len(), curve.len());
    assert_eq!(record.metadata.get("cycles"), Some(&0.5));
}

#[test]
fn test_cyclogon_record_metadata_keys() {
    let shape = polygon(6, 1.0);
    let curve = CurveGenerator::default()
        .generate(&shape, shape.top_point(), 1.0)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&export::to_json(&curve).unwrap()).unwrap();

    assert_eq!(value["type"], "cyclogon");
    for key in [
        "cycles",
        "sides",
        "radius",
        "total_distance",
        "rolled_sides",
        "side_length",
        "exterior_angle",
        "adjustment_rotation",
        "distance",
        "initial_angle",
    ] {
        assert!(value["metadata"][key].is_number(), "missing {key}");
    }
}

#[test]
fn test_animation_record_has_rolling_state() {
    let shape = polygon(3, 1.0);
    let curve = CurveGenerator::default()
        .generate(&shape, shape.top_point(), 1.0)
        .unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&export::to_animation_json(&curve).unwrap()).unwrap();

    let samples = value["samples"].as_array().unwrap();
    assert_eq!(samples.len(), curve.len());
    assert_eq!(samples[0]["side_index"], 0);
    assert_eq!(samples.last().unwrap()["side_index"], 2);
    assert!(samples[10]["pivot"]["x"].is_number());
    assert!(samples[10]["rotation"].as_f64().unwrap() > 0.0);
}
