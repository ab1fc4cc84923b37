use std::sync::Arc;

use proptest::prelude::*;

use cyclokit_core::Point;
use cyclokit_geometry::{
    CurveGenerator, RegularPolygon, Resolution, SampleMeta, Shape, TracePoint,
};

fn small_generator() -> CurveGenerator {
    CurveGenerator::new(Resolution {
        points_per_side: 8,
        points_per_radian: 4.0,
    })
}

proptest! {
    #[test]
    fn whole_cycles_travel_total_distance(
        sides in 3usize..=12,
        cycles in 1u32..=3,
        radius in 0.1f64..10.0,
        offset in -3.0f64..3.0,
        tx in -1.0f64..1.0,
        ty in -1.0f64..1.0,
    ) {
        let shape = Arc::new(Shape::Polygon(
            RegularPolygon::with_rotation(sides, radius, offset).unwrap(),
        ));
        let trace = Point::new(tx * radius, ty * radius);
        let curve = small_generator().generate(&shape, trace, cycles as f64).unwrap();

        let first = curve.first().unwrap();
        let last = curve.last().unwrap();
        let total = curve.metadata_value("total_distance").unwrap();
        let side = shape.as_polygon().unwrap().side_length();
        prop_assert!((total - cycles as f64 * sides as f64 * side).abs() < 1e-9 * total.max(1.0));
        prop_assert!((last.x - first.x - total).abs() < 1e-6 * total.max(1.0));
        prop_assert!((last.y - first.y).abs() < 1e-6 * radius);
    }

    #[test]
    fn polygon_center_is_radius_from_pivot(
        sides in 3usize..=9,
        cycles in 0.05f64..3.0,
        radius in 0.5f64..5.0,
    ) {
        let shape = Arc::new(Shape::Polygon(RegularPolygon::new(sides, radius).unwrap()));
        let curve = small_generator().generate(&shape, shape.top_point(), cycles).unwrap();
        for sample in curve.as_slice() {
            if let SampleMeta::Cyclogon { pivot, center, .. } = sample.meta {
                prop_assert!((center.distance_to(&pivot) - radius).abs() < 1e-9 * radius.max(1.0));
            }
        }
    }

    #[test]
    fn circle_distance_from_center_is_constant(
        radius in 0.1f64..5.0,
        angle in -3.0f64..3.0,
        fraction in 0.0f64..2.0,
        cycles in 0.1f64..2.5,
    ) {
        let shape = Arc::new(Shape::Circle(cyclokit_geometry::Circle::new(radius).unwrap()));
        let trace = Point::from_polar(radius * fraction, angle);
        let curve = small_generator().generate(&shape, trace, cycles).unwrap();
        for sample in curve.as_slice() {
            let d = sample.position().distance_to(&sample.center());
            prop_assert!((d - radius * fraction).abs() < 1e-9 * radius.max(1.0));
        }
    }

    #[test]
    fn snapped_point_lies_on_polygon_border(
        sides in 3usize..=10,
        x in -3.0f64..3.0,
        y in -3.0f64..3.0,
    ) {
        let shape = Shape::Polygon(RegularPolygon::new(sides, 1.0).unwrap());
        let mut point = TracePoint::new(Point::new(x, y));
        point.snap_to_nearest_edge(&shape);
        let polygon = shape.as_polygon().unwrap();
        let border = polygon.find_closest_edge(&point.position());
        prop_assert!(border.distance < 1e-9);
    }
}
