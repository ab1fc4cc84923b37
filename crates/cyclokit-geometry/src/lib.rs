//! # CycloKit Geometry
//!
//! Geometry of rolling shapes and the roulette curves they trace.
//!
//! ## Core Components
//!
//! - **Model**: [`RegularPolygon`], [`Circle`] and the [`Shape`] enum that
//!   dispatches between them
//! - **Trace point**: the recorded point and its snap state machine
//! - **Generator**: cycloids (circles) and cyclogons (regular polygons)
//! - **Curve**: sampled points with rolling metadata, bounds, arc length
//!   and Douglas–Peucker simplification
//! - **Export / Animation**: numeric table and structured record output,
//!   shape poses for replaying the rolling motion
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use cyclokit_geometry::{CurveGenerator, RegularPolygon, Resolution, Shape};
//!
//! let shape = Arc::new(Shape::Polygon(RegularPolygon::new(4, 1.0)?));
//! let generator = CurveGenerator::new(Resolution::default());
//! let curve = generator.generate(&shape, shape.top_point(), 1.0)?;
//! assert!(curve.arc_length() > 0.0);
//! # Ok::<(), cyclokit_core::GeometryError>(())
//! ```

pub mod animation;
pub mod curve;
pub mod export;
pub mod generator;
pub mod model;
pub mod request;
pub mod trace_point;

pub use animation::{pose_at, pose_at_progress, poses, ShapePose};
pub use curve::{BoundingBox, Curve, CurveKind, CurvePoint, NormalizeTransform, SampleMeta};
pub use export::{AnimationRecord, CurveRecord, ExportOptions};
pub use generator::{cycloid_point, rolled_sides, CurveGenerator, Resolution};
pub use model::{
    BorderProjection, Circle, ClosestEdge, RegularPolygon, RestingEdge, Segment,
    SegmentDistance, Shape, ShapeType, Vertex,
};
pub use request::{GenerationRequest, ShapeDescriptor};
pub use trace_point::{SnapState, TracePoint};
