//! # CycloKit Core
//!
//! Core types and utilities shared by the CycloKit crates.
//! Provides the planar [`Point`] type, angle helpers and tolerances,
//! and the error taxonomy used across the workspace.

pub mod angle;
pub mod error;
pub mod point;

pub use angle::{angle_of, approx_eq, normalize_angle, EPSILON, TAU};
pub use error::{Error, GeometryError, Result};
pub use point::Point;
