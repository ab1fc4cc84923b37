//! Error handling for CycloKit
//!
//! Provides the error types shared by every layer of the workspace:
//! - Geometry errors (shape construction, shape-kind mismatches, parameters)
//! - I/O and serialization errors raised at export/import boundaries
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents failures of the geometric model and of curve generation.
/// Every variant is raised synchronously, before any curve sample is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A shape was constructed with impossible dimensions
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry {
        /// Why the geometry was rejected.
        reason: String,
    },

    /// An operation was applied to a shape kind it does not handle
    #[error("Unsupported shape for {operation}: {shape}")]
    UnsupportedShape {
        /// The operation that was attempted.
        operation: String,
        /// The shape kind that was supplied.
        shape: String,
    },

    /// A generation parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// The reason the value is invalid.
        reason: String,
    },
}

impl GeometryError {
    /// Create an [`GeometryError::InvalidGeometry`] error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create an [`GeometryError::UnsupportedShape`] error
    pub fn unsupported_shape(operation: impl Into<String>, shape: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            operation: operation.into(),
            shape: shape.into(),
        }
    }

    /// Create an [`GeometryError::InvalidParameter`] error
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Main error type for CycloKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
