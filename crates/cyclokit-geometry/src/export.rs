//! Curve serializers.
//!
//! Two layouts are produced for downstream collaborators:
//! - a row-oriented numeric table (`X,Y` header, one row per sample)
//! - a structured record `{type, pointCount, points, metadata, boundingBox, arcLength}`
//!
//! The animation record additionally keeps each sample's rolling state.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use cyclokit_core::{Point, Result};

use crate::curve::{BoundingBox, Curve, CurveKind, SampleMeta};

/// Largest number of decimal digits written by [`to_csv`].
pub const MAX_PRECISION: usize = 17;

/// Output formatting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Digits after the decimal point in the numeric table.
    pub precision: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

/// Structured record of a curve's coordinates and summary values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveRecord {
    #[serde(rename = "type")]
    pub curve_type: CurveKind,
    pub point_count: usize,
    pub points: Vec<Point>,
    pub metadata: BTreeMap<String, f64>,
    pub bounding_box: Option<BoundingBox>,
    pub arc_length: f64,
}

/// One sample of an animation record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationSample {
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub meta: SampleMeta,
}

/// Record variant that keeps per-sample rolling metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationRecord {
    #[serde(rename = "type")]
    pub curve_type: CurveKind,
    pub point_count: usize,
    pub samples: Vec<AnimationSample>,
    pub metadata: BTreeMap<String, f64>,
}

/// Renders the `X,Y` numeric table.
///
/// `precision` above [`MAX_PRECISION`] is clamped.
pub fn to_csv(curve: &Curve, options: &ExportOptions) -> String {
    let precision = if options.precision > MAX_PRECISION {
        warn!(
            "CSV precision {} clamped to {}",
            options.precision, MAX_PRECISION
        );
        MAX_PRECISION
    } else {
        options.precision
    };
    let row_width = precision.saturating_mul(2).saturating_add(8);
    let mut out = String::with_capacity(curve.len().saturating_mul(row_width).saturating_add(4));
    out.push_str("X,Y\n");
    for p in curve.as_slice() {
        out.push_str(&format!("{:.*},{:.*}\n", precision, p.x, precision, p.y));
    }
    out
}

/// Streams the numeric table into `writer`.
pub fn write_csv<W: Write>(curve: &Curve, options: &ExportOptions, mut writer: W) -> io::Result<()> {
    writer.write_all(to_csv(curve, options).as_bytes())?;
    writer.flush()
}

pub fn to_record(curve: &Curve) -> CurveRecord {
    CurveRecord {
        curve_type: curve.kind(),
        point_count: curve.len(),
        points: curve.coordinates(),
        metadata: curve.metadata().clone(),
        bounding_box: curve.bounding_box(),
        arc_length: curve.arc_length(),
    }
}

pub fn to_animation_record(curve: &Curve) -> AnimationRecord {
    AnimationRecord {
        curve_type: curve.kind(),
        point_count: curve.len(),
        samples: curve
            .as_slice()
            .iter()
            .map(|p| AnimationSample {
                x: p.x,
                y: p.y,
                meta: p.meta,
            })
            .collect(),
        metadata: curve.metadata().clone(),
    }
}

pub fn to_json(curve: &Curve) -> Result<String> {
    Ok(serde_json::to_string(&to_record(curve))?)
}

pub fn to_json_pretty(curve: &Curve) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_record(curve))?)
}

pub fn to_animation_json(curve: &Curve) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_animation_record(curve))?)
}
