//! # Pose Records
//!
//! One deck record per sample point: two coordinates followed by the
//! solver's fixed placeholder fields.

use config::constants::RECORD_PADDING;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single deck record.
///
/// Rendered as `<x> <y> 0 0 0 1;`. The four trailing fields are an
/// opaque constant suffix defined by the solver's record shape; raygen
/// emits them verbatim and never interprets them.
///
/// ## Formatting policy
///
/// Coordinates use Rust's shortest round-trippable `f64` display, which
/// never falls back to scientific notation, so the solver's parser sees
/// plain decimals at full precision. Negative zero is normalized to `0`
/// before rendering so a zero coordinate always produces the same bytes.
///
/// # Example
///
/// ```rust
/// use raygen_export::PoseRecord;
///
/// let record = PoseRecord::from_xy(15.0, 0.0);
/// assert_eq!(record.to_string(), "15 0 0 0 0 1;");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseRecord {
    /// Sample position on the bench plane.
    pub position: DVec2,
}

impl PoseRecord {
    /// Creates a record at the given position.
    pub fn new(position: DVec2) -> Self {
        Self { position }
    }

    /// Creates a record from raw coordinates.
    pub fn from_xy(x: f64, y: f64) -> Self {
        Self::new(DVec2::new(x, y))
    }
}

impl fmt::Display for PoseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {};",
            canonical(self.position.x),
            canonical(self.position.y),
            RECORD_PADDING
        )
    }
}

/// Collapses negative zero so both zeroes render as `0`.
#[inline]
fn canonical(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
