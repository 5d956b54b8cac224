//! Arm geometry: the elbow angle and the raised-elbow test.
//!
//! All functions are pure. Coordinates are normalized image coordinates with
//! `y` growing downward.

use crate::constants::{EPSILON, MAX_ANGLE, MIN_ANGLE};
use serde::{Deserialize, Serialize};

/// A 2D point in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(&self, other: &Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Interior angle at the elbow formed by shoulder, elbow and wrist, in degrees.
///
/// Uses the dot product of the elbow→shoulder and elbow→wrist vectors:
/// cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns `None` when either limb vector has zero length or the input is not
/// finite. A returned angle is always within [0, 180].
#[must_use]
pub fn compute_angle(shoulder: Point2, elbow: Point2, wrist: Point2) -> Option<f64> {
    // Upper arm and forearm, both anchored at the elbow
    let v1 = (shoulder.x - elbow.x, shoulder.y - elbow.y);
    let v2 = (wrist.x - elbow.x, wrist.y - elbow.y);

    let mag1 = v1.0.hypot(v1.1);
    let mag2 = v2.0.hypot(v2.1);

    if !mag1.is_finite() || !mag2.is_finite() || mag1 < EPSILON || mag2 < EPSILON {
        return None;
    }

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let cos_angle = dot / (mag1 * mag2);
    if !cos_angle.is_finite() {
        return None;
    }

    Some(cos_angle.clamp(-1.0, 1.0).acos().to_degrees().clamp(MIN_ANGLE, MAX_ANGLE))
}

/// Whether the elbow sits above the shoulder in the image.
#[must_use]
pub fn is_elbow_raised(shoulder: Point2, elbow: Point2) -> bool {
    elbow.y < shoulder.y
}
