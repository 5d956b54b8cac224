//! Landmark frame types supplied by the external pose-estimation model.

use crate::geometry::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_visibility() -> f64 {
    1.0
}

/// A single tracked joint position in normalized image coordinates.
///
/// `y` grows downward, so a smaller `y` is higher in the image. `z` is
/// carried for completeness and ignored by the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    /// Detection confidence reported by the model (0.0-1.0)
    #[serde(default = "default_visibility")]
    pub visibility: f64,
}

impl Landmark {
    /// Create a fully visible landmark
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility: 1.0,
        }
    }

    /// Create a landmark with an explicit visibility score
    #[must_use]
    pub fn with_visibility(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility,
        }
    }

    /// 2D position, dropping `z`
    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Whether the landmark is finite and confidently detected
    #[must_use]
    pub fn is_usable(&self, min_visibility: f64) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.visibility >= min_visibility
    }
}

/// Right-arm joints the analysis needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Shoulder,
    Elbow,
    Wrist,
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
        };
        f.write_str(name)
    }
}

/// One frame of right-arm landmarks.
///
/// A joint the model failed to detect is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmLandmarks {
    #[serde(default)]
    pub shoulder: Option<Landmark>,
    #[serde(default)]
    pub elbow: Option<Landmark>,
    #[serde(default)]
    pub wrist: Option<Landmark>,
}

impl ArmLandmarks {
    /// Frame with all three joints detected
    #[must_use]
    pub fn new(shoulder: Landmark, elbow: Landmark, wrist: Landmark) -> Self {
        Self {
            shoulder: Some(shoulder),
            elbow: Some(elbow),
            wrist: Some(wrist),
        }
    }

    /// Frame built from `(x, y)` pairs, all fully visible
    #[must_use]
    pub fn from_points(shoulder: (f64, f64), elbow: (f64, f64), wrist: (f64, f64)) -> Self {
        Self::new(
            Landmark::new(shoulder.0, shoulder.1),
            Landmark::new(elbow.0, elbow.1),
            Landmark::new(wrist.0, wrist.1),
        )
    }

    /// Frame in which the model detected nothing
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Landmark for `joint` if it is present and usable
    #[must_use]
    pub fn usable(&self, joint: Joint, min_visibility: f64) -> Option<Landmark> {
        let landmark = match joint {
            Joint::Shoulder => self.shoulder,
            Joint::Elbow => self.elbow,
            Joint::Wrist => self.wrist,
        };
        landmark.filter(|lm| lm.is_usable(min_visibility))
    }
}
