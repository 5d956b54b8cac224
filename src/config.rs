//! Configuration management for the posture analyzer

use crate::classifier::ClassifierSettings;
use crate::constants::{
    DEFAULT_ANGLE_TOLERANCE, DEFAULT_MIN_VISIBILITY, DEFAULT_REFERENCE_ANGLE, DEFAULT_SHARP_BEND_ANGLE,
    DEFAULT_SHOULDER_DECAY, DEFAULT_SHOULDER_TOLERANCE, DEFAULT_SHOULDER_WARMUP_FRAMES, DEFAULT_SMOOTHING_WINDOW,
    DEFAULT_TRAJECTORY_CAPACITY, MAX_ANGLE, MIN_ANGLE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Analyzer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Majority-vote smoothing
    pub smoothing: SmoothingConfig,

    /// Elbow angle thresholds
    pub angle: AngleConfig,

    /// Shoulder drift baseline
    pub shoulder: ShoulderConfig,

    /// Wrist trajectory buffer
    pub trajectory: TrajectoryConfig,

    /// Landmark acceptance
    pub landmarks: LandmarkConfig,
}

/// Smoothing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Number of recent frames in the majority vote
    pub window_size: usize,
}

/// Elbow angle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleConfig {
    /// Reference angle before any calibration, in degrees
    pub reference_degrees: f64,

    /// Allowed deviation from the reference, in degrees
    pub tolerance_degrees: f64,

    /// Angles below this count as a raised, sharply bent elbow
    pub sharp_bend_degrees: f64,
}

/// Shoulder baseline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoulderConfig {
    /// Lift above the baseline (normalized units) that counts as elevated
    pub tolerance: f64,

    /// Valid frames averaged before the baseline is established
    pub warmup_frames: usize,

    /// Weight of each new frame in the running baseline (0.0-1.0]
    pub decay: f64,
}

/// Trajectory configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Number of wrist positions kept
    pub capacity: usize,
}

/// Landmark acceptance configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkConfig {
    /// Minimum visibility for a joint to count as detected (0.0-1.0)
    pub min_visibility: f64,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            reference_degrees: DEFAULT_REFERENCE_ANGLE,
            tolerance_degrees: DEFAULT_ANGLE_TOLERANCE,
            sharp_bend_degrees: DEFAULT_SHARP_BEND_ANGLE,
        }
    }
}

impl Default for ShoulderConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SHOULDER_TOLERANCE,
            warmup_frames: DEFAULT_SHOULDER_WARMUP_FRAMES,
            decay: DEFAULT_SHOULDER_DECAY,
        }
    }
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TRAJECTORY_CAPACITY,
        }
    }
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            min_visibility: DEFAULT_MIN_VISIBILITY,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Classifier thresholds derived from this configuration
    #[must_use]
    pub fn classifier_settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            angle_tolerance: self.angle.tolerance_degrees,
            shoulder_tolerance: self.shoulder.tolerance,
            sharp_bend_angle: self.angle.sharp_bend_degrees,
            min_visibility: self.landmarks.min_visibility,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.smoothing.window_size == 0 {
            return Err(Error::ConfigError(
                "Smoothing window size must be greater than 0".to_string(),
            ));
        }

        let angle_range = MIN_ANGLE..=MAX_ANGLE;
        if !angle_range.contains(&self.angle.reference_degrees) {
            return Err(Error::ConfigError(
                "Reference angle must be between 0 and 180 degrees".to_string(),
            ));
        }
        if !angle_range.contains(&self.angle.tolerance_degrees) {
            return Err(Error::ConfigError(
                "Angle tolerance must be between 0 and 180 degrees".to_string(),
            ));
        }
        if !angle_range.contains(&self.angle.sharp_bend_degrees) {
            return Err(Error::ConfigError(
                "Sharp bend angle must be between 0 and 180 degrees".to_string(),
            ));
        }

        if !(self.shoulder.tolerance.is_finite() && self.shoulder.tolerance >= 0.0) {
            return Err(Error::ConfigError(
                "Shoulder tolerance must be non-negative".to_string(),
            ));
        }
        if self.shoulder.warmup_frames == 0 {
            return Err(Error::ConfigError(
                "Shoulder warm-up frames must be greater than 0".to_string(),
            ));
        }
        if !(self.shoulder.decay > 0.0 && self.shoulder.decay <= 1.0) {
            return Err(Error::ConfigError(
                "Shoulder decay must be in (0, 1]".to_string(),
            ));
        }

        if self.trajectory.capacity == 0 {
            return Err(Error::ConfigError(
                "Trajectory capacity must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.landmarks.min_visibility) {
            return Err(Error::ConfigError(
                "Minimum visibility must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Bowing Posture Analysis Configuration

# Majority-vote smoothing over recent frames
smoothing:
  window_size: 5

# Elbow angle thresholds (degrees)
angle:
  reference_degrees: 150.0
  tolerance_degrees: 15.0
  sharp_bend_degrees: 90.0

# Shoulder drift baseline (normalized image units)
shoulder:
  tolerance: 0.03
  warmup_frames: 10
  decay: 0.01

# Wrist trajectory buffer
trajectory:
  capacity: 50

# Landmark acceptance
landmarks:
  min_visibility: 0.5
"#;
