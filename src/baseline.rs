//! Reference values the classifier compares each frame against.
//!
//! The reference elbow angle starts at a default and only changes through an
//! explicit calibration. The shoulder baseline is learned: the first
//! `warmup_frames` valid samples are averaged, after which the baseline
//! follows an exponential moving average so slow drift is tracked while
//! single-frame jitter barely moves it.

use crate::constants::{
    DEFAULT_REFERENCE_ANGLE, DEFAULT_SHOULDER_DECAY, DEFAULT_SHOULDER_WARMUP_FRAMES, MAX_ANGLE,
    MIN_ANGLE,
};
use crate::{Error, Result};
use log::{debug, info};

/// Per-session reference angle and shoulder height
#[derive(Debug, Clone)]
pub struct BaselineTracker {
    default_angle: f64,
    reference_angle: f64,
    warmup_frames: usize,
    decay: f64,
    warmup_sum: f64,
    warmup_count: usize,
    reference_shoulder_y: Option<f64>,
}

impl BaselineTracker {
    /// Create a tracker.
    ///
    /// # Panics
    ///
    /// Panics if `reference_angle` is outside [0, 180], `warmup_frames` is 0,
    /// or `decay` is outside (0, 1].
    #[must_use]
    pub fn new(reference_angle: f64, warmup_frames: usize, decay: f64) -> Self {
        assert!(
            (MIN_ANGLE..=MAX_ANGLE).contains(&reference_angle),
            "Reference angle must be within [0, 180]"
        );
        assert!(warmup_frames > 0, "Warm-up frames must be greater than 0");
        assert!(decay > 0.0 && decay <= 1.0, "Decay must be in (0, 1]");
        Self {
            default_angle: reference_angle,
            reference_angle,
            warmup_frames,
            decay,
            warmup_sum: 0.0,
            warmup_count: 0,
            reference_shoulder_y: None,
        }
    }

    /// Replace the reference elbow angle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `angle` is not a finite value in [0, 180].
    pub fn set_reference(&mut self, angle: f64) -> Result<()> {
        if !angle.is_finite() || !(MIN_ANGLE..=MAX_ANGLE).contains(&angle) {
            return Err(Error::InvalidInput(format!(
                "Reference angle must be within [0, 180], got {angle}"
            )));
        }
        info!("Reference elbow angle set to {angle:.1}° (was {:.1}°)", self.reference_angle);
        self.reference_angle = angle;
        Ok(())
    }

    /// Fold one shoulder height sample into the baseline
    pub fn update_shoulder_baseline(&mut self, shoulder_y: f64) {
        if !shoulder_y.is_finite() {
            return;
        }

        match self.reference_shoulder_y {
            Some(reference) => {
                self.reference_shoulder_y = Some(self.decay * shoulder_y + (1.0 - self.decay) * reference);
            }
            None => {
                self.warmup_sum += shoulder_y;
                self.warmup_count += 1;
                if self.warmup_count >= self.warmup_frames {
                    #[allow(clippy::cast_precision_loss)]
                    let mean = self.warmup_sum / self.warmup_count as f64;
                    info!("Shoulder baseline established at y={mean:.4} after {} frames", self.warmup_count);
                    self.reference_shoulder_y = Some(mean);
                }
            }
        }
    }

    /// Whether `angle` differs from the reference by more than `tolerance` degrees
    #[must_use]
    pub fn is_angle_deviated(&self, angle: f64, tolerance: f64) -> bool {
        (angle - self.reference_angle).abs() > tolerance
    }

    /// Upward shoulder movement relative to the baseline (positive = raised).
    ///
    /// `None` until the baseline has been established.
    #[must_use]
    pub fn shoulder_lift(&self, shoulder_y: f64) -> Option<f64> {
        self.reference_shoulder_y.map(|reference| reference - shoulder_y)
    }

    /// Whether the shoulder has risen more than `tolerance` above its baseline.
    ///
    /// `None` means insufficient data: the baseline is still warming up or the
    /// sample is not finite.
    #[must_use]
    pub fn is_shoulder_elevated(&self, shoulder_y: f64, tolerance: f64) -> Option<bool> {
        if !shoulder_y.is_finite() {
            return None;
        }
        let lift = self.shoulder_lift(shoulder_y)?;
        debug!("Shoulder lift {lift:.4} (tolerance {tolerance:.4})");
        Some(lift > tolerance)
    }

    #[must_use]
    pub fn reference_angle(&self) -> f64 {
        self.reference_angle
    }

    #[must_use]
    pub fn reference_shoulder_y(&self) -> Option<f64> {
        self.reference_shoulder_y
    }

    /// Valid shoulder samples still needed before the baseline exists
    #[must_use]
    pub fn warmup_remaining(&self) -> usize {
        if self.reference_shoulder_y.is_some() {
            0
        } else {
            self.warmup_frames - self.warmup_count
        }
    }

    /// Discard the session: default reference angle, no shoulder baseline
    pub fn reset(&mut self) {
        self.reference_angle = self.default_angle;
        self.warmup_sum = 0.0;
        self.warmup_count = 0;
        self.reference_shoulder_y = None;
    }
}

impl Default for BaselineTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_ANGLE, DEFAULT_SHOULDER_WARMUP_FRAMES, DEFAULT_SHOULDER_DECAY)
    }
}
