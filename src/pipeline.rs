//! Frame-by-frame posture analysis.
//!
//! [`PostureAnalyzer`] owns every piece of session state. Each call to
//! [`PostureAnalyzer::process`] runs one frame to completion, and calibration
//! needs `&mut self`, so it can only land between frames.

use crate::baseline::BaselineTracker;
use crate::classifier::{PostureClassifier, RawVerdict};
use crate::config::Config;
use crate::evaluation::{AccuracyTracker, Approach};
use crate::feedback::{decide_hint, Hint};
use crate::geometry::Point2;
use crate::landmarks::{ArmLandmarks, Joint};
use crate::smoothing::{SmoothedVerdict, TemporalSmoother};
use crate::trajectory::WristTrajectoryTracker;
use crate::{Error, Result};
use log::{debug, info};
use serde::Serialize;

/// Everything produced for one processed frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame_index: u64,
    pub raw_verdict: RawVerdict,
    /// Ground-truth elbow-above-shoulder verdict
    pub baseline_raised: Option<bool>,
    pub smoothed_verdict: SmoothedVerdict,
    pub hint: Hint,
    pub angle_degrees: Option<f64>,
    pub shoulder_lift: Option<f64>,
    pub trajectory_snapshot: Vec<Point2>,
}

/// Session-scoped analysis pipeline
#[derive(Debug, Clone)]
pub struct PostureAnalyzer {
    classifier: PostureClassifier,
    baseline: BaselineTracker,
    smoother: TemporalSmoother,
    trajectory: WristTrajectoryTracker,
    accuracy: AccuracyTracker,
    frame_index: u64,
    last_angle: Option<f64>,
    last_hint: Option<Hint>,
}

impl PostureAnalyzer {
    /// Build an analyzer from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            classifier: PostureClassifier::new(config.classifier_settings()),
            baseline: BaselineTracker::new(
                config.angle.reference_degrees,
                config.shoulder.warmup_frames,
                config.shoulder.decay,
            ),
            smoother: TemporalSmoother::try_new(config.smoothing.window_size)?,
            trajectory: WristTrajectoryTracker::new(config.trajectory.capacity),
            accuracy: AccuracyTracker::new(),
            frame_index: 0,
            last_angle: None,
            last_hint: None,
        })
    }

    /// Run one frame through classification, smoothing and hint selection
    pub fn process(&mut self, frame: &ArmLandmarks) -> FrameReport {
        let frame_index = self.frame_index;
        self.frame_index += 1;

        let classification = self.classifier.classify(frame, &mut self.baseline);
        let raw_verdict = classification.verdict;
        self.last_angle = raw_verdict.angle_degrees();

        if let Some(wrist) = frame.usable(Joint::Wrist, self.classifier.settings().min_visibility) {
            self.trajectory.push(wrist.point());
        }

        self.smoother.push(raw_verdict);
        let smoothed_verdict = self.smoother.smoothed();
        let hint = decide_hint(&smoothed_verdict);

        if let Some(ground_truth) = classification.baseline_raised {
            let mut predictions = vec![
                (Approach::Baseline, ground_truth),
                (Approach::Smoothed, smoothed_verdict.elbow_raised),
            ];
            if let Some(facts) = raw_verdict.facts() {
                predictions.push((Approach::Refined, facts.elbow_raised));
            }
            self.accuracy.record(ground_truth, &predictions);
        }

        if self.last_hint != Some(hint) {
            debug!("Frame {frame_index}: hint changed to {hint:?}");
            self.last_hint = Some(hint);
        }

        FrameReport {
            frame_index,
            raw_verdict,
            baseline_raised: classification.baseline_raised,
            smoothed_verdict,
            hint,
            angle_degrees: self.last_angle,
            shoulder_lift: classification.shoulder_lift,
            trajectory_snapshot: self.trajectory.snapshot(),
        }
    }

    /// Adopt the most recent frame's elbow angle as the reference
    ///
    /// # Errors
    ///
    /// Returns [`Error::Calibration`] if no frame has been processed or the
    /// last frame had no measurable angle.
    pub fn set_reference(&mut self) -> Result<f64> {
        let angle = self.last_angle.ok_or_else(|| {
            Error::Calibration("Last frame had no measurable elbow angle".to_string())
        })?;
        self.baseline.set_reference(angle)?;
        Ok(angle)
    }

    /// Start a new session with default references and empty buffers
    pub fn reset(&mut self) {
        info!("Resetting posture analysis session");
        self.baseline.reset();
        self.smoother.reset();
        self.trajectory.reset();
        self.accuracy.reset();
        self.frame_index = 0;
        self.last_angle = None;
        self.last_hint = None;
    }

    #[must_use]
    pub fn baseline(&self) -> &BaselineTracker {
        &self.baseline
    }

    #[must_use]
    pub fn trajectory(&self) -> &WristTrajectoryTracker {
        &self.trajectory
    }

    #[must_use]
    pub fn accuracy(&self) -> &AccuracyTracker {
        &self.accuracy
    }

    #[must_use]
    pub fn frames_processed(&self) -> u64 {
        self.frame_index
    }
}
