//! Per-frame posture classification.
//!
//! Two verdicts come out of every frame: the ground-truth baseline
//! (`elbow.y < shoulder.y` alone) and the refined [`RawVerdict`] that layers
//! the elbow angle and shoulder drift on top of it.

use crate::baseline::BaselineTracker;
use crate::constants::{
    DEFAULT_ANGLE_TOLERANCE, DEFAULT_MIN_VISIBILITY, DEFAULT_SHARP_BEND_ANGLE, DEFAULT_SHOULDER_TOLERANCE,
};
use crate::geometry::{compute_angle, is_elbow_raised};
use crate::landmarks::{ArmLandmarks, Joint};
use log::debug;
use serde::Serialize;

/// Why a frame could not be classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "joint", rename_all = "snake_case")]
pub enum UndeterminedReason {
    /// The model did not (confidently) detect this joint
    MissingLandmark(Joint),
    /// A limb vector had zero length, so the elbow angle is undefined
    DegenerateGeometry,
}

/// Facts established for a classifiable frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PostureFacts {
    /// Elbow above the shoulder, or the arm sharply bent
    pub elbow_raised: bool,
    /// Elbow angle outside the tolerance around the reference
    pub angle_deviated: bool,
    /// `None` while the shoulder baseline is still warming up
    pub shoulder_elevated: Option<bool>,
    pub angle_degrees: f64,
}

/// Refined classification of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum RawVerdict {
    Determined(PostureFacts),
    Undetermined(UndeterminedReason),
}

impl RawVerdict {
    #[must_use]
    pub fn facts(&self) -> Option<&PostureFacts> {
        match self {
            Self::Determined(facts) => Some(facts),
            Self::Undetermined(_) => None,
        }
    }

    #[must_use]
    pub fn is_determined(&self) -> bool {
        matches!(self, Self::Determined(_))
    }

    #[must_use]
    pub fn angle_degrees(&self) -> Option<f64> {
        self.facts().map(|facts| facts.angle_degrees)
    }
}

/// Both verdicts for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub verdict: RawVerdict,
    /// Elbow-above-shoulder alone; `None` if either joint is missing
    pub baseline_raised: Option<bool>,
    /// Current shoulder lift over its baseline, once one exists
    pub shoulder_lift: Option<f64>,
}

/// Thresholds used by [`PostureClassifier`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierSettings {
    pub angle_tolerance: f64,
    pub shoulder_tolerance: f64,
    pub sharp_bend_angle: f64,
    pub min_visibility: f64,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            angle_tolerance: DEFAULT_ANGLE_TOLERANCE,
            shoulder_tolerance: DEFAULT_SHOULDER_TOLERANCE,
            sharp_bend_angle: DEFAULT_SHARP_BEND_ANGLE,
            min_visibility: DEFAULT_MIN_VISIBILITY,
        }
    }
}

/// Fuses geometry and the baseline into a [`Classification`]
#[derive(Debug, Clone, Default)]
pub struct PostureClassifier {
    settings: ClassifierSettings,
}

impl PostureClassifier {
    #[must_use]
    pub fn new(settings: ClassifierSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Classify one frame.
    ///
    /// Elevation is judged against the baseline as it stood before this frame;
    /// the frame's shoulder height is folded in afterwards unless it reads as
    /// elevated.
    pub fn classify(&self, frame: &ArmLandmarks, baseline: &mut BaselineTracker) -> Classification {
        let min_visibility = self.settings.min_visibility;
        let shoulder = frame.usable(Joint::Shoulder, min_visibility);
        let elbow = frame.usable(Joint::Elbow, min_visibility);
        let wrist = frame.usable(Joint::Wrist, min_visibility);

        let baseline_raised = match (shoulder, elbow) {
            (Some(s), Some(e)) => Some(is_elbow_raised(s.point(), e.point())),
            _ => None,
        };

        let undetermined = |reason| Classification {
            verdict: RawVerdict::Undetermined(reason),
            baseline_raised,
            shoulder_lift: None,
        };

        let Some(shoulder) = shoulder else {
            return undetermined(UndeterminedReason::MissingLandmark(Joint::Shoulder));
        };
        let Some(elbow) = elbow else {
            return undetermined(UndeterminedReason::MissingLandmark(Joint::Elbow));
        };
        let Some(wrist) = wrist else {
            return undetermined(UndeterminedReason::MissingLandmark(Joint::Wrist));
        };

        let Some(angle) = compute_angle(shoulder.point(), elbow.point(), wrist.point()) else {
            debug!("Degenerate arm geometry, frame undetermined");
            return undetermined(UndeterminedReason::DegenerateGeometry);
        };

        let elbow_above = is_elbow_raised(shoulder.point(), elbow.point());
        let sharply_bent = angle < self.settings.sharp_bend_angle;
        let angle_deviated = baseline.is_angle_deviated(angle, self.settings.angle_tolerance);
        let shoulder_elevated = baseline.is_shoulder_elevated(shoulder.y, self.settings.shoulder_tolerance);
        let shoulder_lift = baseline.shoulder_lift(shoulder.y);

        // A held shrug must not become the new normal
        if shoulder_elevated == Some(true) {
            debug!("Shoulder elevated, baseline update held");
        } else {
            baseline.update_shoulder_baseline(shoulder.y);
        }

        Classification {
            verdict: RawVerdict::Determined(PostureFacts {
                elbow_raised: elbow_above || sharply_bent,
                angle_deviated,
                shoulder_elevated,
                angle_degrees: angle,
            }),
            baseline_raised,
            shoulder_lift,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Landmark;

    fn settled_baseline(shoulder_y: f64) -> BaselineTracker {
        let mut baseline = BaselineTracker::new(150.0, 1, 0.01);
        baseline.update_shoulder_baseline(shoulder_y);
        baseline
    }

    #[test]
    fn test_raised_elbow_scenario() {
        let classifier = PostureClassifier::default();
        let mut baseline = BaselineTracker::default();
        let frame = ArmLandmarks::from_points((0.5, 0.3), (0.5, 0.25), (0.6, 0.3));

        let result = classifier.classify(&frame, &mut baseline);
        assert_eq!(result.baseline_raised, Some(true));
        let facts = result.verdict.facts().unwrap();
        assert!(facts.elbow_raised);
        // Baseline still warming up
        assert_eq!(facts.shoulder_elevated, None);
        assert!(result.shoulder_lift.is_none());
    }

    #[test]
    fn test_extended_arm_deviates_from_default_reference() {
        let classifier = PostureClassifier::default();
        let mut baseline = settled_baseline(0.3);
        // Nearly straight arm hanging below the shoulder
        let frame = ArmLandmarks::from_points((0.5, 0.3), (0.5, 0.45), (0.52, 0.6));

        let result = classifier.classify(&frame, &mut baseline);
        let facts = result.verdict.facts().unwrap();
        assert!(facts.angle_degrees > 170.0);
        assert!(facts.angle_deviated);
        assert!(!facts.elbow_raised);
        assert_eq!(facts.shoulder_elevated, Some(false));
        assert_eq!(result.baseline_raised, Some(false));
    }

    #[test]
    fn test_sharp_bend_refines_raised() {
        let classifier = PostureClassifier::default();
        let mut baseline = BaselineTracker::default();
        // Elbow below the shoulder but folded to ~45°
        let frame = ArmLandmarks::from_points((0.5, 0.3), (0.5, 0.45), (0.6, 0.35));

        let result = classifier.classify(&frame, &mut baseline);
        assert_eq!(result.baseline_raised, Some(false));
        assert!(result.verdict.facts().unwrap().elbow_raised);
    }

    #[test]
    fn test_missing_wrist_is_undetermined() {
        let classifier = PostureClassifier::default();
        let mut baseline = BaselineTracker::new(150.0, 1, 0.1);
        let frame = ArmLandmarks {
            shoulder: Some(Landmark::new(0.5, 0.3)),
            elbow: Some(Landmark::new(0.5, 0.25)),
            wrist: None,
        };

        let result = classifier.classify(&frame, &mut baseline);
        assert_eq!(
            result.verdict,
            RawVerdict::Undetermined(UndeterminedReason::MissingLandmark(Joint::Wrist))
        );
        // Ground truth is still available
        assert_eq!(result.baseline_raised, Some(true));
        // Undetermined frames never feed the baseline
        assert!(baseline.reference_shoulder_y().is_none());
    }

    #[test]
    fn test_low_visibility_counts_as_missing() {
        let classifier = PostureClassifier::default();
        let mut baseline = BaselineTracker::default();
        let frame = ArmLandmarks::new(
            Landmark::with_visibility(0.5, 0.3, 0.1),
            Landmark::new(0.5, 0.25),
            Landmark::new(0.6, 0.3),
        );

        let result = classifier.classify(&frame, &mut baseline);
        assert_eq!(
            result.verdict,
            RawVerdict::Undetermined(UndeterminedReason::MissingLandmark(Joint::Shoulder))
        );
        assert_eq!(result.baseline_raised, None);
    }

    #[test]
    fn test_degenerate_geometry() {
        let classifier = PostureClassifier::default();
        let mut baseline = BaselineTracker::default();
        let frame = ArmLandmarks::from_points((0.5, 0.3), (0.5, 0.3), (0.6, 0.3));

        let result = classifier.classify(&frame, &mut baseline);
        assert_eq!(result.verdict, RawVerdict::Undetermined(UndeterminedReason::DegenerateGeometry));
        assert!(result.verdict.angle_degrees().is_none());
    }

    #[test]
    fn test_shoulder_elevation_uses_prior_baseline() {
        let classifier = PostureClassifier::default();
        let mut baseline = settled_baseline(0.40);
        let frame = ArmLandmarks::from_points((0.5, 0.35), (0.5, 0.5), (0.6, 0.62));

        let result = classifier.classify(&frame, &mut baseline);
        assert_eq!(result.verdict.facts().unwrap().shoulder_elevated, Some(true));
        assert!((result.shoulder_lift.unwrap() - 0.05).abs() < 1e-9);
        // Elevated frames are kept out of the baseline
        assert_eq!(baseline.reference_shoulder_y(), Some(0.40));
    }

    #[test]
    fn test_small_shoulder_drift_is_folded_in() {
        let classifier = PostureClassifier::default();
        let mut baseline = settled_baseline(0.40);
        // Lift of 0.01 stays inside the 0.03 tolerance
        let frame = ArmLandmarks::from_points((0.5, 0.39), (0.5, 0.54), (0.6, 0.66));

        let result = classifier.classify(&frame, &mut baseline);
        assert_eq!(result.verdict.facts().unwrap().shoulder_elevated, Some(false));
        assert!(baseline.reference_shoulder_y().unwrap() < 0.40);
    }

    #[test]
    fn test_held_shrug_keeps_baseline() {
        let classifier = PostureClassifier::default();
        let mut baseline = settled_baseline(0.40);
        let shrug = ArmLandmarks::from_points((0.5, 0.35), (0.5, 0.5), (0.6, 0.62));

        for _ in 0..300 {
            let result = classifier.classify(&shrug, &mut baseline);
            assert_eq!(result.verdict.facts().unwrap().shoulder_elevated, Some(true));
        }
        assert_eq!(baseline.reference_shoulder_y(), Some(0.40));
    }
}
