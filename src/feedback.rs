//! Hint selection from the smoothed verdict.
//!
//! The cascade is an ordered rule table; the first matching rule wins. Arm
//! extension outranks the shoulder, and a raised elbow with both other issues
//! present gets its own combined hint.

use crate::smoothing::SmoothedVerdict;
use serde::Serialize;
use std::fmt;

/// Human-facing feedback for one smoothed frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hint {
    /// Nothing in the window could be classified
    NoArmDetected,
    /// Raised elbow, deviated angle and elevated shoulder together
    MultipleIssues,
    ExtendArm,
    LowerShoulder,
    KeepArmStable,
    GreatPosture,
}

impl Hint {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoArmDetected => "Bowing arm not detected",
            Self::MultipleIssues => "Extend your bowing arm and lower your shoulder",
            Self::ExtendArm => "Try extending your bowing arm more",
            Self::LowerShoulder => "Lower your shoulder slightly",
            Self::KeepArmStable => "Keep bowing arm stable",
            Self::GreatPosture => "Great posture!",
        }
    }

    /// Whether the hint asks the player to correct something
    #[must_use]
    pub fn is_alarming(&self) -> bool {
        matches!(self, Self::MultipleIssues | Self::ExtendArm | Self::LowerShoulder)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

type Rule = (fn(&SmoothedVerdict) -> bool, Hint);

fn nothing_determined(v: &SmoothedVerdict) -> bool {
    v.determined_frames == 0
}

fn every_issue(v: &SmoothedVerdict) -> bool {
    v.elbow_raised && v.angle_deviated && v.shoulder_elevated
}

fn angle_deviated(v: &SmoothedVerdict) -> bool {
    v.angle_deviated
}

fn shoulder_elevated(v: &SmoothedVerdict) -> bool {
    v.shoulder_elevated
}

fn elbow_raised(v: &SmoothedVerdict) -> bool {
    v.elbow_raised
}

/// Priority order, highest first
const RULES: [Rule; 5] = [
    (nothing_determined, Hint::NoArmDetected),
    (every_issue, Hint::MultipleIssues),
    (angle_deviated, Hint::ExtendArm),
    (shoulder_elevated, Hint::LowerShoulder),
    (elbow_raised, Hint::KeepArmStable),
];

/// Pick the hint for a smoothed verdict
#[must_use]
pub fn decide_hint(verdict: &SmoothedVerdict) -> Hint {
    RULES
        .iter()
        .find(|(matches, _)| matches(verdict))
        .map_or(Hint::GreatPosture, |&(_, hint)| hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(elbow_raised: bool, angle_deviated: bool, shoulder_elevated: bool) -> SmoothedVerdict {
        SmoothedVerdict {
            elbow_raised,
            angle_deviated,
            shoulder_elevated,
            determined_frames: 5,
        }
    }

    #[test]
    fn test_rule_priority() {
        assert_eq!(decide_hint(&verdict(true, true, true)), Hint::MultipleIssues);
        assert_eq!(decide_hint(&verdict(false, true, false)), Hint::ExtendArm);
        assert_eq!(decide_hint(&verdict(false, true, true)), Hint::ExtendArm);
        assert_eq!(decide_hint(&verdict(true, true, false)), Hint::ExtendArm);
        assert_eq!(decide_hint(&verdict(false, false, true)), Hint::LowerShoulder);
        assert_eq!(decide_hint(&verdict(true, false, true)), Hint::LowerShoulder);
        assert_eq!(decide_hint(&verdict(true, false, false)), Hint::KeepArmStable);
        assert_eq!(decide_hint(&verdict(false, false, false)), Hint::GreatPosture);
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(decide_hint(&SmoothedVerdict::default()), Hint::NoArmDetected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Hint::ExtendArm.to_string(), "Try extending your bowing arm more");
        assert_eq!(Hint::GreatPosture.to_string(), "Great posture!");
        assert!(Hint::LowerShoulder.is_alarming());
        assert!(!Hint::KeepArmStable.is_alarming());
    }
}
