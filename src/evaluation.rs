//! Agreement of each classification approach with the ground truth.
//!
//! Ground truth is the plain elbow-above-shoulder test. Comparing the raw
//! test, the refined per-frame verdict and the smoothed verdict against it
//! shows how far each refinement departs from the reference definition.

use serde::Serialize;
use std::fmt;

/// Classification approach being scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    /// Elbow above shoulder, unsmoothed
    Baseline,
    /// Per-frame refined `elbow_raised`
    Refined,
    /// Majority-voted `elbow_raised`
    Smoothed,
}

impl Approach {
    pub const ALL: [Approach; 3] = [Approach::Baseline, Approach::Refined, Approach::Smoothed];

    fn index(self) -> usize {
        match self {
            Self::Baseline => 0,
            Self::Refined => 1,
            Self::Smoothed => 2,
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Baseline => "baseline",
            Self::Refined => "refined",
            Self::Smoothed => "smoothed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Counts {
    matches: u64,
    total: u64,
}

/// Running per-approach accuracy
#[derive(Debug, Clone, Default)]
pub struct AccuracyTracker {
    counts: [Counts; 3],
}

/// Accuracy of one approach
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracySummary {
    pub approach: Approach,
    pub frames: u64,
    pub accuracy: f64,
}

impl AccuracyTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one frame's predictions against its ground truth
    pub fn record(&mut self, ground_truth: bool, predictions: &[(Approach, bool)]) {
        for &(approach, predicted) in predictions {
            let counts = &mut self.counts[approach.index()];
            counts.total += 1;
            if predicted == ground_truth {
                counts.matches += 1;
            }
        }
    }

    /// Fraction of scored frames that matched; `None` before any frame
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy(&self, approach: Approach) -> Option<f64> {
        let counts = self.counts[approach.index()];
        (counts.total > 0).then(|| counts.matches as f64 / counts.total as f64)
    }

    /// Summaries for every approach that has been scored
    #[must_use]
    pub fn summary(&self) -> Vec<AccuracySummary> {
        Approach::ALL
            .iter()
            .filter_map(|&approach| {
                self.accuracy(approach).map(|accuracy| AccuracySummary {
                    approach,
                    frames: self.counts[approach.index()].total,
                    accuracy,
                })
            })
            .collect()
    }

    pub fn reset(&mut self) {
        self.counts = [Counts::default(); 3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_per_approach() {
        let mut tracker = AccuracyTracker::new();
        assert!(tracker.accuracy(Approach::Smoothed).is_none());

        tracker.record(true, &[(Approach::Baseline, true), (Approach::Smoothed, false)]);
        tracker.record(false, &[(Approach::Baseline, false), (Approach::Smoothed, false)]);

        assert_eq!(tracker.accuracy(Approach::Baseline), Some(1.0));
        assert_eq!(tracker.accuracy(Approach::Smoothed), Some(0.5));
        assert!(tracker.accuracy(Approach::Refined).is_none());

        let summary = tracker.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[1].approach, Approach::Smoothed);
        assert_eq!(summary[1].frames, 2);
    }

    #[test]
    fn test_reset() {
        let mut tracker = AccuracyTracker::new();
        tracker.record(true, &[(Approach::Refined, true)]);
        tracker.reset();
        assert!(tracker.summary().is_empty());
    }
}
