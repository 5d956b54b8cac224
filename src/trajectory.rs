//! Wrist trajectory tracking for bow-stroke consistency.
//!
//! This is a secondary signal for visualization; it never feeds back into
//! classification.

use crate::constants::DEFAULT_TRAJECTORY_CAPACITY;
use crate::geometry::Point2;
use serde::Serialize;
use std::collections::VecDeque;

/// Bounded history of wrist positions, oldest first
#[derive(Debug, Clone)]
pub struct WristTrajectoryTracker {
    capacity: usize,
    points: VecDeque<Point2>,
}

impl WristTrajectoryTracker {
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Trajectory capacity must be greater than 0");
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, wrist: Point2) {
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(wrist);
    }

    /// Points from oldest to newest
    pub fn points(&self) -> impl Iterator<Item = &Point2> + '_ {
        self.points.iter()
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Point2> {
        self.points.iter().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Spread and path statistics; needs at least two points
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> Option<TrajectoryStats> {
        if self.points.len() < 2 {
            return None;
        }

        let n = self.points.len() as f64;
        let mean_x = self.points.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = self.points.iter().map(|p| p.y).sum::<f64>() / n;

        let var_x = self.points.iter().map(|p| (p.x - mean_x).powi(2)).sum::<f64>() / n;
        let var_y = self.points.iter().map(|p| (p.y - mean_y).powi(2)).sum::<f64>() / n;

        let path_length = self
            .points
            .iter()
            .zip(self.points.iter().skip(1))
            .map(|(a, b)| a.distance_to(b))
            .sum();

        Some(TrajectoryStats {
            mean: Point2::new(mean_x, mean_y),
            std_dev_x: var_x.sqrt(),
            std_dev_y: var_y.sqrt(),
            spread: (var_x + var_y).sqrt(),
            path_length,
        })
    }
}

impl Default for WristTrajectoryTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TRAJECTORY_CAPACITY)
    }
}

/// Statistical summary of the buffered trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryStats {
    /// Centroid of the buffered points
    pub mean: Point2,
    pub std_dev_x: f64,
    pub std_dev_y: f64,
    /// RMS distance from the centroid; larger means a shakier stroke
    pub spread: f64,
    /// Total distance travelled across the buffer
    pub path_length: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut tracker = WristTrajectoryTracker::new(3);
        for i in 0..4 {
            tracker.push(Point2::new(f64::from(i), 0.0));
        }
        assert_eq!(tracker.len(), 3);
        let xs: Vec<f64> = tracker.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_stats_need_two_points() {
        let mut tracker = WristTrajectoryTracker::new(5);
        assert!(tracker.stats().is_none());
        tracker.push(Point2::new(0.5, 0.5));
        assert!(tracker.stats().is_none());
    }

    #[test]
    fn test_stats_horizontal_stroke() {
        let mut tracker = WristTrajectoryTracker::new(10);
        for x in [0.0, 1.0, 2.0, 3.0, 4.0] {
            tracker.push(Point2::new(x, 2.0));
        }
        let stats = tracker.stats().unwrap();
        assert_eq!(stats.mean, Point2::new(2.0, 2.0));
        assert!((stats.std_dev_x - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.std_dev_y, 0.0);
        assert!((stats.path_length - 4.0).abs() < 1e-12);
        assert!((stats.spread - stats.std_dev_x).abs() < 1e-12);
    }

    #[test]
    fn test_still_wrist_has_zero_spread() {
        let mut tracker = WristTrajectoryTracker::new(4);
        for _ in 0..4 {
            tracker.push(Point2::new(0.3, 0.7));
        }
        let stats = tracker.stats().unwrap();
        assert!(stats.spread.abs() < 1e-12);
        assert_eq!(stats.path_length, 0.0);
    }
}
