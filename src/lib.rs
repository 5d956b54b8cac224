//! Bowing posture analysis for violinists.
//!
//! Consumes a stream of right-arm landmarks (shoulder, elbow, wrist) from an
//! external pose-estimation model and turns it into a stable posture
//! classification with a human-readable hint.
//!
//! The pipeline, one frame at a time:
//! 1. Geometry: the elbow angle and the elbow-above-shoulder test
//! 2. Classification against the reference angle and a drifting shoulder baseline
//! 3. Majority-vote smoothing over the last few frames
//! 4. A priority rule table that picks the hint
//!
//! A wrist trajectory is tracked alongside for stroke-consistency display.
//!
//! # Examples
//!
//! ```
//! use bowing_posture::{config::Config, landmarks::ArmLandmarks, pipeline::PostureAnalyzer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut analyzer = PostureAnalyzer::new(&Config::default())?;
//!
//! let frame = ArmLandmarks::from_points((0.5, 0.3), (0.5, 0.45), (0.52, 0.6));
//! let report = analyzer.process(&frame);
//! println!("{}: {}", report.frame_index, report.hint);
//!
//! // Adopt the current arm angle as the player's reference
//! let angle = analyzer.set_reference()?;
//! println!("Reference set to {angle:.1}°");
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the pieces directly
//!
//! ```
//! use bowing_posture::geometry::{compute_angle, is_elbow_raised, Point2};
//!
//! let shoulder = Point2::new(0.5, 0.3);
//! let elbow = Point2::new(0.5, 0.25);
//! let wrist = Point2::new(0.6, 0.3);
//!
//! assert!(is_elbow_raised(shoulder, elbow));
//! let angle = compute_angle(shoulder, elbow, wrist).expect("non-degenerate arm");
//! assert!((0.0..=180.0).contains(&angle));
//! ```

/// Landmark frame types
pub mod landmarks;

/// Elbow angle and raised-elbow geometry
pub mod geometry;

/// Reference angle and shoulder drift baseline
pub mod baseline;

/// Per-frame posture verdicts
pub mod classifier;

/// Majority-vote smoothing of verdicts
pub mod smoothing;

/// Hint selection
pub mod feedback;

/// Wrist trajectory tracking
pub mod trajectory;

/// Accuracy of each approach against the ground truth
pub mod evaluation;

/// The frame-by-frame analysis pipeline
pub mod pipeline;

/// JSON-lines landmark stream processing
pub mod stream;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
