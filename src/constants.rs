//! Constants used throughout the library

/// Default number of frames in the majority-vote window
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// Default reference elbow angle in degrees
pub const DEFAULT_REFERENCE_ANGLE: f64 = 150.0;

/// Default tolerated deviation from the reference angle in degrees
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 15.0;

/// Elbow angles below this are treated as a raised, sharply bent arm
pub const DEFAULT_SHARP_BEND_ANGLE: f64 = 90.0;

/// Default shoulder lift tolerance in normalized image units (~15 px at 480 px)
pub const DEFAULT_SHOULDER_TOLERANCE: f64 = 0.03;

/// Valid frames averaged before the shoulder baseline is established
pub const DEFAULT_SHOULDER_WARMUP_FRAMES: usize = 10;

/// Per-frame weight of a new sample in the shoulder baseline average
pub const DEFAULT_SHOULDER_DECAY: f64 = 0.01;

/// Default wrist trajectory length (~1.7 s at 30 fps)
pub const DEFAULT_TRAJECTORY_CAPACITY: usize = 50;

/// Landmarks below this visibility are treated as not detected
pub const DEFAULT_MIN_VISIBILITY: f64 = 0.5;

/// Angle bounds in degrees
pub const MIN_ANGLE: f64 = 0.0;
pub const MAX_ANGLE: f64 = 180.0;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-10;
