//! Error types for the bowing posture library.
//!
//! Per-frame problems (missing joints, degenerate geometry, an unsettled
//! shoulder baseline) are reported as data inside [`crate::classifier::RawVerdict`].
//! This enum only covers the fallible API surface.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File or stream I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Reference calibration could not be applied
    #[error("Calibration error: {0}")]
    Calibration(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
