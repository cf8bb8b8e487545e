//! Gradient error types

use std::io;
use thiserror::Error;

/// Errors that can occur when transforming or interpolating gradients
#[derive(Error, Debug)]
pub enum GradientError {
    /// Two gradients of the same kind with different color counts were interpolated
    #[error("cannot interpolate gradients with mismatched color counts ({left} vs {right})")]
    ShapeMismatch { left: usize, right: usize },

    /// Two gradients with equal color counts resolved to different stop counts
    #[error("cannot interpolate gradients with mismatched stop counts ({left} vs {right})")]
    StopCountMismatch { left: usize, right: usize },

    /// Gradient configuration could not be parsed or serialized
    #[error("Config error: {0}")]
    Config(String),

    /// IO error when reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for blinc_gradients operations
pub type Result<T> = std::result::Result<T, GradientError>;
