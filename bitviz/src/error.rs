//! Error types for the std-level visualizer
//!
//! Model operations report the core [`BitvizError`]; loading configuration
//! can additionally fail while decoding JSON.

use bitviz_core::BitvizError;

/// Errors raised by the `bitviz` crate
#[derive(Debug)]
pub enum VisualizerError {
    /// Rejected input event
    Core(BitvizError),
    /// Configuration could not be decoded
    Config(serde_json::Error),
}

impl std::fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisualizerError::Core(e) => write!(f, "{e}"),
            VisualizerError::Config(e) => write!(f, "Invalid configuration: {e}"),
        }
    }
}

impl std::error::Error for VisualizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisualizerError::Core(_) => None,
            VisualizerError::Config(e) => Some(e),
        }
    }
}

impl From<BitvizError> for VisualizerError {
    fn from(e: BitvizError) -> Self {
        VisualizerError::Core(e)
    }
}

impl From<serde_json::Error> for VisualizerError {
    fn from(e: serde_json::Error) -> Self {
        VisualizerError::Config(e)
    }
}

/// Result type for `bitviz` operations that may touch configuration
pub type Result<T> = std::result::Result<T, VisualizerError>;
