//! Error types for the checked ambisonic table queries

use thiserror::Error;

use crate::hoa::Dimensionality;

/// Ambisonic definition error types
#[derive(Error, Debug)]
pub enum AmbiError {
    /// Ambisonic order outside the supported tables
    #[error("Ambisonic order out of range: {order} (max supported: {max})")]
    OrderOutOfRange { order: usize, max: usize },

    /// No upsampler exists for the requested source format
    #[error("No upsampler for order {order} ({dimensionality:?})")]
    NoUpsampler {
        order: usize,
        dimensionality: Dimensionality,
    },

    /// Invalid channel count
    #[error("Invalid channel count: expected {expected}, got {got}")]
    ChannelCountMismatch { expected: usize, got: usize },

    /// Invalid mixer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Config parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ambisonic table operations
pub type AmbiResult<T> = Result<T, AmbiError>;
