//! Plane engine error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaneError {
    #[error("Viewport must have non-zero dimensions, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse engine config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
