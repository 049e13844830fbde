//! Editor error types.

use crate::schema::{ConfigError, FrameIndexError};

/// Precondition violations raised by editor operations.
///
/// Boundary conditions (empty animation, single frame, wraparound) are
/// resolved by policy and never surface here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("Frame {frame} has no stroke to extend")]
    NoActiveStroke { frame: usize },
    #[error(transparent)]
    FrameOutOfRange(#[from] FrameIndexError),
    #[error("Invalid editor configuration: {0}")]
    Config(#[from] ConfigError),
}
