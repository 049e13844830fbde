//! Configuration types for the editor and its playback subject.

use serde::{Deserialize, Serialize};

/// Default minimum pen movement between retained samples, in local units.
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.001;

fn default_distance_threshold() -> f64 {
    DEFAULT_DISTANCE_THRESHOLD
}

fn default_frame_interval_ms() -> i64 {
    100
}

/// Stroke capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Pen movement must exceed this distance for a sample to be kept.
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
        }
    }
}

impl EditorConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.distance_threshold.is_finite() || self.distance_threshold < 0.0 {
            return Err(ConfigError::InvalidDistanceThreshold(
                self.distance_threshold,
            ));
        }
        Ok(())
    }
}

/// Initial playback settings for a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Whether autoplay starts enabled.
    #[serde(default)]
    pub playing: bool,
    /// Signed frame interval in milliseconds. Negative plays backwards.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: i64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            playing: false,
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Distance threshold must be finite and non-negative, got {0}")]
    InvalidDistanceThreshold(f64),
}
