//! The animated subject: playback flags and pen position supplied by the host.

use std::time::Duration;

use crate::schema::{PlaybackConfig, Point3};

/// Signed frame interval. The sign selects the autoplay direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInterval {
    period: Duration,
    reverse: bool,
}

impl FrameInterval {
    pub const fn forward(period: Duration) -> Self {
        Self {
            period,
            reverse: false,
        }
    }

    pub const fn backward(period: Duration) -> Self {
        Self {
            period,
            reverse: true,
        }
    }

    /// Interval from signed milliseconds (negative plays backwards).
    pub fn from_millis(ms: i64) -> Self {
        let period = Duration::from_millis(ms.unsigned_abs());
        if ms < 0 {
            Self::backward(period)
        } else {
            Self::forward(period)
        }
    }

    /// Absolute duration between frame changes.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// True when autoplay steps to the previous frame.
    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.reverse
    }
}

/// Capability the editor reads from its host every tick.
pub trait Subject {
    /// Whether autoplay is enabled.
    fn is_playing(&self) -> bool;

    /// Signed interval between autoplay frame changes.
    fn frame_interval(&self) -> FrameInterval;

    /// Current pen position in the subject's local coordinate space.
    fn local_pen_position(&self) -> Point3;
}

/// Plain-data subject driven directly by the shell.
#[derive(Debug, Clone, Default)]
pub struct SubjectState {
    pub playing: bool,
    pub interval: FrameInterval,
    pub pen: Point3,
}

impl SubjectState {
    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self {
            playing: config.playing,
            interval: FrameInterval::from_millis(config.frame_interval_ms),
            pen: Point3::ZERO,
        }
    }
}

impl Subject for SubjectState {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn frame_interval(&self) -> FrameInterval {
        self.interval
    }

    fn local_pen_position(&self) -> Point3 {
        self.pen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_sign() {
        let fwd = FrameInterval::from_millis(250);
        assert!(!fwd.is_reverse());
        assert_eq!(fwd.period(), Duration::from_millis(250));

        let back = FrameInterval::from_millis(-40);
        assert!(back.is_reverse());
        assert_eq!(back.period(), Duration::from_millis(40));

        assert!(!FrameInterval::from_millis(0).is_reverse());
    }

    #[test]
    fn test_subject_from_config() {
        let subject = SubjectState::from_config(&PlaybackConfig {
            playing: true,
            frame_interval_ms: -80,
        });
        assert!(subject.is_playing());
        assert!(subject.frame_interval().is_reverse());
        assert_eq!(subject.local_pen_position(), Point3::ZERO);
    }
}
