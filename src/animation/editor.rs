//! Editor state and the per-tick driver.
//!
//! Frame navigation and editing live in `controller.rs`, stroke capture in
//! `capture.rs`. Both operate on the same [`Editor`] so that the
//! before/after frame-change hooks can finish and restart strokes without
//! shared ownership.

use std::time::Duration;

use super::events::{Emitter, EventListener};
use super::subject::{Subject, SubjectState};
use super::EditorError;
use crate::schema::{AnimationData, EditorConfig, Frame, Point3};

/// Playhead bookkeeping owned by the controller.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlaybackState {
    pub(crate) current_frame: usize,
    /// Tick time of the last autoplay frame change.
    pub(crate) frame_change_time: Option<Duration>,
}

/// Stroke capture state machine.
#[derive(Debug, Clone)]
pub(crate) struct DrawState {
    pub(crate) is_drawing: bool,
    pub(crate) last_sampled_position: Option<Point3>,
    pub(crate) distance_threshold: f64,
}

/// Input-mode flags set by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditState {
    /// Directional gestures insert/remove frames instead of navigating.
    pub frame_editing: bool,
    /// Advance one frame after each finished stroke.
    pub auto_next: bool,
    /// Step back one frame after each finished stroke (checked after `auto_next`).
    pub auto_prev: bool,
}

/// Frame-based stroke animation editor.
///
/// Usage:
/// ```ignore
/// let mut editor = Editor::new(AnimationData::with_empty_frames(2), subject, config)?;
/// editor.subscribe(|event: &EditorEvent<'_>| println!("{}", event.name()));
///
/// editor.start_drawing()?;
/// editor.subject_mut().pen = Point3::new(0.0, 0.0, 0.01);
/// editor.tick(Duration::from_millis(16))?;
/// editor.stop_drawing()?;
/// ```
pub struct Editor<S: Subject = SubjectState> {
    pub(crate) data: AnimationData,
    pub(crate) subject: S,
    pub(crate) playback: PlaybackState,
    pub(crate) draw: DrawState,
    pub(crate) edit: EditState,
    pub(crate) emitter: Emitter,
}

impl<S: Subject> Editor<S> {
    /// Create an editor over `data`, starting at frame 0.
    pub fn new(data: AnimationData, subject: S, config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        log::debug!(
            "editor created: {} frames, threshold {}",
            data.len(),
            config.distance_threshold
        );

        Ok(Self {
            data,
            subject,
            playback: PlaybackState::default(),
            draw: DrawState {
                is_drawing: false,
                last_sampled_position: None,
                distance_threshold: config.distance_threshold,
            },
            edit: EditState::default(),
            emitter: Emitter::default(),
        })
    }

    /// Register a listener for all subsequent events.
    pub fn subscribe<L: EventListener + 'static>(&mut self, listener: L) {
        self.emitter.subscribe(Box::new(listener));
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.emitter.len()
    }

    /// Advance one scheduler tick at absolute monotonic time `now`.
    ///
    /// Autoplay is evaluated before draw sampling.
    pub fn tick(&mut self, now: Duration) -> Result<(), EditorError> {
        self.handle_playhead(now)?;
        self.sample()
    }

    /// The animation being edited.
    pub fn animation(&self) -> &AnimationData {
        &self.data
    }

    /// Consume the editor and hand the animation back to its owner.
    pub fn into_animation(self) -> AnimationData {
        self.data
    }

    /// Number of frames in the animation.
    pub fn frame_count(&self) -> usize {
        self.data.len()
    }

    /// Index of the current frame. Meaningless while the animation is empty.
    pub fn current_frame_index(&self) -> usize {
        self.playback.current_frame
    }

    /// The current frame, or `None` for an empty animation.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.data.frame(self.playback.current_frame)
    }

    /// Whether a stroke is being captured.
    pub fn is_drawing(&self) -> bool {
        self.draw.is_drawing
    }

    /// Last pen position that passed the distance filter.
    pub fn last_sampled_position(&self) -> Option<Point3> {
        self.draw.last_sampled_position
    }

    /// Minimum pen travel before a sample is kept.
    pub fn distance_threshold(&self) -> f64 {
        self.draw.distance_threshold
    }

    /// Current input-mode flags.
    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Switch directional gestures between navigation and frame editing.
    pub fn set_frame_editing(&mut self, enabled: bool) {
        self.edit.frame_editing = enabled;
    }

    /// Arm or disarm advancing after each finished stroke.
    pub fn set_auto_next(&mut self, enabled: bool) {
        self.edit.auto_next = enabled;
    }

    /// Arm or disarm stepping back after each finished stroke.
    pub fn set_auto_prev(&mut self, enabled: bool) {
        self.edit.auto_prev = enabled;
    }

    /// The subject supplying pen position and playback settings.
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Mutable access to the subject.
    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    /// Current pen position from the subject.
    #[inline]
    pub(crate) fn pen(&self) -> Point3 {
        self.subject.local_pen_position()
    }
}
