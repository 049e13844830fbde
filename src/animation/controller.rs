//! Animation controller: playhead, navigation and frame editing.

use std::time::Duration;

use super::editor::Editor;
use super::events::EditorEvent;
use super::subject::Subject;
use super::EditorError;
use crate::schema::FrameIndexError;

/// Where [`Editor::insert_frame_at`] places the new frame relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Before,
    After,
}

impl<S: Subject> Editor<S> {
    /// Advance to the next frame, wrapping from the last frame to 0.
    pub fn goto_next_frame(&mut self) -> Result<(), EditorError> {
        let len = self.data.len();
        if len == 0 {
            log::debug!("goto_next_frame ignored: animation has no frames");
            return Ok(());
        }
        let next = (self.playback.current_frame + 1) % len;
        self.change_frame(next)
    }

    /// Step back to the previous frame, wrapping from 0 to the last frame.
    pub fn goto_prev_frame(&mut self) -> Result<(), EditorError> {
        let len = self.data.len();
        if len == 0 {
            log::debug!("goto_prev_frame ignored: animation has no frames");
            return Ok(());
        }
        let prev = match self.playback.current_frame {
            0 => len - 1,
            i => i - 1,
        };
        self.change_frame(prev)
    }

    /// Insert an empty frame at `index` (0 ≤ index ≤ len).
    ///
    /// The value of the current frame index is left alone, so inserting at
    /// or below it makes the new frame current.
    pub fn insert_frame(&mut self, index: usize) -> Result<(), EditorError> {
        let len = self.data.len();
        if index > len {
            return Err(FrameIndexError { index, len }.into());
        }

        let handover = self.draw.is_drawing && index <= self.playback.current_frame;
        if handover {
            self.force_finish()?;
        }
        self.splice_in(index)?;
        if handover {
            self.force_start()?;
        }
        Ok(())
    }

    /// Insert an empty frame next to `frame_index` (default: current frame).
    ///
    /// `After` advances the current frame index by one and `Before` leaves it
    /// unchanged, whatever the anchor. With the default anchor this selects
    /// the new frame. An empty animation gets a single frame 0.
    pub fn insert_frame_at(
        &mut self,
        position: InsertPosition,
        frame_index: Option<usize>,
    ) -> Result<(), EditorError> {
        let len = self.data.len();
        if len == 0 {
            log::warn!("inserting into empty animation, new frame becomes frame 0");
            self.splice_in(0)?;
            self.playback.current_frame = 0;
            return Ok(());
        }

        let current = self.playback.current_frame;
        let anchor = frame_index.unwrap_or(current);
        if anchor >= len {
            return Err(FrameIndexError { index: anchor, len }.into());
        }
        let (index, target, handover) = match position {
            InsertPosition::Before => (anchor, current, anchor <= current),
            // Below the current frame the shift and the increment cancel out.
            InsertPosition::After => (anchor + 1, current + 1, anchor >= current),
        };

        let handover = handover && self.draw.is_drawing;
        if handover {
            self.force_finish()?;
        }
        self.splice_in(index)?;
        self.playback.current_frame = target;
        if handover {
            self.force_start()?;
        }
        Ok(())
    }

    /// Remove the frame at `index` (default: current frame).
    ///
    /// Removing the only frame leaves a fresh empty frame in its place.
    /// Removing below the current frame keeps the same frame current;
    /// removing the current last frame selects the new last frame.
    pub fn remove_frame(&mut self, index: Option<usize>) -> Result<(), EditorError> {
        let len = self.data.len();
        if len == 0 {
            log::debug!("remove_frame ignored: animation has no frames");
            return Ok(());
        }

        let current = self.playback.current_frame;
        let index = index.unwrap_or(current);
        if index >= len {
            return Err(FrameIndexError { index, len }.into());
        }

        let handover = self.draw.is_drawing && index == current;
        if handover {
            self.force_finish()?;
        }

        self.data.remove(index)?;
        self.emitter
            .emit(&EditorEvent::FrameRemoved { frame_index: index });

        if self.data.is_empty() {
            log::warn!("removed the only frame, inserting an empty replacement");
            self.splice_in(0)?;
            self.playback.current_frame = 0;
        } else if index < current {
            self.playback.current_frame = current - 1;
        } else if current >= self.data.len() {
            self.playback.current_frame = self.data.len() - 1;
        }

        if handover {
            self.force_start()?;
        }
        Ok(())
    }

    /// Autoplay: step one frame once the signed interval has elapsed.
    pub(crate) fn handle_playhead(&mut self, now: Duration) -> Result<(), EditorError> {
        // The reference survives a pause; resuming steps as soon as a full
        // interval has passed since the last change.
        if !self.subject.is_playing() {
            return Ok(());
        }

        let reference = *self.playback.frame_change_time.get_or_insert(now);
        let interval = self.subject.frame_interval();
        if now.saturating_sub(reference) < interval.period() {
            return Ok(());
        }

        self.playback.frame_change_time = Some(now);
        if interval.is_reverse() {
            self.goto_prev_frame()
        } else {
            self.goto_next_frame()
        }
    }

    fn change_frame(&mut self, target: usize) -> Result<(), EditorError> {
        self.before_frame_change()?;
        log::debug!("frame {} -> {}", self.playback.current_frame, target);
        self.playback.current_frame = target;
        self.after_frame_change()
    }

    fn before_frame_change(&mut self) -> Result<(), EditorError> {
        if self.draw.is_drawing {
            self.force_finish()?;
        }
        let frame = self.playback.current_frame;
        self.emitter.emit(&EditorEvent::ExitFrame { frame });
        Ok(())
    }

    fn after_frame_change(&mut self) -> Result<(), EditorError> {
        if self.draw.is_drawing {
            self.force_start()?;
        }
        let frame = self.playback.current_frame;
        self.emitter.emit(&EditorEvent::EnterFrame { frame });
        Ok(())
    }

    /// Raw insertion plus FRAME_INSERTED, no current-frame bookkeeping.
    fn splice_in(&mut self, index: usize) -> Result<(), EditorError> {
        self.data.insert_empty(index)?;
        self.emitter
            .emit(&EditorEvent::FrameInserted { frame_index: index });
        Ok(())
    }
}
