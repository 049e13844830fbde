//! Stroke capture engine: the idle/drawing state machine and distance filter.

use super::editor::Editor;
use super::events::{EditorEvent, LineChange};
use super::subject::Subject;
use super::EditorError;
use crate::schema::{Point3, Stroke};

impl<S: Subject> Editor<S> {
    /// Idle → Drawing: open a stroke at the current pen position.
    ///
    /// Does nothing while already drawing or when the animation is empty.
    pub fn start_drawing(&mut self) -> Result<(), EditorError> {
        if self.draw.is_drawing {
            return Ok(());
        }
        if self.data.is_empty() {
            log::debug!("start_drawing ignored: animation has no frames");
            return Ok(());
        }

        let pos = self.pen();
        self.draw.last_sampled_position = Some(pos);
        self.draw.is_drawing = true;
        log::debug!("drawing started in frame {}", self.playback.current_frame);
        self.start_line(pos)
    }

    /// Drawing → Idle: close the stroke at the current pen position, then
    /// apply at most one automatic frame change.
    pub fn stop_drawing(&mut self) -> Result<(), EditorError> {
        if !self.draw.is_drawing {
            return Ok(());
        }

        self.draw.is_drawing = false;
        self.draw.last_sampled_position = None;
        let pos = self.pen();
        self.finish_line(pos)?;
        log::debug!("drawing stopped in frame {}", self.playback.current_frame);

        if self.edit.auto_next {
            self.goto_next_frame()
        } else if self.edit.auto_prev {
            self.goto_prev_frame()
        } else {
            Ok(())
        }
    }

    /// Sample the pen once. Movement at or below the distance threshold is dropped.
    pub fn sample(&mut self) -> Result<(), EditorError> {
        if !self.draw.is_drawing {
            return Ok(());
        }

        let pos = self.pen();
        let moved = match self.draw.last_sampled_position {
            Some(last) => last.distance_to(&pos) > self.draw.distance_threshold,
            None => true,
        };
        if !moved {
            return Ok(());
        }

        self.add_to_line(pos)?;
        self.draw.last_sampled_position = Some(pos);
        Ok(())
    }

    /// Close the active stroke before the current frame changes.
    pub(crate) fn force_finish(&mut self) -> Result<(), EditorError> {
        let pos = self.pen();
        self.finish_line(pos)
    }

    /// Open a stroke in the (new) current frame while drawing continues.
    pub(crate) fn force_start(&mut self) -> Result<(), EditorError> {
        let pos = self.pen();
        self.draw.last_sampled_position = Some(pos);
        self.start_line(pos)
    }

    pub(crate) fn start_line(&mut self, pos: Point3) -> Result<(), EditorError> {
        let frame_index = self.playback.current_frame;
        self.data
            .frame_mut(frame_index)?
            .push_stroke(Stroke::starting_at(pos));
        self.emit_line_change(LineChange::LineStarted, frame_index);
        Ok(())
    }

    pub(crate) fn add_to_line(&mut self, pos: Point3) -> Result<(), EditorError> {
        log::trace!("sample {:?}", pos);
        self.extend_line(pos, LineChange::LineAddedTo)
    }

    pub(crate) fn finish_line(&mut self, pos: Point3) -> Result<(), EditorError> {
        self.extend_line(pos, LineChange::LineFinished)
    }

    fn extend_line(&mut self, pos: Point3, change: LineChange) -> Result<(), EditorError> {
        let frame_index = self.playback.current_frame;
        self.data
            .frame_mut(frame_index)?
            .last_stroke_mut()
            .ok_or(EditorError::NoActiveStroke { frame: frame_index })?
            .push(pos);
        self.emit_line_change(change, frame_index);
        Ok(())
    }

    fn emit_line_change(&mut self, change: LineChange, frame_index: usize) {
        let frame_data = &self.data[frame_index];
        self.emitter.emit(&EditorEvent::AnimDataChanged {
            change,
            frame_index,
            frame_data,
        });
    }
}
