//! Device-neutral input actions routed to editor operations.
//!
//! The shell maps its own key or controller events onto [`InputAction`];
//! which physical control produces which action is up to the shell.

use serde::{Deserialize, Serialize};

use super::controller::InsertPosition;
use super::editor::Editor;
use super::subject::Subject;
use super::EditorError;

/// Discrete input consumed by [`Editor::handle_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputAction {
    /// Pen trigger pressed: start drawing.
    PrimaryDown,
    /// Pen trigger released: stop drawing.
    PrimaryUp,
    /// Modifier pressed: enter frame-edit mode.
    SecondaryDown,
    /// Modifier released: leave frame-edit mode.
    SecondaryUp,
    /// Left gesture began. Inserts before in edit mode, else previous frame.
    LeftOn,
    LeftOff,
    /// Right gesture began. Inserts after in edit mode, else next frame.
    RightOn,
    RightOff,
    /// Removes the current frame in edit mode.
    ThumbstickDown,
    NextFrame,
    PrevFrame,
    InsertBefore,
    InsertAfter,
    RemoveFrame,
}

impl<S: Subject> Editor<S> {
    /// Apply one input action.
    ///
    /// Holding a directional gesture also arms the matching auto-advance
    /// flag until the gesture is released.
    pub fn handle_input(&mut self, action: InputAction) -> Result<(), EditorError> {
        log::debug!("input {:?}", action);
        match action {
            InputAction::PrimaryDown => self.start_drawing(),
            InputAction::PrimaryUp => self.stop_drawing(),
            InputAction::SecondaryDown => {
                self.edit.frame_editing = true;
                Ok(())
            }
            InputAction::SecondaryUp => {
                self.edit.frame_editing = false;
                Ok(())
            }
            InputAction::LeftOn => {
                self.edit.auto_prev = true;
                if self.edit.frame_editing {
                    self.insert_frame_at(InsertPosition::Before, None)
                } else {
                    self.goto_prev_frame()
                }
            }
            InputAction::LeftOff => {
                self.edit.auto_prev = false;
                Ok(())
            }
            InputAction::RightOn => {
                self.edit.auto_next = true;
                if self.edit.frame_editing {
                    self.insert_frame_at(InsertPosition::After, None)
                } else {
                    self.goto_next_frame()
                }
            }
            InputAction::RightOff => {
                self.edit.auto_next = false;
                Ok(())
            }
            InputAction::ThumbstickDown => {
                if self.edit.frame_editing {
                    self.remove_frame(None)
                } else {
                    Ok(())
                }
            }
            InputAction::NextFrame => self.goto_next_frame(),
            InputAction::PrevFrame => self.goto_prev_frame(),
            InputAction::InsertBefore => self.insert_frame_at(InsertPosition::Before, None),
            InputAction::InsertAfter => self.insert_frame_at(InsertPosition::After, None),
            InputAction::RemoveFrame => self.remove_frame(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::editor::tests::editor_with_frames;
    use crate::schema::Point3;

    #[test]
    fn test_directional_navigates_outside_edit_mode() {
        let (mut editor, _) = editor_with_frames(3);
        editor.handle_input(InputAction::RightOn).unwrap();
        assert_eq!(editor.current_frame_index(), 1);
        assert!(editor.edit_state().auto_next);

        editor.handle_input(InputAction::RightOff).unwrap();
        assert!(!editor.edit_state().auto_next);

        editor.handle_input(InputAction::LeftOn).unwrap();
        assert_eq!(editor.current_frame_index(), 0);
        assert!(editor.edit_state().auto_prev);
        assert_eq!(editor.frame_count(), 3);
    }

    #[test]
    fn test_directional_edits_in_edit_mode() {
        let (mut editor, _) = editor_with_frames(2);
        editor.handle_input(InputAction::SecondaryDown).unwrap();
        assert!(editor.edit_state().frame_editing);

        editor.handle_input(InputAction::RightOn).unwrap();
        assert_eq!(editor.frame_count(), 3);
        assert_eq!(editor.current_frame_index(), 1);

        editor.handle_input(InputAction::LeftOn).unwrap();
        assert_eq!(editor.frame_count(), 4);
        assert_eq!(editor.current_frame_index(), 1);

        editor.handle_input(InputAction::ThumbstickDown).unwrap();
        assert_eq!(editor.frame_count(), 3);

        editor.handle_input(InputAction::SecondaryUp).unwrap();
        editor.handle_input(InputAction::ThumbstickDown).unwrap();
        assert_eq!(editor.frame_count(), 3);
    }

    #[test]
    fn test_held_gesture_auto_advances_after_stroke() {
        let (mut editor, _) = editor_with_frames(4);
        editor.handle_input(InputAction::RightOn).unwrap();
        assert_eq!(editor.current_frame_index(), 1);

        editor.handle_input(InputAction::PrimaryDown).unwrap();
        editor.subject_mut().pen = Point3::new(0.0, 0.2, 0.0);
        editor.handle_input(InputAction::PrimaryUp).unwrap();

        assert_eq!(editor.current_frame_index(), 2);
        assert_eq!(editor.animation()[1].len(), 1);
    }

    #[test]
    fn test_keyboard_commands() {
        let (mut editor, _) = editor_with_frames(1);
        editor.handle_input(InputAction::InsertAfter).unwrap();
        editor.handle_input(InputAction::InsertBefore).unwrap();
        assert_eq!(editor.frame_count(), 3);
        assert_eq!(editor.current_frame_index(), 1);

        editor.handle_input(InputAction::NextFrame).unwrap();
        assert_eq!(editor.current_frame_index(), 2);
        editor.handle_input(InputAction::PrevFrame).unwrap();
        editor.handle_input(InputAction::RemoveFrame).unwrap();
        assert_eq!(editor.frame_count(), 2);
    }

    #[test]
    fn test_action_names() {
        let action: InputAction = serde_json::from_str(r#""thumbstick_down""#).unwrap();
        assert_eq!(action, InputAction::ThumbstickDown);
        assert_eq!(
            serde_json::to_string(&InputAction::PrimaryDown).unwrap(),
            r#""primary_down""#
        );
    }
}
