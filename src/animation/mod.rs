//! Frame navigation, autoplay and stroke capture.
//!
//! Everything hangs off [`Editor`], which owns the [`AnimationData`] for the
//! editing session:
//!
//! - **Controller** (`controller`): current frame, wraparound navigation,
//!   frame insertion/removal, and tick-driven autoplay.
//! - **Capture** (`capture`): the idle/drawing state machine that turns
//!   sampled pen positions into strokes, with a minimum-distance filter.
//! - **Input** (`input`): device-neutral actions for the shell to feed in.
//!
//! # Frame changes while drawing
//!
//! A stroke never spans two frames. Every operation that changes which frame
//! is current finishes the active stroke at the pen position first, and opens
//! a new one in the incoming frame afterwards:
//!
//! ```text
//! LINE_FINISHED (old frame) → EXIT_FRAME → index update → LINE_STARTED (new frame) → ENTER_FRAME
//! ```
//!
//! # Removal policy
//!
//! Removing the only frame inserts an empty replacement, so a non-empty
//! animation always keeps a valid current frame.
//!
//! [`AnimationData`]: crate::schema::AnimationData

mod capture;
mod controller;
mod editor;
mod error;
mod events;
mod input;
mod subject;

pub use controller::InsertPosition;
pub use editor::{EditState, Editor};
pub use error::EditorError;
pub use events::{EditorEvent, EventListener, EventRecord, LineChange};
pub use input::InputAction;
pub use subject::{FrameInterval, Subject, SubjectState};
