//! Flipbook - Frame-based 3D stroke animation editor core.
//!
//! This crate manages a sequence of drawing frames, each holding freehand
//! strokes made of 3D points, and the state machine that keeps frame
//! navigation, stroke capture and tick-driven autoplay consistent.
//!
//! # Architecture
//!
//! The crate is split into four modules:
//!
//! - `schema`: Animation data model (points, strokes, frames) and configuration
//! - `animation`: The editor: controller, stroke capture, events, input actions
//! - `compute`: Derived rendering data (line geometry)
//! - `session`: Scripted replay of input timelines
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use flipbook::{
//!     animation::{Editor, EditorEvent, SubjectState},
//!     schema::{AnimationData, EditorConfig, Point3},
//! };
//!
//! let mut editor = Editor::new(
//!     AnimationData::with_empty_frames(2),
//!     SubjectState::default(),
//!     EditorConfig::default(),
//! )
//! .unwrap();
//! editor.subscribe(|event: &EditorEvent<'_>| println!("{}", event.name()));
//!
//! editor.start_drawing().unwrap();
//! editor.subject_mut().pen = Point3::new(0.0, 0.0, 0.01);
//! editor.tick(Duration::from_millis(16)).unwrap();
//! editor.stop_drawing().unwrap();
//!
//! println!("Strokes in frame 0: {}", editor.animation()[0].len());
//! ```

pub mod animation;
pub mod compute;
pub mod schema;
pub mod session;

// Re-export commonly used types
pub use animation::{Editor, EditorError, EditorEvent, InputAction, Subject, SubjectState};
pub use compute::LineGeometry;
pub use schema::{AnimationData, EditorConfig, Frame, Point3, Stroke};
pub use session::Session;
