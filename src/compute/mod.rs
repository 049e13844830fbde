//! Compute module - Derived data built from the animation for rendering.

mod geometry;

pub use geometry::*;
