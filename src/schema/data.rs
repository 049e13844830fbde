//! Animation data types: points, strokes, frames and the frame sequence.
//!
//! The serialized shape is nested arrays of `{x, y, z}` objects:
//! `[[[{"x":0,"y":0,"z":0}, ...], ...], ...]` (frames → strokes → points).

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// A point in the subject's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// Origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &Point3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// One continuous pen-down-to-pen-up drawing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke(Vec<Point3>);

impl Stroke {
    /// Start a stroke at a single point.
    pub fn starting_at(point: Point3) -> Self {
        Self(vec![point])
    }

    pub fn points(&self) -> &[Point3] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recently appended point.
    pub fn last(&self) -> Option<&Point3> {
        self.0.last()
    }

    pub(crate) fn push(&mut self, point: Point3) {
        self.0.push(point);
    }
}

impl From<Vec<Point3>> for Stroke {
    fn from(points: Vec<Point3>) -> Self {
        Self(points)
    }
}

/// One page of the animation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame(Vec<Stroke>);

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.0
    }

    /// Number of strokes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.0.iter().map(Stroke::len).sum()
    }

    pub(crate) fn push_stroke(&mut self, stroke: Stroke) {
        self.0.push(stroke);
    }

    pub(crate) fn last_stroke_mut(&mut self) -> Option<&mut Stroke> {
        self.0.last_mut()
    }
}

impl From<Vec<Stroke>> for Frame {
    fn from(strokes: Vec<Stroke>) -> Self {
        Self(strokes)
    }
}

/// Frame index outside the valid range for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Frame index {index} out of range for animation with {len} frames")]
pub struct FrameIndexError {
    pub index: usize,
    pub len: usize,
}

/// Ordered frame sequence in playback order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationData(Vec<Frame>);

impl AnimationData {
    /// Create an animation with `count` empty frames.
    pub fn with_empty_frames(count: usize) -> Self {
        Self(vec![Frame::new(); count])
    }

    pub fn frames(&self) -> &[Frame] {
        &self.0
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.0.get(index)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of strokes across all frames.
    pub fn stroke_count(&self) -> usize {
        self.0.iter().map(Frame::len).sum()
    }

    /// Total number of points across all frames.
    pub fn point_count(&self) -> usize {
        self.0.iter().map(Frame::point_count).sum()
    }

    pub(crate) fn frame_mut(&mut self, index: usize) -> Result<&mut Frame, FrameIndexError> {
        let len = self.0.len();
        self.0.get_mut(index).ok_or(FrameIndexError { index, len })
    }

    /// Insert an empty frame at `index` (0 ≤ index ≤ len).
    pub(crate) fn insert_empty(&mut self, index: usize) -> Result<(), FrameIndexError> {
        if index > self.0.len() {
            return Err(FrameIndexError {
                index,
                len: self.0.len(),
            });
        }
        self.0.insert(index, Frame::new());
        Ok(())
    }

    /// Remove and return the frame at `index` (0 ≤ index < len).
    pub(crate) fn remove(&mut self, index: usize) -> Result<Frame, FrameIndexError> {
        if index >= self.0.len() {
            return Err(FrameIndexError {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }
}

impl From<Vec<Frame>> for AnimationData {
    fn from(frames: Vec<Frame>) -> Self {
        Self(frames)
    }
}

impl Index<usize> for AnimationData {
    type Output = Frame;

    fn index(&self, index: usize) -> &Frame {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        assert_eq!(b.distance_to(&b), 0.0);
    }

    #[test]
    fn test_interchange_shape() {
        let data = AnimationData::from(vec![
            Frame::from(vec![Stroke::from(vec![
                Point3::new(0.0, 1.0, 2.0),
                Point3::new(0.5, -1.0, 0.25),
            ])]),
            Frame::new(),
        ]);

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"[[[{"x":0.0,"y":1.0,"z":2.0},{"x":0.5,"y":-1.0,"z":0.25}]],[]]"#
        );

        let decoded: AnimationData = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_coordinates_keep_full_precision() {
        let input = r#"[[[{"x":0.123456789012,"y":1e-12,"z":-3.3333333333}]]]"#;
        let decoded: AnimationData = serde_json::from_str(input).unwrap();
        assert_eq!(decoded[0].strokes()[0].points()[0].x, 0.123456789012);

        let output = serde_json::to_string(&decoded).unwrap();
        let expected: serde_json::Value = serde_json::from_str(input).unwrap();
        let actual: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_integer_coordinates() {
        let decoded: AnimationData =
            serde_json::from_str(r#"[[[{"x":1,"y":2,"z":3}]],[[]]]"#).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].strokes()[0].points(), &[Point3::new(1.0, 2.0, 3.0)]);
        assert!(decoded[1].strokes()[0].is_empty());
        assert_eq!(decoded.stroke_count(), 2);
        assert_eq!(decoded.point_count(), 1);
    }

    #[test]
    fn test_insert_bounds() {
        let mut data = AnimationData::with_empty_frames(2);
        assert!(data.insert_empty(2).is_ok());
        assert_eq!(data.len(), 3);

        let err = data.insert_empty(5).unwrap_err();
        assert_eq!(err, FrameIndexError { index: 5, len: 3 });
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn test_remove_bounds() {
        let mut data = AnimationData::from(vec![
            Frame::from(vec![Stroke::starting_at(Point3::ZERO)]),
            Frame::new(),
        ]);

        let removed = data.remove(0).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(data.len(), 1);
        assert!(data[0].is_empty());

        assert_eq!(
            data.remove(1).unwrap_err(),
            FrameIndexError { index: 1, len: 1 }
        );
    }
}
