//! Line-segment geometry built from a frame's strokes.

use crate::schema::{Frame, Stroke};

/// Geometry construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("Frame has {0} points, more than a u32 index buffer can address")]
    TooManyVertices(usize),
}

/// Vertex index for the `count`-th vertex, if it fits a `u32` index buffer.
fn vertex_index(count: usize) -> Result<u32, GeometryError> {
    u32::try_from(count).map_err(|_| GeometryError::TooManyVertices(count))
}

/// Indexed line list: one vertex per point, one index pair per segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    /// Flat vertex positions `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Segment endpoints into `positions` (vertex indices, two per segment).
    pub indices: Vec<u32>,
}

impl LineGeometry {
    /// Build geometry for every non-empty stroke in `frame`.
    pub fn from_frame(frame: &Frame) -> Result<Self, GeometryError> {
        let mut geometry = Self::default();
        geometry.fill(frame)?;
        Ok(geometry)
    }

    /// Rebuild in place, reusing allocations.
    ///
    /// Fails without touching the buffers if the frame holds more points
    /// than `u32` indices can address.
    pub fn fill(&mut self, frame: &Frame) -> Result<(), GeometryError> {
        let points = frame.point_count();
        vertex_index(points)?;

        self.positions.clear();
        self.indices.clear();
        self.positions.reserve(points * 3);
        self.indices.reserve(points.saturating_sub(frame.len()) * 2);

        for stroke in frame.strokes() {
            self.push_stroke(stroke)?;
        }
        Ok(())
    }

    fn push_stroke(&mut self, stroke: &Stroke) -> Result<(), GeometryError> {
        for (i, point) in stroke.points().iter().enumerate() {
            let vertex = vertex_index(self.vertex_count())?;
            self.positions
                .extend_from_slice(&[point.x as f32, point.y as f32, point.z as f32]);
            if i > 0 {
                self.indices.extend_from_slice(&[vertex - 1, vertex]);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.indices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex buffer bytes for GPU upload.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index buffer bytes for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Point3, Stroke};

    fn stroke(points: &[[f64; 3]]) -> Stroke {
        Stroke::from(points.iter().copied().map(Point3::from).collect::<Vec<_>>())
    }

    #[test]
    fn test_empty_frame() {
        let geometry = LineGeometry::from_frame(&Frame::new()).unwrap();
        assert!(geometry.is_empty());
        assert_eq!(geometry.segment_count(), 0);
    }

    #[test]
    fn test_strokes_do_not_connect() {
        let frame = Frame::from(vec![
            stroke(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]),
            stroke(&[]),
            stroke(&[[5.0, 5.0, 5.0]]),
            stroke(&[[2.0, 0.0, 0.0], [3.0, 0.0, 0.0]]),
        ]);
        let geometry = LineGeometry::from_frame(&frame).unwrap();

        assert_eq!(geometry.vertex_count(), 6);
        assert_eq!(geometry.indices, vec![0, 1, 1, 2, 4, 5]);
        assert_eq!(&geometry.positions[9..12], &[5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_fill_reuses_buffers() {
        let mut geometry =
            LineGeometry::from_frame(&Frame::from(vec![stroke(&[[0.0; 3], [1.0; 3]])])).unwrap();
        assert_eq!(geometry.segment_count(), 1);

        geometry.fill(&Frame::new()).unwrap();
        assert!(geometry.is_empty());
        assert!(geometry.indices.is_empty());
    }

    #[test]
    fn test_byte_views() {
        let geometry =
            LineGeometry::from_frame(&Frame::from(vec![stroke(&[[0.0; 3], [1.0, 2.0, 3.0]])]))
                .unwrap();
        assert_eq!(geometry.position_bytes().len(), 6 * 4);
        assert_eq!(geometry.index_bytes().len(), 2 * 4);
        assert_eq!(&geometry.position_bytes()[12..16], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn test_positions_narrow_to_f32() {
        let geometry =
            LineGeometry::from_frame(&Frame::from(vec![stroke(&[[0.1, -2.5, 1e-3]])])).unwrap();
        assert_eq!(geometry.positions, vec![0.1f32, -2.5, 1e-3]);
    }

    #[test]
    fn test_vertex_index_limit() {
        assert_eq!(vertex_index(0), Ok(0));
        assert_eq!(vertex_index(u32::MAX as usize), Ok(u32::MAX));
        #[cfg(target_pointer_width = "64")]
        {
            let over = u32::MAX as usize + 1;
            assert_eq!(vertex_index(over), Err(GeometryError::TooManyVertices(over)));
        }
    }
}
