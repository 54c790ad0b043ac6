use crate::coords::Vec2;
use crate::draw_node::error::{DrawNodeError, Result};
use crate::draw_node::DrawNode;
use crate::paint::Rgba8;

/// Vertices appended by every [`DrawNode::draw_segment`] call (6 triangles).
pub const SEGMENT_VERTEX_COUNT: usize = 18;

/// Start index of a segment run inside a draw node's vertex buffer.
///
/// Handles are plain positions. Removing a run shifts every run after it down
/// by [`SEGMENT_VERTEX_COUNT`]; handles held for those runs must be adjusted
/// by the caller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SegmentHandle(pub usize);

impl SegmentHandle {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Handle of the run that followed this one, after this one is removed.
    #[inline]
    pub const fn shifted_down(self) -> SegmentHandle {
        SegmentHandle(self.0.saturating_sub(SEGMENT_VERTEX_COUNT))
    }
}

impl DrawNode {
    /// Draws a thick segment from `from` to `to` with half-width `radius`.
    ///
    /// Always appends exactly [`SEGMENT_VERTEX_COUNT`] vertices and returns the
    /// index the run starts at, for later fading or removal.
    pub fn draw_segment(
        &mut self,
        from: Vec2,
        to: Vec2,
        radius: f32,
        color: impl Into<Rgba8>,
    ) -> SegmentHandle {
        let color = color.into();
        let (a, b) = (from, to);

        let n = (a - b).perp().normalize();
        let t = n.perp();

        let nw = n * radius;
        let tw = t * radius;
        let v0 = b - (nw + tw);
        let v1 = b + (nw - tw);
        let v2 = b - nw;
        let v3 = b + nw;
        let v4 = a - nw;
        let v5 = a + nw;
        let v6 = a - (nw - tw);
        let v7 = a + (nw + tw);

        let handle = SegmentHandle(self.vertices.len());

        self.push_triangle(v0, v1, v2, color);
        self.push_triangle(v3, v1, v2, color);
        self.push_triangle(v3, v4, v2, color);
        self.push_triangle(v3, v4, v5, color);
        self.push_triangle(v6, v4, v5, color);
        self.push_triangle(v6, v7, v5, color);

        self.mark_dirty();
        log::trace!("draw_segment {from:?} -> {to:?} radius={radius} at {}", handle.0);
        handle
    }

    /// Strokes consecutive `points` with [`draw_segment`](Self::draw_segment).
    ///
    /// Returns one handle per stroked pair, in order.
    pub fn draw_polyline(
        &mut self,
        points: &[Vec2],
        radius: f32,
        color: impl Into<Rgba8>,
    ) -> Vec<SegmentHandle> {
        let color = color.into();
        points
            .windows(2)
            .map(|pair| self.draw_segment(pair[0], pair[1], radius, color))
            .collect()
    }

    /// Multiplies the alpha of the segment at `handle` by `factor`.
    pub fn fade_by_segment(&mut self, handle: SegmentHandle, factor: f32) -> Result<()> {
        self.check_segment(handle)?;
        self.fade_by_vertices(handle.0, SEGMENT_VERTEX_COUNT, factor)
    }

    /// Sets the alpha of the segment at `handle` to `round(255 × factor)`.
    pub fn fade_to_segment(&mut self, handle: SegmentHandle, factor: f32) -> Result<()> {
        self.check_segment(handle)?;
        self.fade_to_vertices(handle.0, SEGMENT_VERTEX_COUNT, factor)
    }

    /// Removes the segment run at `handle`.
    ///
    /// When the buffer holds nothing but this one run the node is fully
    /// cleared instead. Runs after `handle` shift down.
    pub fn remove_segment(&mut self, handle: SegmentHandle) -> Result<()> {
        self.check_segment(handle)?;

        if self.vertices.len() == SEGMENT_VERTEX_COUNT {
            self.clear();
            return Ok(());
        }

        self.vertices.remove_range(handle.0, SEGMENT_VERTEX_COUNT)?;
        self.mark_dirty();
        Ok(())
    }

    fn check_segment(&self, handle: SegmentHandle) -> Result<()> {
        let len = self.vertices.len();
        let in_range = handle
            .0
            .checked_add(SEGMENT_VERTEX_COUNT)
            .is_some_and(|end| end <= len);

        if in_range {
            Ok(())
        } else {
            log::warn!("segment handle {} rejected (buffer holds {len} vertices)", handle.0);
            Err(DrawNodeError::InvalidHandle { handle: handle.0, len })
        }
    }
}
