use crate::paint::BlendFunc;

use super::buffer::DEFAULT_CAPACITY;

/// Construction parameters for a [`DrawNode`](super::DrawNode).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawNodeConfig {
    /// Vertices reserved up front and after every `clear()`. A tuning hint only.
    pub initial_capacity: usize,

    /// Blend function handed to the renderer with every submission.
    pub blend: BlendFunc,

    /// Drop zero-alpha vertices when rebuilding the draw list.
    ///
    /// Filtering is per vertex: partially transparent triangles lose vertices
    /// and the triangles after them are misassembled.
    pub filter_by_alpha: bool,

    /// Emit a 0.5-unit soft fringe (and matching inset) around polygons that
    /// have no explicit border.
    ///
    /// Off by default: un-bordered polygons are then exactly their fan triangles.
    pub feather_edges: bool,
}

impl Default for DrawNodeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            blend: BlendFunc::ALPHA_BLEND,
            filter_by_alpha: false,
            feather_edges: false,
        }
    }
}
