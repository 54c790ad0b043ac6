//! Rendering boundary.
//!
//! A draw node hands its draw list to a [`TriangleRenderer`]; the crate ships
//! one wgpu implementation, [`TriangleListRenderer`].
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod triangle_list;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle_list::{TriangleFrame, TriangleListRenderer};

use crate::draw_node::Vertex;
use crate::paint::BlendFunc;

/// Sink for triangle-list submissions.
///
/// `vertices` holds `primitive_count * 3` vertices (plus up to two trailing
/// vertices left over after alpha filtering, which must be ignored).
pub trait TriangleRenderer {
    fn draw_triangles(&mut self, blend: BlendFunc, vertices: &[Vertex], primitive_count: usize);
}
