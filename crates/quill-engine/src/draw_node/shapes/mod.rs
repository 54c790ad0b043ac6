//! Geometry builders, one file per primitive.
//!
//! Each file adds its `draw_*` methods to [`DrawNode`](super::DrawNode).
//! Builders append whole triangles and mark the node dirty.

pub(crate) mod arc;
pub(crate) mod circle;
pub(crate) mod dot;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rect;
pub(crate) mod segment;

pub use line::LineCap;
pub use polygon::miter_offsets;
pub use segment::{SegmentHandle, SEGMENT_VERTEX_COUNT};
