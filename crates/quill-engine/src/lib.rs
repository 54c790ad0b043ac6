//! Quill engine crate.
//!
//! A retained vector-drawing surface ([`draw_node::DrawNode`]) that batches
//! dots, segments, lines, arcs and polygons into one triangle list, plus the
//! wgpu renderer that draws it.

pub mod coords;
pub mod draw_node;
pub mod logging;
pub mod paint;
pub mod render;

pub use draw_node::{DrawNode, DrawNodeConfig, DrawNodeError, LineCap, SegmentHandle, Vertex};
