//! Retained vector-drawing surface.
//!
//! Responsibilities:
//! - build colored triangles for dots, segments, lines, arcs, circles and polygons
//! - keep them in one index-addressable vertex buffer (segment handles, fades, removal)
//! - cache the derived draw list and rebuild it only after a mutation
//!
//! Shape builders live one per file under `draw_node::shapes`.

mod buffer;
mod cache;
mod config;
mod error;
mod node;
mod vertex;

pub mod shapes;

pub use buffer::{VertexBuffer, DEFAULT_CAPACITY};
pub use config::DrawNodeConfig;
pub use error::{DrawNodeError, Result};
pub use node::DrawNode;
pub use shapes::{miter_offsets, LineCap, SegmentHandle, SEGMENT_VERTEX_COUNT};
pub use vertex::Vertex;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{BlendFunc, Rgba8};
    use crate::render::TriangleRenderer;

    /// Records every submission instead of talking to a GPU.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(BlendFunc, Vec<Vertex>, usize)>,
    }

    impl TriangleRenderer for RecordingRenderer {
        fn draw_triangles(&mut self, blend: BlendFunc, vertices: &[Vertex], primitive_count: usize) {
            self.calls.push((blend, vertices.to_vec(), primitive_count));
        }
    }

    fn busy_node() -> DrawNode {
        let mut node = DrawNode::new();
        node.draw_dot(Vec2::new(1.0, 1.0), 2.0, Rgba8::RED);
        node.draw_segment(Vec2::zero(), Vec2::new(5.0, 5.0), 1.0, Rgba8::GREEN);
        node.draw_line(Vec2::zero(), Vec2::new(0.0, 9.0), 1.5, Rgba8::BLUE, LineCap::Round);
        node.draw_solid_arc(Vec2::zero(), 3.0, 0.0, 1.0, Rgba8::WHITE);
        node.draw_circle_outline(Vec2::zero(), 4.0, 0.5, Rgba8::WHITE);
        node.draw_rect_bordered(Rect::new(0.0, 0.0, 4.0, 4.0), Rgba8::RED, 1.0, Rgba8::BLACK);
        node.draw_circle(Vec2::zero(), 4.0, Rgba8::GREEN);
        node
    }

    #[test]
    fn every_builder_keeps_whole_triangles() {
        let mut node = busy_node();
        assert_eq!(node.len() % 3, 0);

        node.set_feather_edges(true);
        node.draw_polygon(
            &[Vec2::zero(), Vec2::new(3.0, 0.0), Vec2::new(0.0, 3.0)],
            Rgba8::RED,
            0.0,
            Rgba8::TRANSPARENT,
        );
        assert_eq!(node.len() % 3, 0);
    }

    #[test]
    fn draw_submits_len_over_three_primitives() {
        let mut node = busy_node();
        let mut r = RecordingRenderer::default();
        node.draw(&mut r);

        assert_eq!(r.calls.len(), 1);
        let (blend, verts, count) = &r.calls[0];
        assert_eq!(*blend, BlendFunc::ALPHA_BLEND);
        assert_eq!(verts.as_slice(), node.vertices().as_slice());
        assert_eq!(*count, node.len() / 3);
    }

    #[test]
    fn draw_list_is_rebuilt_once_per_mutation_batch() {
        let mut node = DrawNode::new();
        let mut r = RecordingRenderer::default();

        for i in 0..10 {
            node.draw_dot(Vec2::new(i as f32, 0.0), 1.0, Rgba8::RED);
        }
        node.draw(&mut r);
        node.draw(&mut r);
        assert_eq!(node.rebuild_count(), 1);
        assert!(!node.is_dirty());

        node.draw_dot(Vec2::zero(), 1.0, Rgba8::RED);
        node.draw(&mut r);
        assert_eq!(node.rebuild_count(), 2);
        assert_eq!(r.calls.last().unwrap().2, 22);
    }

    #[test]
    fn alpha_filter_drops_exactly_the_transparent_vertices() {
        let mut node = DrawNode::new();
        node.draw_dot(Vec2::zero(), 5.0, Rgba8::RED);
        node.draw_dot(Vec2::new(20.0, 0.0), 5.0, Rgba8::RED);
        // Make a single vertex transparent, not a whole triangle.
        node.fade_to_vertices(4, 1, 0.0).unwrap();
        node.set_filter_by_alpha(true);

        assert_eq!(node.draw_list().len(), 12 - 1);

        let mut r = RecordingRenderer::default();
        node.draw(&mut r);
        assert_eq!(r.calls[0].2, 11 / 3);
    }

    #[test]
    fn toggling_the_filter_rebuilds() {
        let mut node = DrawNode::new();
        let h = node.draw_segment(Vec2::zero(), Vec2::new(1.0, 0.0), 1.0, Rgba8::WHITE);
        node.fade_to_segment(h, 0.0).unwrap();
        assert_eq!(node.draw_list().len(), SEGMENT_VERTEX_COUNT);

        node.set_filter_by_alpha(true);
        assert!(node.is_dirty());
        assert!(node.draw_list().is_empty());
    }

    #[test]
    fn fully_filtered_list_submits_nothing() {
        let mut node = DrawNode::new();
        node.draw_dot(Vec2::zero(), 1.0, Rgba8::TRANSPARENT);
        node.set_filter_by_alpha(true);

        let mut r = RecordingRenderer::default();
        node.draw(&mut r);
        assert!(r.calls.is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut node = busy_node();
        let mut r = RecordingRenderer::default();
        node.draw(&mut r);

        node.clear();
        assert_eq!(node.len(), 0);
        assert!(node.is_dirty());
        assert_eq!(node.content_bounds(), Rect::default());
        assert!(node.vertices().capacity() >= DEFAULT_CAPACITY);

        node.draw(&mut r);
        assert_eq!(r.calls.len(), 1, "an empty node submits no primitives");
        assert!(node.draw_list().is_empty());
    }

    #[test]
    fn blend_func_is_forwarded() {
        let mut node = DrawNode::with_config(DrawNodeConfig {
            blend: BlendFunc::ADDITIVE,
            initial_capacity: 16,
            ..DrawNodeConfig::default()
        });
        node.draw_dot(Vec2::zero(), 1.0, Rgba8::WHITE);

        let mut r = RecordingRenderer::default();
        node.draw(&mut r);
        assert_eq!(r.calls[0].0, BlendFunc::ADDITIVE);

        node.set_blend_func(BlendFunc::OPAQUE);
        node.draw(&mut r);
        assert_eq!(r.calls[1].0, BlendFunc::OPAQUE);
        assert_eq!(node.rebuild_count(), 1);
    }

    #[test]
    fn fade_range_out_of_bounds_is_an_error() {
        let mut node = DrawNode::new();
        node.draw_dot(Vec2::zero(), 1.0, Rgba8::WHITE);
        let err = node.fade_by_vertices(3, 6, 0.5).unwrap_err();
        assert_eq!(err, DrawNodeError::RangeOutOfBounds { start: 3, count: 6, len: 6 });
        assert!(node.vertices().iter().all(|v| v.color.a == 255));
    }

    #[test]
    fn error_messages_name_the_bounds() {
        let err = DrawNodeError::InvalidHandle { handle: 36, len: 18 };
        assert_eq!(err.to_string(), "segment handle 36 is out of range for a buffer of 18 vertices");
    }
}
