use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::draw_node::DrawNode;
use crate::paint::Rgba8;

/// Segment count used by the single-radius circle helpers.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 360;

/// `count` points on the circle, `sweep / segments` radians apart, starting at angle 0.
fn sample_circle(
    center: Vec2,
    radius: f32,
    sweep: f32,
    segments: usize,
    count: usize,
) -> impl Iterator<Item = Vec2> {
    let increment = sweep as f64 / segments as f64;
    (0..count).map(move |i| {
        let theta = increment * i as f64;
        center + Vec2::new(theta.cos() as f32, theta.sin() as f32) * radius
    })
}

impl DrawNode {
    /// Strokes a full circle with 360 segments of half-width `line_width`.
    pub fn draw_circle_outline(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        color: impl Into<Rgba8>,
    ) {
        self.draw_circle_outline_with(center, radius, line_width, TAU, DEFAULT_CIRCLE_SEGMENTS, color);
    }

    /// Strokes `segments` chords spanning `sweep` radians, each one a
    /// [`draw_segment`](Self::draw_segment) run.
    pub fn draw_circle_outline_with(
        &mut self,
        center: Vec2,
        radius: f32,
        line_width: f32,
        sweep: f32,
        segments: usize,
        color: impl Into<Rgba8>,
    ) {
        if segments == 0 {
            return;
        }
        let color = color.into();

        let points: Vec<Vec2> = sample_circle(center, radius, sweep, segments, segments + 1).collect();
        for chord in points.windows(2) {
            self.draw_segment(chord[0], chord[1], line_width, color);
        }
    }

    /// Fills a full circle approximated by a 360-gon.
    pub fn draw_circle(&mut self, center: Vec2, radius: f32, color: impl Into<Rgba8>) {
        self.draw_circle_with(center, radius, TAU, DEFAULT_CIRCLE_SEGMENTS, color);
    }

    /// Fills the polygon through `segments` points spread over `sweep` radians.
    pub fn draw_circle_with(
        &mut self,
        center: Vec2,
        radius: f32,
        sweep: f32,
        segments: usize,
        color: impl Into<Rgba8>,
    ) {
        let points: Vec<Vec2> = sample_circle(center, radius, sweep, segments, segments).collect();
        self.draw_polygon(&points, color, 0.0, Rgba8::TRANSPARENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw_node::SEGMENT_VERTEX_COUNT;

    #[test]
    fn filled_circle_is_a_358_triangle_fan() {
        let mut node = DrawNode::new();
        node.draw_circle(Vec2::new(50.0, 50.0), 10.0, Rgba8::GREEN);

        assert_eq!(node.len(), (360 - 2) * 3);
        assert!(node.vertices().iter().all(|v| v.color == Rgba8::GREEN));
    }

    #[test]
    fn filled_circle_points_lie_on_radius() {
        let mut node = DrawNode::new();
        let c = Vec2::new(3.0, -4.0);
        node.draw_circle_with(c, 10.0, TAU, 12, Rgba8::WHITE);
        for v in node.vertices().iter() {
            assert!(((v.xy() - c).length() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn half_sweep_fill_stays_on_one_side_of_center() {
        let mut node = DrawNode::new();
        let c = Vec2::new(3.0, -4.0);
        node.draw_circle_with(c, 10.0, TAU / 2.0, 16, Rgba8::BLUE);

        assert_eq!(node.len(), (16 - 2) * 3);
        for v in node.vertices().iter() {
            assert!(v.xy().y >= c.y - 1e-4, "{:?}", v.xy());
        }
    }

    #[test]
    fn outline_is_one_segment_per_chord() {
        let mut node = DrawNode::new();
        node.draw_circle_outline_with(Vec2::zero(), 20.0, 1.0, TAU, 24, Rgba8::RED);
        assert_eq!(node.len(), 24 * SEGMENT_VERTEX_COUNT);
    }

    #[test]
    fn partial_sweep_stays_in_upper_half() {
        let mut node = DrawNode::new();
        node.draw_circle_outline_with(Vec2::zero(), 20.0, 0.5, TAU / 2.0, 16, Rgba8::RED);
        let b = node.content_bounds();
        assert!(b.min().y > -1.0, "{b:?}");
    }

    #[test]
    fn zero_segments_draw_nothing() {
        let mut node = DrawNode::new();
        node.draw_circle_outline_with(Vec2::zero(), 5.0, 1.0, TAU, 0, Rgba8::RED);
        node.draw_circle_with(Vec2::zero(), 5.0, TAU, 0, Rgba8::RED);
        assert!(node.is_empty());
    }
}
