use crate::coords::Vec2;
use crate::draw_node::DrawNode;
use crate::paint::Rgba8;

/// Tessellation steps for an arc of `radius`: `floor(10 × sqrt(radius))`.
///
/// NaN or negative radii yield 0.
#[inline]
pub(crate) fn arc_segments(radius: f32) -> usize {
    (10.0 * radius.sqrt()) as usize
}

impl DrawNode {
    /// Fills the circular sector starting at `start_angle` and spanning
    /// `sweep_angle` (radians) as a triangle fan around `center`.
    ///
    /// Appends `arc_segments(radius) - 1` triangles. The radius vector is
    /// advanced by a tangential step and rescaled each iteration instead of
    /// calling `sin`/`cos` per vertex.
    pub fn draw_solid_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        color: impl Into<Rgba8>,
    ) {
        let segments = arc_segments(radius);
        if segments < 2 {
            log::trace!("draw_solid_arc: radius {radius} too small to tessellate");
            return;
        }
        let color = color.into();

        let theta = -sweep_angle / (segments - 1) as f32;
        let tangential = theta.tan();
        let radial = theta.cos();

        let mut r = Vec2::new(radius * (-start_angle).cos(), radius * (-start_angle).sin());

        for _ in 0..segments - 1 {
            let p0 = center + r;
            r = (r + r.perp() * tangential) * radial;
            let p1 = center + r;
            self.push_triangle(center, p0, p1, color);
        }

        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::PI;

    use super::*;

    #[test]
    fn segment_count_follows_radius() {
        assert_eq!(arc_segments(1.0), 10);
        assert_eq!(arc_segments(4.0), 20);
        assert_eq!(arc_segments(2.0), 14);
        assert_eq!(arc_segments(f32::NAN), 0);
        assert_eq!(arc_segments(-1.0), 0);
    }

    #[test]
    fn fan_triangles_share_the_center() {
        let mut node = DrawNode::new();
        let c = Vec2::new(5.0, 5.0);
        node.draw_solid_arc(c, 9.0, 0.0, PI, Rgba8::GREEN);

        assert_eq!(node.len(), (30 - 1) * 3);
        for tri in node.vertices().as_slice().chunks(3) {
            assert_eq!(tri[0].xy(), c);
        }
    }

    #[test]
    fn rim_points_stay_on_the_circle() {
        let mut node = DrawNode::new();
        let radius = 16.0;
        node.draw_solid_arc(Vec2::zero(), radius, 0.3, 2.0 * PI, Rgba8::WHITE);

        for v in node.vertices().iter().skip(1).step_by(3) {
            assert!((v.xy().length() - radius).abs() < 1e-2);
        }
    }

    #[test]
    fn full_sweep_returns_to_start() {
        let mut node = DrawNode::new();
        node.draw_solid_arc(Vec2::zero(), 25.0, 0.0, 2.0 * PI, Rgba8::WHITE);

        let verts = node.vertices().as_slice();
        let first = verts[1].xy();
        let last = verts[verts.len() - 1].xy();
        assert!((first - last).length() < 1e-2, "{first:?} vs {last:?}");
    }

    #[test]
    fn tiny_radius_draws_nothing() {
        let mut node = DrawNode::new();
        node.draw_solid_arc(Vec2::zero(), 0.01, 0.0, PI, Rgba8::WHITE);
        assert!(node.is_empty());
    }
}
