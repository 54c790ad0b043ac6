use core::f32::consts::PI;

use crate::coords::Vec2;
use crate::draw_node::DrawNode;
use crate::paint::Rgba8;

/// How a thick line's endpoints are finished.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum LineCap {
    /// Ends flush with the endpoints.
    #[default]
    Butt,
    /// Extends both ends outward by the line width.
    Square,
    /// Adds a half-disc of radius `width` at each end.
    Round,
}

impl DrawNode {
    /// Draws a quad between `from` and `to`, offset `width` to each side.
    ///
    /// `width <= 0` draws nothing. Round caps append two solid arcs on top of
    /// the 6 quad vertices.
    pub fn draw_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: impl Into<Rgba8>,
        cap: LineCap,
    ) {
        debug_assert!(!(width < 0.0), "draw_line: negative width {width}");
        if !(width > 0.0) {
            log::warn!("draw_line: ignoring non-positive width {width}");
            return;
        }
        let color = color.into();

        let mut a = from;
        let mut b = to;

        let dir = (a - b).normalize();
        if cap == LineCap::Square {
            let ext = dir * width;
            a += ext;
            b -= ext;
        }

        let nw = dir.perp() * width;
        let v0 = b - nw;
        let v1 = b + nw;
        let v2 = a - nw;
        let v3 = a + nw;

        self.push_triangle(v1, v2, v0, color);
        self.push_triangle(v1, v2, v3, color);

        if cap == LineCap::Round {
            let mb = (v1.y - b.y).atan2(v1.x - b.x);
            let ma = (v2.y - a.y).atan2(v2.x - a.x);

            self.draw_solid_arc(a, width, -ma, -PI, color);
            self.draw_solid_arc(b, width, -mb, -PI, color);
        }

        self.mark_dirty();
    }
}
