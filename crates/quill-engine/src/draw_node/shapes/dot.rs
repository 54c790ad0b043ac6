use crate::coords::Vec2;
use crate::draw_node::DrawNode;
use crate::paint::Rgba8;

impl DrawNode {
    /// Draws an axis-aligned square of half-width `radius` around `center`.
    ///
    /// Appends 2 triangles (6 vertices).
    pub fn draw_dot(&mut self, center: Vec2, radius: f32, color: impl Into<Rgba8>) {
        let color = color.into();
        log::trace!("draw_dot center={center:?} radius={radius}");

        let a = Vec2::new(center.x - radius, center.y - radius);
        let b = Vec2::new(center.x - radius, center.y + radius);
        let c = Vec2::new(center.x + radius, center.y + radius);
        let d = Vec2::new(center.x + radius, center.y - radius);

        self.push_triangle(a, b, c, color);
        self.push_triangle(a, c, d, color);
        self.mark_dirty();
    }
}
