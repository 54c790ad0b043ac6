use crate::coords::Rect;
use crate::draw_node::DrawNode;
use crate::paint::Rgba8;

impl DrawNode {
    /// Fills `rect` with `color`.
    pub fn draw_rect(&mut self, rect: Rect, color: impl Into<Rgba8>) {
        self.draw_polygon(&rect.corners(), color, 0.0, Rgba8::TRANSPARENT);
    }

    /// Fills `rect` and strokes it with a `border_width` outline.
    pub fn draw_rect_bordered(
        &mut self,
        rect: Rect,
        fill: impl Into<Rgba8>,
        border_width: f32,
        border_color: impl Into<Rgba8>,
    ) {
        self.draw_polygon(&rect.corners(), fill, border_width, border_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn rect_is_a_blue_quad() {
        let mut node = DrawNode::new();
        node.draw_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba8::BLUE);

        assert_eq!(node.len(), 6);
        assert!(node.vertices().iter().all(|v| v.color == Rgba8::BLUE));
        assert_eq!(node.content_bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn negative_size_rect_is_normalized() {
        let mut node = DrawNode::new();
        node.draw_rect(Rect::new(10.0, 10.0, -10.0, -10.0), Rgba8::BLUE);
        assert_eq!(node.vertices().get(0).unwrap().xy(), Vec2::zero());
    }

    #[test]
    fn bordered_rect_adds_outline() {
        let mut node = DrawNode::new();
        node.draw_rect_bordered(Rect::new(0.0, 0.0, 10.0, 10.0), Rgba8::WHITE, 1.0, Rgba8::BLACK);
        assert_eq!(node.len(), 6 + 24);
        assert_eq!(node.vertices().iter().filter(|v| v.color == Rgba8::BLACK).count(), 24);
    }
}
