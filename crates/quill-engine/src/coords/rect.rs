use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Builds the rectangle spanning two corner points in any order.
    #[inline]
    pub fn from_points(a: Vec2, b: Vec2) -> Self {
        let min = Vec2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vec2::new(a.x.max(b.x), a.y.max(b.y));
        Self::from_origin_size(min, max - min)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        Rect::from_points(self.min(), self.max())
    }

    /// Corners in winding order: min, (max.x, min.y), max, (min.x, max.y).
    #[inline]
    pub fn corners(self) -> [Vec2; 4] {
        let r = self.normalized();
        let (lo, hi) = (r.min(), r.max());
        [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)]
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[inline]
    pub fn union(self, other: Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        let lo = Vec2::new(a.origin.x.min(b.origin.x), a.origin.y.min(b.origin.y));
        let hi = Vec2::new(a.max().x.max(b.max().x), a.max().y.max(b.max().y));
        Rect::from_points(lo, hi)
    }

    /// Grows the rectangle so it contains `p`.
    #[inline]
    pub fn include_point(self, p: Vec2) -> Rect {
        self.union(Rect::from_origin_size(p, Vec2::zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let rect = r(10.0, 0.0, -4.0, 5.0);
        let n = rect.normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── corners ───────────────────────────────────────────────────────────

    #[test]
    fn corners_follow_winding_order() {
        let c = r(0.0, 0.0, 10.0, 5.0).corners();
        assert_eq!(c[0], Vec2::new(0.0, 0.0));
        assert_eq!(c[1], Vec2::new(10.0, 0.0));
        assert_eq!(c[2], Vec2::new(10.0, 5.0));
        assert_eq!(c[3], Vec2::new(0.0, 5.0));
    }

    // ── union ─────────────────────────────────────────────────────────────

    #[test]
    fn union_covers_both() {
        let u = r(0.0, 0.0, 5.0, 5.0).union(r(10.0, -2.0, 2.0, 2.0));
        assert_eq!(u, r(0.0, -2.0, 12.0, 7.0));
    }

    #[test]
    fn include_point_from_degenerate_rect() {
        let start = Rect::from_origin_size(Vec2::new(1.0, 1.0), Vec2::zero());
        let grown = start.include_point(Vec2::new(-3.0, 4.0));
        assert_eq!(grown, r(-3.0, 1.0, 4.0, 3.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
