use crate::coords::Vec2;
use crate::draw_node::DrawNode;
use crate::paint::Rgba8;

/// Half-width of the soft fringe drawn around un-bordered polygons.
const FEATHER: f32 = 0.5;

/// Per-vertex miter extrusion vectors for a closed polygon.
///
/// For vertex `i` with incoming edge normal `n1` and outgoing edge normal
/// `n2` (both unit, `perp(edge).normalize()`), the offset is
/// `(n1 + n2) / (dot(n1, n2) + 1)`. Scaling it by `w` moves both adjacent
/// edges by exactly `w` regardless of the corner angle.
pub fn miter_offsets(points: &[Vec2]) -> Vec<Vec2> {
    let count = points.len();
    (0..count)
        .map(|i| {
            let v0 = points[(i + count - 1) % count];
            let v1 = points[i];
            let v2 = points[(i + 1) % count];

            let n1 = (v1 - v0).perp().normalize();
            let n2 = (v2 - v1).perp().normalize();

            (n1 + n2) * (1.0 / (n1.dot(n2) + 1.0))
        })
        .collect()
}

impl DrawNode {
    /// Fills a polygon and optionally strokes its outline.
    ///
    /// The interior is fan-triangulated from `points[0]`, so the polygon must
    /// be convex (or star-shaped from its first vertex). An outline is drawn
    /// when `fill.a > 0 && border_width > 0`: one quad per edge extruded
    /// `border_width` inward and outward along the miter offsets.
    ///
    /// Without an outline and with feathering enabled, fill vertices are moved
    /// 0.5 against their miter offsets and the edges get a 0.5-wide quad strip
    /// in the fill color.
    ///
    /// Fewer than 3 points draw nothing, outline included. A 2-point
    /// "polygon" has opposite edge normals at both ends, so its miter offsets
    /// divide by `dot + 1 == 0`; stroke such a span with
    /// [`draw_segment`](Self::draw_segment) or [`draw_line`](Self::draw_line).
    pub fn draw_polygon(
        &mut self,
        points: &[Vec2],
        fill: impl Into<Rgba8>,
        border_width: f32,
        border_color: impl Into<Rgba8>,
    ) {
        let count = points.len();
        if count < 3 {
            log::debug!("draw_polygon: {count} points do not form a polygon");
            return;
        }
        let fill = fill.into();
        let border_color = border_color.into();

        let offsets = miter_offsets(points);

        let outline = fill.a > 0 && border_width > 0.0;
        let feather = !outline && self.feather_edges;
        let inset = if feather { FEATHER } else { 0.0 };

        let inner = |i: usize| points[i] - offsets[i] * inset;
        for i in 0..count - 2 {
            self.push_triangle(inner(0), inner(i + 1), inner(i + 2), fill);
        }

        let (half_width, edge_color) = if outline {
            (border_width, border_color)
        } else if feather {
            (FEATHER, fill)
        } else {
            self.mark_dirty();
            return;
        };

        for i in 0..count {
            let j = (i + 1) % count;
            let (v0, v1) = (points[i], points[j]);
            let (o0, o1) = (offsets[i] * half_width, offsets[j] * half_width);

            let inner0 = v0 - o0;
            let inner1 = v1 - o1;
            let outer0 = v0 + o0;
            let outer1 = v1 + o1;

            self.push_triangle(inner0, inner1, outer1, edge_color);
            self.push_triangle(inner0, outer0, outer1, edge_color);
        }

        self.mark_dirty();
    }
}
