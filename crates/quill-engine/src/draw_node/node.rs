use crate::coords::{Rect, Vec2};
use crate::paint::{BlendFunc, Rgba8};
use crate::render::TriangleRenderer;

use super::buffer::VertexBuffer;
use super::cache::RenderCache;
use super::config::DrawNodeConfig;
use super::error::Result;
use super::Vertex;

/// Retained, mutable vector-drawing surface.
///
/// Builder calls (`draw_dot`, `draw_segment`, `draw_polygon`, ...) append
/// triangles to one vertex buffer and mark the node dirty. Once per frame
/// [`draw`](Self::draw) rebuilds the cached draw list if needed and submits it
/// as a triangle list.
///
/// The node exclusively owns its buffer; callers get read-only access through
/// [`vertices`](Self::vertices).
#[derive(Debug)]
pub struct DrawNode {
    pub(super) vertices: VertexBuffer,
    cache: RenderCache,
    blend: BlendFunc,
    filter_by_alpha: bool,
    pub(super) feather_edges: bool,
    initial_capacity: usize,
    bounds: Option<Rect>,
}

impl Default for DrawNode {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawNode {
    pub fn new() -> Self {
        Self::with_config(DrawNodeConfig::default())
    }

    pub fn with_config(config: DrawNodeConfig) -> Self {
        let DrawNodeConfig {
            initial_capacity,
            blend,
            filter_by_alpha,
            feather_edges,
        } = config;

        Self {
            vertices: VertexBuffer::with_capacity(initial_capacity),
            cache: RenderCache::new(),
            blend,
            filter_by_alpha,
            feather_edges,
            initial_capacity,
            bounds: None,
        }
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True when the cached draw list is stale.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    /// Number of times the draw list has been rebuilt.
    #[inline]
    pub fn rebuild_count(&self) -> u64 {
        self.cache.rebuilds()
    }

    #[inline]
    pub fn blend_func(&self) -> BlendFunc {
        self.blend
    }

    #[inline]
    pub fn set_blend_func(&mut self, blend: BlendFunc) {
        self.blend = blend;
    }

    #[inline]
    pub fn filter_by_alpha(&self) -> bool {
        self.filter_by_alpha
    }

    /// Toggles alpha filtering; the draw list is rebuilt on the next draw.
    pub fn set_filter_by_alpha(&mut self, enabled: bool) {
        if self.filter_by_alpha != enabled {
            self.filter_by_alpha = enabled;
            self.cache.invalidate();
        }
    }

    #[inline]
    pub fn feather_edges(&self) -> bool {
        self.feather_edges
    }

    #[inline]
    pub fn set_feather_edges(&mut self, enabled: bool) {
        self.feather_edges = enabled;
    }

    /// Bounding box of every vertex appended since the last `clear()`.
    ///
    /// Removing or fading geometry does not shrink it.
    #[inline]
    pub fn content_bounds(&self) -> Rect {
        self.bounds.unwrap_or_default()
    }

    // ── mutation ──────────────────────────────────────────────────────────

    /// Multiplies the alpha of `count` vertices starting at `start` by `factor`.
    pub fn fade_by_vertices(&mut self, start: usize, count: usize, factor: f32) -> Result<()> {
        self.vertices
            .map_range(start, count, |v| v.color = v.color.scale_alpha(factor))?;
        self.cache.invalidate();
        Ok(())
    }

    /// Sets the alpha of `count` vertices starting at `start` to `round(255 × factor)`.
    pub fn fade_to_vertices(&mut self, start: usize, count: usize, factor: f32) -> Result<()> {
        self.vertices
            .map_range(start, count, |v| v.color = v.color.with_alpha_factor(factor))?;
        self.cache.invalidate();
        Ok(())
    }

    /// Discards all geometry, drops the cached draw list and resets the bounds.
    pub fn clear(&mut self) {
        log::debug!("draw node cleared ({} vertices dropped)", self.vertices.len());
        self.vertices.reset(self.initial_capacity);
        self.cache.discard();
        self.bounds = None;
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Returns the current draw list, rebuilding it if the node is dirty.
    pub fn draw_list(&mut self) -> &[Vertex] {
        self.cache.resolve(self.vertices.as_slice(), self.filter_by_alpha)
    }

    /// Submits the draw list to `renderer` as `len / 3` triangles.
    ///
    /// An empty list submits nothing.
    pub fn draw<R: TriangleRenderer + ?Sized>(&mut self, renderer: &mut R) {
        let blend = self.blend;
        let list = self.cache.resolve(self.vertices.as_slice(), self.filter_by_alpha);
        let primitive_count = list.len() / 3;
        if primitive_count == 0 {
            return;
        }
        renderer.draw_triangles(blend, list, primitive_count);
    }

    // ── builder plumbing ──────────────────────────────────────────────────

    /// Appends one uniformly colored triangle.
    pub(super) fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba8) {
        self.vertices
            .push_triangle(Vertex::at(a, color), Vertex::at(b, color), Vertex::at(c, color));

        let seed = self.bounds.unwrap_or(Rect::from_origin_size(a, Vec2::zero()));
        self.bounds = Some(seed.include_point(a).include_point(b).include_point(c));
    }

    #[inline]
    pub(super) fn mark_dirty(&mut self) {
        self.cache.invalidate();
    }
}
