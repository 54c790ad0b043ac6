use super::Vertex;

/// Lazily rebuilt draw list derived from the vertex buffer.
///
/// Mutations only flip `dirty`; the list is recomputed on the next
/// [`resolve`](Self::resolve), so a frame with many builder calls rebuilds once.
#[derive(Debug, Default)]
pub(crate) struct RenderCache {
    dirty: bool,
    draw_list: Option<Vec<Vertex>>,
    rebuilds: u64,
}

impl RenderCache {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub(crate) fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    #[inline]
    pub(crate) fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Marks dirty and drops the cached list.
    #[inline]
    pub(crate) fn discard(&mut self) {
        self.dirty = true;
        self.draw_list = None;
    }

    /// Returns the draw list, rebuilding it first if stale.
    ///
    /// With `filter_by_alpha`, vertices (not triangles) with zero alpha are
    /// dropped. A triangle that loses only some of its vertices leaves the
    /// remaining ones misaligned in the list.
    pub(crate) fn resolve(&mut self, vertices: &[Vertex], filter_by_alpha: bool) -> &[Vertex] {
        if self.dirty {
            let list: Vec<Vertex> = if filter_by_alpha {
                vertices.iter().copied().filter(|v| v.color.a > 0).collect()
            } else {
                vertices.to_vec()
            };

            self.rebuilds += 1;
            log::debug!(
                "draw list rebuilt: {} of {} vertices (filter_by_alpha={filter_by_alpha})",
                list.len(),
                vertices.len()
            );

            self.draw_list = Some(list);
            self.dirty = false;
        }

        self.draw_list.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Rgba8;

    fn tri(color: Rgba8) -> Vec<Vertex> {
        vec![Vertex::at(Vec2::zero(), color); 3]
    }

    #[test]
    fn fresh_cache_resolves_to_empty_without_rebuilding() {
        let mut cache = RenderCache::new();
        assert!(cache.resolve(&tri(Rgba8::RED), false).is_empty());
        assert_eq!(cache.rebuilds(), 0);
    }

    #[test]
    fn rebuilds_once_per_invalidation() {
        let mut cache = RenderCache::new();
        let verts = tri(Rgba8::RED);
        cache.invalidate();
        cache.invalidate();
        assert_eq!(cache.resolve(&verts, false).len(), 3);
        assert_eq!(cache.resolve(&verts, false).len(), 3);
        assert_eq!(cache.rebuilds(), 1);
        assert!(!cache.is_dirty());
    }

    #[test]
    fn stale_list_is_served_until_invalidated() {
        let mut cache = RenderCache::new();
        cache.invalidate();
        cache.resolve(&tri(Rgba8::RED), false);
        // Not invalidated: the longer input is ignored.
        let longer = [tri(Rgba8::RED), tri(Rgba8::RED)].concat();
        assert_eq!(cache.resolve(&longer, false).len(), 3);
    }

    #[test]
    fn filter_drops_zero_alpha_vertices() {
        let mut cache = RenderCache::new();
        let mut verts = tri(Rgba8::RED);
        verts[1].color = Rgba8::TRANSPARENT;
        cache.invalidate();
        assert_eq!(cache.resolve(&verts, true).len(), 2);
    }

    #[test]
    fn discard_drops_cached_list() {
        let mut cache = RenderCache::new();
        cache.invalidate();
        cache.resolve(&tri(Rgba8::RED), false);
        cache.discard();
        assert!(cache.is_dirty());
        assert!(cache.resolve(&[], false).is_empty());
    }
}
