use super::Vertex;
use super::error::{DrawNodeError, Result};

/// Initial vertex capacity reserved for a fresh buffer.
pub const DEFAULT_CAPACITY: usize = 512;

/// Ordered, growable vertex storage.
///
/// Insertion order is render order. The draw node only ever appends whole
/// triangles, so its buffer length stays a multiple of 3.
///
/// Range operations are bounds-checked and return an error instead of panicking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
}

impl VertexBuffer {
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { vertices: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Vertex> {
        self.vertices.get_mut(index)
    }

    /// Replaces the vertex at `index`.
    pub fn set(&mut self, index: usize, vertex: Vertex) -> Result<()> {
        let len = self.len();
        let slot = self
            .vertices
            .get_mut(index)
            .ok_or(DrawNodeError::RangeOutOfBounds { start: index, count: 1, len })?;
        *slot = vertex;
        Ok(())
    }

    #[inline]
    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    #[inline]
    pub fn push_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        self.vertices.extend_from_slice(&[a, b, c]);
    }

    #[inline]
    pub fn extend_from_slice(&mut self, vertices: &[Vertex]) {
        self.vertices.extend_from_slice(vertices);
    }

    /// Removes `count` vertices starting at `start`; later vertices shift down.
    pub fn remove_range(&mut self, start: usize, count: usize) -> Result<()> {
        let end = self.checked_end(start, count)?;
        self.vertices.drain(start..end);
        Ok(())
    }

    /// Applies `f` to each vertex in `start..start + count`, in place.
    pub fn map_range<F>(&mut self, start: usize, count: usize, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Vertex),
    {
        let end = self.checked_end(start, count)?;
        self.vertices[start..end].iter_mut().for_each(&mut f);
        Ok(())
    }

    /// Drops all vertices and releases the old storage, re-reserving `capacity`.
    pub fn reset(&mut self, capacity: usize) {
        self.vertices = Vec::with_capacity(capacity);
    }

    /// Drops all vertices, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn checked_end(&self, start: usize, count: usize) -> Result<usize> {
        let len = self.len();
        start
            .checked_add(count)
            .filter(|&end| end <= len)
            .ok_or(DrawNodeError::RangeOutOfBounds { start, count, len })
    }
}
