use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Rgba8;

/// A single colored vertex. Three consecutive vertices form one triangle.
///
/// The layout is `#[repr(C)]` + `Pod` so a draw list uploads to the GPU as-is.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Logical-pixel position. `z` is always 0 for 2D primitives.
    pub position: [f32; 3],
    pub color: Rgba8,
}

impl Vertex {
    #[inline]
    pub const fn new(position: [f32; 3], color: Rgba8) -> Self {
        Self { position, color }
    }

    /// Builds a 2D vertex (`z = 0`).
    #[inline]
    pub const fn at(p: Vec2, color: Rgba8) -> Self {
        Self::new([p.x, p.y, 0.0], color)
    }

    #[inline]
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.position[0], self.position[1])
    }
}
