use super::Color;

/// 8-bit-per-channel RGBA color stored on every vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);
    pub const BLACK: Rgba8 = Rgba8::new(0, 0, 0, 255);
    pub const WHITE: Rgba8 = Rgba8::new(255, 255, 255, 255);
    pub const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);
    pub const GREEN: Rgba8 = Rgba8::new(0, 255, 0, 255);
    pub const BLUE: Rgba8 = Rgba8::new(0, 0, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiplies alpha by `factor`, truncating toward zero.
    ///
    /// The result saturates to `0..=255`; NaN maps to 0.
    #[inline]
    pub fn scale_alpha(self, factor: f32) -> Self {
        self.with_alpha((self.a as f32 * factor) as u8)
    }

    /// Sets alpha to `round(255 × factor)`, saturating to `0..=255`.
    #[inline]
    pub fn with_alpha_factor(self, factor: f32) -> Self {
        self.with_alpha((255.0 * factor).round() as u8)
    }
}

impl From<Color> for Rgba8 {
    #[inline]
    fn from(c: Color) -> Self {
        // `as u8` saturates and maps NaN to 0.
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba8::new(q(c.r), q(c.g), q(c.b), q(c.a))
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from(v: [u8; 4]) -> Self {
        Rgba8::new(v[0], v[1], v[2], v[3])
    }
}
