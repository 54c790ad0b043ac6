/// Viewport size in logical pixels.
///
/// The triangle list shader maps `[0, width] × [0, height]` onto NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical viewport for a render target of `width × height` physical
    /// pixels at `scale` physical pixels per logical pixel.
    ///
    /// Non-positive or non-finite scales fall back to 1.
    #[inline]
    pub fn from_physical(width: u32, height: u32, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self::new(width as f32 / scale, height as f32 / scale)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_physical_divides_by_scale() {
        assert_eq!(Viewport::from_physical(800, 600, 2.0), Viewport::new(400.0, 300.0));
    }

    #[test]
    fn from_physical_rejects_bad_scale() {
        assert_eq!(Viewport::from_physical(800, 600, 0.0), Viewport::new(800.0, 600.0));
        assert_eq!(Viewport::from_physical(800, 600, f32::NAN), Viewport::new(800.0, 600.0));
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
