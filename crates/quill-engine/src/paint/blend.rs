/// Framebuffer blend factor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
}

impl BlendFactor {
    #[inline]
    pub fn to_wgpu(self) -> wgpu::BlendFactor {
        match self {
            BlendFactor::Zero => wgpu::BlendFactor::Zero,
            BlendFactor::One => wgpu::BlendFactor::One,
            BlendFactor::SrcAlpha => wgpu::BlendFactor::SrcAlpha,
            BlendFactor::OneMinusSrcAlpha => wgpu::BlendFactor::OneMinusSrcAlpha,
            BlendFactor::DstAlpha => wgpu::BlendFactor::DstAlpha,
            BlendFactor::OneMinusDstAlpha => wgpu::BlendFactor::OneMinusDstAlpha,
            BlendFactor::SrcColor => wgpu::BlendFactor::Src,
            BlendFactor::OneMinusSrcColor => wgpu::BlendFactor::OneMinusSrc,
            BlendFactor::DstColor => wgpu::BlendFactor::Dst,
            BlendFactor::OneMinusDstColor => wgpu::BlendFactor::OneMinusDst,
        }
    }
}

/// Source/destination blend pair used when submitting a draw node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BlendFunc {
    pub src: BlendFactor,
    pub dst: BlendFactor,
}

impl BlendFunc {
    /// Premultiplied alpha blending.
    pub const ALPHA_BLEND: BlendFunc = BlendFunc::new(BlendFactor::One, BlendFactor::OneMinusSrcAlpha);
    /// Straight (non-premultiplied) alpha blending.
    pub const NON_PREMULTIPLIED: BlendFunc =
        BlendFunc::new(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    pub const ADDITIVE: BlendFunc = BlendFunc::new(BlendFactor::SrcAlpha, BlendFactor::One);
    pub const OPAQUE: BlendFunc = BlendFunc::new(BlendFactor::One, BlendFactor::Zero);

    #[inline]
    pub const fn new(src: BlendFactor, dst: BlendFactor) -> Self {
        Self { src, dst }
    }

    /// Same factors for the color and alpha components, additive operation.
    pub fn to_wgpu(self) -> wgpu::BlendState {
        let component = wgpu::BlendComponent {
            src_factor: self.src.to_wgpu(),
            dst_factor: self.dst.to_wgpu(),
            operation: wgpu::BlendOperation::Add,
        };
        wgpu::BlendState { color: component, alpha: component }
    }
}

impl Default for BlendFunc {
    #[inline]
    fn default() -> Self {
        BlendFunc::ALPHA_BLEND
    }
}
