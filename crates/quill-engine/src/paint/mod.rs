//! Color and blending model shared between the draw node and renderers.
//!
//! Scope:
//! - floating-point input colors (`Color`)
//! - 8-bit vertex colors (`Rgba8`)
//! - blend function selection (`BlendFunc`)
//!
//! Geometry types remain in `coords`.

mod blend;
mod color;
mod rgba8;

pub use blend::{BlendFactor, BlendFunc};
pub use color::Color;
pub use rgba8::Rgba8;
