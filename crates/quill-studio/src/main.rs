//! Headless showcase: fills a draw node with every primitive kind, renders
//! one frame offscreen and writes it to a PNG.
//!
//! Usage: `quill-studio [output.png]`

mod offscreen;
mod scene;

use anyhow::{Context, Result};
use quill_engine::logging::{init_logging, LoggingConfig};
use quill_engine::paint::{BlendFunc, Color};
use quill_engine::{DrawNode, DrawNodeConfig};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "quill-studio.png".to_owned());

    // Scene colors are straight alpha.
    let mut node = DrawNode::with_config(DrawNodeConfig {
        blend: BlendFunc::NON_PREMULTIPLIED,
        feather_edges: true,
        filter_by_alpha: true,
        ..DrawNodeConfig::default()
    });

    scene::build(&mut node).context("failed to build demo scene")?;
    log::info!(
        "scene holds {} vertices, bounds {:?}",
        node.len(),
        node.content_bounds()
    );

    let clear = Color::new(0.08, 0.08, 0.1, 1.0);
    let pixels = pollster::block_on(offscreen::render(&mut node, WIDTH, HEIGHT, clear))?;

    image::save_buffer(&output, &pixels, WIDTH, HEIGHT, image::ColorType::Rgba8)
        .with_context(|| format!("failed to write {output}"))?;

    log::info!("wrote {output} ({WIDTH}x{HEIGHT})");
    Ok(())
}
