use core::f32::consts::{PI, TAU};

use quill_engine::coords::{Rect, Vec2};
use quill_engine::draw_node::Result;
use quill_engine::paint::{Color, Rgba8};
use quill_engine::{DrawNode, LineCap};

const TRAIL_POINTS: usize = 24;

/// Populates `node` with the showcase scene.
pub fn build(node: &mut DrawNode) -> Result<()> {
    dots(node);
    trail(node)?;
    lines(node);
    shapes(node);
    Ok(())
}

fn dots(node: &mut DrawNode) {
    for i in 0..8 {
        let t = i as f32 / 7.0;
        let color = Color::new(1.0, t, 0.2, 1.0);
        node.draw_dot(Vec2::new(40.0 + i as f32 * 24.0, 40.0), 2.0 + i as f32, color);
    }
}

/// A fading sine trail: older segments are dimmer, the oldest is dropped.
fn trail(node: &mut DrawNode) -> Result<()> {
    let points: Vec<Vec2> = (0..TRAIL_POINTS)
        .map(|i| {
            let x = 40.0 + i as f32 * 12.0;
            Vec2::new(x, 120.0 + (i as f32 * 0.5).sin() * 30.0)
        })
        .collect();

    let handles = node.draw_polyline(&points, 3.0, Rgba8::new(90, 200, 255, 255));
    let count = handles.len() as f32;
    for (i, &h) in handles.iter().enumerate() {
        node.fade_to_segment(h, (i as f32 + 1.0) / count)?;
    }
    if let Some(&last) = handles.last() {
        node.fade_by_segment(last, 0.9)?;
    }

    // Handles after the removed run shift down; none are used afterwards.
    if let Some(&oldest) = handles.first() {
        node.remove_segment(oldest)?;
    }
    Ok(())
}

fn lines(node: &mut DrawNode) {
    let caps = [LineCap::Butt, LineCap::Square, LineCap::Round];
    for (i, cap) in caps.into_iter().enumerate() {
        let y = 200.0 + i as f32 * 30.0;
        node.draw_line(Vec2::new(60.0, y), Vec2::new(300.0, y), 8.0, Rgba8::WHITE, cap);
    }

    node.draw_solid_arc(Vec2::new(400.0, 230.0), 40.0, 0.0, 0.75 * TAU, Rgba8::new(255, 200, 0, 255));
}

fn shapes(node: &mut DrawNode) {
    node.draw_circle(Vec2::new(540.0, 100.0), 50.0, Rgba8::new(60, 180, 90, 255));
    node.draw_circle_outline(Vec2::new(540.0, 100.0), 60.0, 1.5, Rgba8::WHITE);
    node.draw_circle_outline_with(Vec2::new(540.0, 100.0), 70.0, 1.0, PI, 48, Rgba8::new(255, 255, 255, 128));

    node.draw_rect(Rect::new(40.0, 330.0, 120.0, 80.0), Rgba8::new(200, 60, 60, 255));
    node.draw_rect_bordered(
        Rect::new(200.0, 330.0, 120.0, 80.0),
        Color::new(0.2, 0.3, 0.8, 1.0),
        3.0,
        Rgba8::WHITE,
    );

    let hexagon: Vec<Vec2> = (0..6)
        .map(|i| Vec2::new(470.0, 370.0) + Vec2::from_angle(i as f32 * TAU / 6.0) * 60.0)
        .collect();
    node.draw_polygon(&hexagon, Rgba8::new(150, 90, 220, 255), 4.0, Rgba8::new(255, 230, 255, 255));

    // Invisible helper geometry; alpha filtering keeps it out of the draw list.
    node.draw_dot(Vec2::new(600.0, 440.0), 6.0, Rgba8::TRANSPARENT);
}
