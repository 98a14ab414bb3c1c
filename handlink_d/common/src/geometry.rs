//! Pure 2-D helpers over the hand skeleton. Everything here is stateless;
//! the state machines build on these.

use glam::Vec2;

/// Centroid of a set of points.
pub fn centroid(points: &[Vec2]) -> Vec2 {
    let sum: Vec2 = points.iter().copied().sum();
    sum / points.len() as f32
}

/// Extension test for a single finger: the tip must sit noticeably farther
/// from the wrist than the finger's own MCP joint does.
pub fn finger_extended(wrist: Vec2, tip: Vec2, mcp: Vec2, factor: f32) -> bool {
    wrist.distance(tip) > factor * wrist.distance(mcp)
}

pub fn inside_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    point.distance(center) < radius
}

/// Linear re-mapping of `value` from `[in_min, in_max]` to
/// `[out_min, out_max]`, without clamping.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Mirror an x coordinate across a frame of the given width. The pose source
/// observes a mirrored video feed, so screen-space interactions flip back.
pub fn mirror_x(x: f32, frame_width: f32) -> f32 {
    frame_width - x
}
