use macroquad::math::{Vec2, vec2};

/// Closed-form position after `t` ticks of constant downward gravity.
pub fn trajectory_at_time(start: Vec2, velocity: Vec2, gravity: f32, t: f32) -> Vec2 {
    let x = start.x + velocity.x * t;
    let y = start.y + (velocity.y * t) + (0.5 * gravity * t * t);
    vec2(x, y)
}

/// Points the preview markers are centred on: `count` samples at
/// `t = 0, step, 2*step, ...`.
pub fn sample_trajectory(
    start: Vec2,
    velocity: Vec2,
    gravity: f32,
    count: usize,
    step: f32,
) -> Vec<Vec2> {
    (0..count)
        .map(|i| trajectory_at_time(start, velocity, gravity, i as f32 * step))
        .collect()
}

/// Top-left of a square marker of side `size` centred on `point`.
pub fn marker_top_left(point: Vec2, size: f32) -> Vec2 {
    point - Vec2::splat(size / 2.0)
}
