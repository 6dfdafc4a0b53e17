//! Collision detection and steering math
//!
//! Everything in the arena is a circle, so collision reduces to a distance
//! check. The steering helpers guard the degenerate zero-length cases so no
//! NaN ever reaches entity positions.

use glam::Vec2;

/// Check if two circles overlap (touching counts as overlap)
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    let combined = radius_a + radius_b;
    pos_a.distance_squared(pos_b) <= combined * combined
}

/// Unit direction from `from` to `to`, or `None` when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}

/// Displacement of exactly `step` length from `from` toward `to`.
///
/// Not clamped: a step longer than the remaining distance overshoots the
/// target. Returns zero when the points coincide.
#[inline]
pub fn step_toward(from: Vec2, to: Vec2, step: f32) -> Vec2 {
    let diff = to - from;
    let length = diff.length();
    if length > 0.0 && length.is_finite() {
        diff * (step / length)
    } else {
        Vec2::ZERO
    }
}
