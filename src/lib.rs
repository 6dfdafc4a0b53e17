//! Arena Shooter - simulation core for a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bullet pool, enemy swarm, world state machine)
//! - `camera`: Camera follow and screen/world transforms for renderers
//! - `tuning`: Data-driven game balance

pub mod camera;
pub mod sim;
pub mod tuning;

pub use camera::CameraFollow;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 16.0;
    /// Units per second along each held axis
    pub const PLAYER_SPEED: f32 = 150.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 50.0;
    pub const ENEMY_INIT_HEALTH: i32 = 100;
    pub const NUM_ENEMIES: usize = 3;
    /// Enemies spawn on a ring of this radius around the player spawn
    pub const ENEMY_SPAWN_RADIUS: f32 = 300.0;

    /// Bullet defaults
    pub const NUM_BULLETS: usize = 30;
    /// Seconds a bullet stays in flight
    pub const BULLET_LIFETIME: f32 = 3.0;
    pub const BULLET_SPEED: f32 = 500.0;
    pub const BULLET_RADIUS: f32 = 4.0;
    pub const BULLET_DAMAGE: i32 = 10;

    /// Largest pools a tuning document may ask for
    pub const MAX_ENEMIES: usize = 1024;
    pub const MAX_BULLETS: usize = 4096;

    /// Camera follow rate (higher = snappier)
    pub const CAMERA_SMOOTHING: f32 = 3.0;

    /// Demo viewport
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Frame time used by the headless demo (60 Hz)
    pub const DEMO_DT: f32 = 1.0 / 60.0;
}

/// Move `current` toward `target` with frame-rate independent exponential smoothing.
///
/// Covers `1 - 2^(-rate * dt)` of the remaining distance, so `rate` is the
/// number of half-lives per second.
#[inline]
pub fn smooth_toward(current: Vec2, target: Vec2, dt: f32, rate: f32) -> Vec2 {
    let t = 1.0 - (-rate * dt).exp2();
    current + (target - current) * t
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
