//! Camera follow for renderers
//!
//! The simulation never reads the camera. Renderers keep one of these next to
//! the world, ease it toward the player each frame, and use it to turn the
//! mouse position into a world-space cursor for [`crate::sim::TickInput`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_SMOOTHING, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::smooth_toward;

/// 2D camera without rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFollow {
    /// World point shown at `offset`
    pub target: Vec2,
    /// Screen point the target maps to (usually the viewport center)
    pub offset: Vec2,
    pub zoom: f32,
    /// Half-lives per second
    pub smoothing: f32,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self::centered(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl CameraFollow {
    /// Camera looking at the world origin from the middle of a viewport
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            offset: Vec2::new(width / 2.0, height / 2.0),
            zoom: 1.0,
            smoothing: CAMERA_SMOOTHING,
        }
    }

    /// Ease the camera target toward `focus`
    pub fn follow(&mut self, focus: Vec2, dt: f32) {
        self.target = smooth_toward(self.target, focus, dt, self.smoothing);
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom + self.target
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.target) * self.zoom + self.offset
    }
}
