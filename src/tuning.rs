//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from a JSON document. Missing
//! fields fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating a tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Gameplay constants for one world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_radius: f32,
    pub player_speed: f32,

    pub enemy_radius: f32,
    pub enemy_speed: f32,
    pub enemy_health: i32,
    pub enemy_count: usize,
    pub enemy_spawn_radius: f32,

    pub bullet_pool_size: usize,
    pub bullet_lifetime: f32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_damage: i32,

    /// Half-lives per second for camera follow
    pub camera_smoothing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_health: ENEMY_INIT_HEALTH,
            enemy_count: NUM_ENEMIES,
            enemy_spawn_radius: ENEMY_SPAWN_RADIUS,
            bullet_pool_size: NUM_BULLETS,
            bullet_lifetime: BULLET_LIFETIME,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_damage: BULLET_DAMAGE,
            camera_smoothing: CAMERA_SMOOTHING,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning document
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Check that every value keeps the simulation well defined
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("player_radius", self.player_radius)?;
        non_negative("player_speed", self.player_speed)?;
        positive("enemy_radius", self.enemy_radius)?;
        non_negative("enemy_speed", self.enemy_speed)?;
        non_negative("enemy_spawn_radius", self.enemy_spawn_radius)?;
        positive("bullet_lifetime", self.bullet_lifetime)?;
        non_negative("bullet_speed", self.bullet_speed)?;
        positive("bullet_radius", self.bullet_radius)?;
        non_negative("camera_smoothing", self.camera_smoothing)?;

        if self.enemy_health <= 0 {
            return Err(TuningError::Invalid {
                field: "enemy_health",
                reason: "must be greater than zero",
            });
        }
        if self.bullet_damage <= 0 {
            return Err(TuningError::Invalid {
                field: "bullet_damage",
                reason: "must be greater than zero",
            });
        }
        if self.bullet_pool_size == 0 {
            return Err(TuningError::Invalid {
                field: "bullet_pool_size",
                reason: "pool needs at least one slot",
            });
        }
        if self.bullet_pool_size > MAX_BULLETS {
            return Err(TuningError::Invalid {
                field: "bullet_pool_size",
                reason: "pool larger than MAX_BULLETS",
            });
        }
        if self.enemy_count > MAX_ENEMIES {
            return Err(TuningError::Invalid {
                field: "enemy_count",
                reason: "swarm larger than MAX_ENEMIES",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: "must be finite and not negative",
        })
    }
}
