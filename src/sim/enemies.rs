//! Enemy swarm: fixed slots that home toward the player

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{circles_overlap, step_toward};
use super::state::Enemy;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// What the swarm reports back to the state machine each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwarmOutcome {
    /// Any live enemy overlapped the player after moving
    pub touched_player: bool,
    /// Live enemies remaining
    pub alive: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySwarm {
    slots: Box<[Enemy]>,
}

impl EnemySwarm {
    /// Spawn `enemy_count` enemies evenly spaced on a ring around `center`.
    ///
    /// Slot 0 sits at angle zero (directly +x of the center).
    pub fn spawn(tuning: &Tuning, center: Vec2) -> Self {
        let count = tuning.enemy_count;
        let slots = (0..count)
            .map(|i| {
                let angle = i as f32 * TAU / count as f32;
                Enemy {
                    position: center + polar_to_cartesian(tuning.enemy_spawn_radius, angle),
                    alive: true,
                    health: tuning.enemy_health,
                }
            })
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Enemy] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [Enemy] {
        &mut self.slots
    }

    pub fn alive_count(&self) -> usize {
        self.slots.iter().filter(|e| e.alive).count()
    }

    /// Move every live enemy toward the player at constant speed, then test
    /// player contact using the new positions.
    pub fn tick(&mut self, dt: f32, player_pos: Vec2, tuning: &Tuning) -> SwarmOutcome {
        let step = tuning.enemy_speed * dt;
        let mut outcome = SwarmOutcome::default();

        for enemy in self.slots.iter_mut().filter(|e| e.alive) {
            outcome.alive += 1;
            enemy.position += step_toward(enemy.position, player_pos, step);

            if circles_overlap(
                enemy.position,
                tuning.enemy_radius,
                player_pos,
                tuning.player_radius,
            ) {
                outcome.touched_player = true;
            }
        }

        outcome
    }
}
