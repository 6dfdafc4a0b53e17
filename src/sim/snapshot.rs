//! Read-only view of the world handed to renderers

use serde::Serialize;

use super::state::{Bullet, Enemy, Player, World, WorldPhase};

/// Everything a renderer needs to draw one frame.
///
/// Borrows the world, so it cannot outlive the tick that produced it. Dead
/// slots are included; renderers skip entries with `alive == false`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldSnapshot<'a> {
    pub phase: WorldPhase,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub bullets: &'a [Bullet],
    pub player_radius: f32,
    pub enemy_radius: f32,
    pub bullet_radius: f32,
}

impl WorldSnapshot<'_> {
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.alive)
    }

    pub fn live_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.alive)
    }
}

impl World {
    pub fn snapshot(&self) -> WorldSnapshot<'_> {
        WorldSnapshot {
            phase: self.phase,
            player: &self.player,
            enemies: self.enemies.slots(),
            bullets: self.bullets.slots(),
            player_radius: self.tuning.player_radius,
            enemy_radius: self.tuning.enemy_radius,
            bullet_radius: self.tuning.bullet_radius,
        }
    }
}
