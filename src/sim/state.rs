//! World state and core simulation types
//!
//! A `World` is a plain owned value. Everything that changes during a session
//! lives here; resetting builds a fresh one from the same tuning.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullets::BulletPool;
use super::enemies::{EnemySwarm, SwarmOutcome};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorldPhase {
    /// Active gameplay
    #[default]
    Playing,
    /// An enemy reached the player; waiting for reset
    PlayerDead,
    /// Every enemy destroyed; waiting for reset
    GameWon,
}

impl WorldPhase {
    /// Terminal phases accept nothing but a reset
    pub fn is_terminal(self) -> bool {
        !matches!(self, WorldPhase::Playing)
    }
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired { slot: usize },
    /// A still-live bullet was overwritten by a new shot
    BulletRecycled { slot: usize },
    BulletExpired { slot: usize },
    EnemyHit { enemy: usize, health: i32 },
    EnemyKilled { enemy: usize },
    PlayerKilled,
    GameWon,
    WorldReset,
}

/// The player avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub alive: bool,
}

impl Player {
    pub fn spawn(position: Vec2) -> Self {
        Self {
            position,
            alive: true,
        }
    }
}

/// One enemy slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Vec2,
    pub alive: bool,
    pub health: i32,
}

impl Enemy {
    /// Apply damage; returns true if this hit killed the enemy
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.health -= damage;
        if self.health <= 0 {
            self.alive = false;
            return true;
        }
        false
    }
}

/// One bullet slot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bullet {
    pub position: Vec2,
    /// Unit length while alive
    pub direction: Vec2,
    /// Seconds until expiry
    pub time_left: f32,
    pub alive: bool,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Balance values this world was spawned from (reused on reset)
    pub tuning: Tuning,
    pub phase: WorldPhase,
    pub player: Player,
    pub enemies: EnemySwarm,
    pub bullets: BulletPool,
}

impl Default for World {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl World {
    /// Build a world in its spawn configuration
    pub fn new(tuning: &Tuning) -> Self {
        let player = Player::spawn(Vec2::ZERO);
        let world = Self {
            tuning: tuning.clone(),
            phase: WorldPhase::Playing,
            player,
            enemies: EnemySwarm::spawn(tuning, player.position),
            bullets: BulletPool::new(tuning.bullet_pool_size),
        };
        log::info!(
            "World spawned: {} enemies, {} bullet slots",
            world.enemies.len(),
            world.bullets.capacity()
        );
        world
    }

    pub fn is_player_dead(&self) -> bool {
        self.phase == WorldPhase::PlayerDead
    }

    pub fn is_game_won(&self) -> bool {
        self.phase == WorldPhase::GameWon
    }

    /// Apply terminal transitions from the swarm result.
    ///
    /// Only moves out of `Playing`; a terminal world is never re-entered.
    pub fn resolve_phase(&mut self, outcome: SwarmOutcome, events: &mut Vec<GameEvent>) {
        if self.phase != WorldPhase::Playing {
            return;
        }

        if outcome.touched_player {
            self.player.alive = false;
            self.phase = WorldPhase::PlayerDead;
            events.push(GameEvent::PlayerKilled);
            log::info!("Player killed at {:?}", self.player.position);
        } else if outcome.alive == 0 {
            self.phase = WorldPhase::GameWon;
            events.push(GameEvent::GameWon);
            log::info!("All enemies destroyed");
        }
    }

    /// Reinitialize to the spawn configuration.
    ///
    /// Only honored from a terminal phase; returns whether the reset happened.
    pub fn reset(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        log::info!("Resetting world after {:?}", self.phase);
        *self = World::new(&self.tuning);
        true
    }
}
