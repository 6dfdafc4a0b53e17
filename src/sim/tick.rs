//! Per-frame simulation tick
//!
//! Advances the world by one rendered frame: player movement, firing, the
//! bullet pool, the enemy swarm, then terminal-phase resolution.

use glam::Vec2;

use super::state::{GameEvent, World};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire pressed this frame (one-shot, cleared by `tick`)
    pub fire: bool,
    /// Reset pressed this frame (one-shot, cleared by `tick`)
    pub reset: bool,
    /// Mouse cursor already transformed to world space
    pub cursor_world: Vec2,
}

impl TickInput {
    /// Unnormalized movement axis; +y is down, as on screen
    pub fn movement(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.right {
            axis.x += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        axis
    }
}

/// Advance the world by `dt` seconds and report what happened.
///
/// Terminal worlds only listen for `reset`; a reset tick returns the fresh
/// world without simulating it. Bullets resolve against enemy positions from
/// before the swarm moves, player contact against positions after.
pub fn tick(world: &mut World, input: &mut TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let fire = std::mem::take(&mut input.fire);
    let reset = std::mem::take(&mut input.reset);

    if world.phase.is_terminal() {
        if reset && world.reset() {
            events.push(GameEvent::WorldReset);
        }
        return events;
    }

    // Diagonals move faster; each held axis is independent
    world.player.position += input.movement() * (world.tuning.player_speed * dt);

    if fire {
        if let Some(shot) =
            world
                .bullets
                .fire(world.player.position, input.cursor_world, &world.tuning)
        {
            if shot.recycled {
                events.push(GameEvent::BulletRecycled { slot: shot.slot });
            }
            events.push(GameEvent::BulletFired { slot: shot.slot });
        }
    }

    world
        .bullets
        .tick(dt, world.enemies.slots_mut(), &world.tuning, &mut events);

    let outcome = world
        .enemies
        .tick(dt, world.player.position, &world.tuning);

    world.resolve_phase(outcome, &mut events);

    events
}
