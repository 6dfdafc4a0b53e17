//! Idle/demo mode - a simple bot that plays the game
//!
//! Produces the same `TickInput` a human would, so it drives the simulation
//! through the public tick path. Aim jitter comes from a seeded RNG, which
//! keeps demo runs reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Enemy, World};
use super::tick::TickInput;

/// Bot behaviour knobs
#[derive(Debug, Clone)]
pub struct AutopilotConfig {
    /// Seconds between shots
    pub fire_interval: f32,
    /// Max aim error per axis, in world units
    pub aim_jitter: f32,
    /// Back away from enemies closer than this
    pub danger_radius: f32,
    /// Seconds to linger on a win/lose screen before resetting
    pub reset_delay: f32,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            fire_interval: 0.2,
            aim_jitter: 8.0,
            danger_radius: 120.0,
            reset_delay: 1.0,
        }
    }
}

pub struct Autopilot {
    config: AutopilotConfig,
    rng: Pcg32,
    fire_cooldown: f32,
    terminal_time: f32,
}

impl Autopilot {
    pub fn new(seed: u64, config: AutopilotConfig) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            fire_cooldown: 0.0,
            terminal_time: 0.0,
        }
    }

    /// Decide this frame's input from the current world
    pub fn next_input(&mut self, world: &World, dt: f32) -> TickInput {
        let mut input = TickInput::default();

        if world.phase.is_terminal() {
            self.terminal_time += dt;
            if self.terminal_time >= self.config.reset_delay {
                self.terminal_time = 0.0;
                self.fire_cooldown = 0.0;
                input.reset = true;
            }
            return input;
        }
        self.terminal_time = 0.0;

        let player = world.player.position;
        let Some(target) = nearest_enemy(world.enemies.slots(), player) else {
            return input;
        };

        input.cursor_world = target.position + self.aim_offset();

        self.fire_cooldown -= dt;
        if self.fire_cooldown <= 0.0 {
            input.fire = true;
            self.fire_cooldown = self.config.fire_interval;
        }

        let away = player - target.position;
        if away.length_squared() < self.config.danger_radius * self.config.danger_radius {
            input.right = away.x > 0.0;
            input.left = away.x < 0.0;
            input.down = away.y > 0.0;
            input.up = away.y < 0.0;
        }

        input
    }

    /// Random aim error; zero unless the configured jitter is a positive number
    fn aim_offset(&mut self) -> Vec2 {
        let jitter = self.config.aim_jitter;
        if !(jitter.is_finite() && jitter > 0.0) {
            return Vec2::ZERO;
        }
        Vec2::new(
            self.rng.random_range(-jitter..=jitter),
            self.rng.random_range(-jitter..=jitter),
        )
    }
}

fn nearest_enemy(enemies: &[Enemy], from: Vec2) -> Option<&Enemy> {
    enemies.iter().filter(|e| e.alive).min_by(|a, b| {
        a.position
            .distance_squared(from)
            .partial_cmp(&b.position.distance_squared(from))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::WorldPhase;
    use crate::sim::tick::tick;

    #[test]
    fn test_aims_at_nearest_enemy() {
        let mut world = World::default();
        world.enemies.slots_mut()[1].position = Vec2::new(0.0, 200.0);
        let mut bot = Autopilot::new(
            7,
            AutopilotConfig {
                aim_jitter: 0.0,
                ..Default::default()
            },
        );
        let input = bot.next_input(&world, 1.0 / 60.0);
        assert!(input.fire);
        assert_eq!(input.cursor_world, Vec2::new(0.0, 200.0));
    }

    #[test]
    fn test_bad_jitter_aims_straight() {
        let mut world = World::default();
        world.enemies.slots_mut()[1].position = Vec2::new(0.0, 200.0);
        for jitter in [-5.0, f32::NAN, f32::INFINITY] {
            let mut bot = Autopilot::new(
                3,
                AutopilotConfig {
                    aim_jitter: jitter,
                    ..Default::default()
                },
            );
            let input = bot.next_input(&world, 1.0 / 60.0);
            assert_eq!(input.cursor_world, Vec2::new(0.0, 200.0));
        }
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let world = World::default();
        let target = world.enemies.slots()[0].position;
        let mut bot = Autopilot::new(9, AutopilotConfig::default());
        for _ in 0..100 {
            let offset = bot.next_input(&world, 1.0 / 60.0).cursor_world - target;
            assert!(offset.x.abs() <= 8.0 + 1e-3 && offset.y.abs() <= 8.0 + 1e-3);
        }
    }

    #[test]
    fn test_fire_cooldown() {
        let world = World::default();
        let mut bot = Autopilot::new(
            7,
            AutopilotConfig {
                fire_interval: 0.25,
                ..Default::default()
            },
        );
        let dt = 0.0625;
        assert!(bot.next_input(&world, dt).fire);
        assert!(!bot.next_input(&world, dt).fire);
        assert!(!bot.next_input(&world, dt).fire);
        assert!(!bot.next_input(&world, dt).fire);
        assert!(bot.next_input(&world, dt).fire);
    }

    #[test]
    fn test_backs_away_from_close_enemy() {
        let mut world = World::default();
        world.enemies.slots_mut()[0].position = Vec2::new(50.0, 0.0);
        let mut bot = Autopilot::new(1, AutopilotConfig::default());
        let input = bot.next_input(&world, 1.0 / 60.0);
        assert!(input.left);
        assert!(!input.right);
    }

    #[test]
    fn test_resets_after_delay() {
        let mut world = World::default();
        world.phase = WorldPhase::GameWon;
        let mut bot = Autopilot::new(1, AutopilotConfig::default());
        assert!(!bot.next_input(&world, 0.5).reset);
        assert!(bot.next_input(&world, 0.5).reset);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = World::default();
        let mut b = World::default();
        let mut bot_a = Autopilot::new(42, AutopilotConfig::default());
        let mut bot_b = Autopilot::new(42, AutopilotConfig::default());
        let dt = 1.0 / 60.0;
        for _ in 0..600 {
            let mut input = bot_a.next_input(&a, dt);
            tick(&mut a, &mut input, dt);
            let mut input = bot_b.next_input(&b, dt);
            tick(&mut b, &mut input, dt);
        }
        assert_eq!(a, b);
    }
}
