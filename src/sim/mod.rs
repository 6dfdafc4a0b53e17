//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Output depends only on the world, the tick input and `dt`
//! - Fixed-size entity pools, never resized after spawn
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod bullets;
pub mod collision;
pub mod enemies;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autoplay::{Autopilot, AutopilotConfig};
pub use bullets::{BulletPool, Shot};
pub use collision::{circles_overlap, direction_to, step_toward};
pub use enemies::{EnemySwarm, SwarmOutcome};
pub use snapshot::WorldSnapshot;
pub use state::{Bullet, Enemy, GameEvent, Player, World, WorldPhase};
pub use tick::{TickInput, tick};
