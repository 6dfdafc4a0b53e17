//! Ring-buffer bullet pool
//!
//! A fixed set of slots with one wrapping write cursor. Firing always
//! succeeds: when the cursor lands on a bullet that is still in flight, that
//! bullet is dropped and the slot reused. The `recycled` counter keeps that
//! loss visible.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{circles_overlap, direction_to};
use super::state::{Bullet, Enemy, GameEvent};
use crate::tuning::Tuning;

/// Result of a successful shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub slot: usize,
    /// The slot still held a live bullet that was discarded
    pub recycled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletPool {
    slots: Box<[Bullet]>,
    cursor: usize,
    /// Live bullets overwritten since spawn
    recycled: u64,
}

impl BulletPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Bullet::default(); capacity].into_boxed_slice(),
            cursor: 0,
            recycled: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot the next shot will be written to
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn recycled(&self) -> u64 {
        self.recycled
    }

    pub fn slots(&self) -> &[Bullet] {
        &self.slots
    }

    pub fn live(&self) -> impl Iterator<Item = &Bullet> {
        self.slots.iter().filter(|b| b.alive)
    }

    pub fn live_count(&self) -> usize {
        self.live().count()
    }

    /// Launch a bullet from `origin` toward `target`.
    ///
    /// No-op (returns `None`) when the two points coincide, since there is no
    /// direction to fly in. No slot is consumed in that case.
    pub fn fire(&mut self, origin: Vec2, target: Vec2, tuning: &Tuning) -> Option<Shot> {
        if self.slots.is_empty() {
            return None;
        }
        let direction = direction_to(origin, target)?;

        let slot = self.cursor;
        let recycled = self.slots[slot].alive;
        if recycled {
            self.recycled += 1;
            log::warn!(
                "Reusing live bullet slot {} ({} recycled so far); pool of {} is too small",
                slot,
                self.recycled,
                self.slots.len()
            );
        }

        self.slots[slot] = Bullet {
            position: origin,
            direction,
            time_left: tuning.bullet_lifetime,
            alive: true,
        };
        self.cursor = (self.cursor + 1) % self.slots.len();

        Some(Shot { slot, recycled })
    }

    /// Age, move and collide every live bullet.
    ///
    /// Enemies are tested in slot order and the first overlap absorbs the
    /// bullet, so a bullet damages at most one enemy per tick.
    pub fn tick(
        &mut self,
        dt: f32,
        enemies: &mut [Enemy],
        tuning: &Tuning,
        events: &mut Vec<GameEvent>,
    ) {
        for (slot, bullet) in self.slots.iter_mut().enumerate() {
            if !bullet.alive {
                continue;
            }

            bullet.time_left -= dt;
            if bullet.time_left <= 0.0 {
                bullet.alive = false;
                events.push(GameEvent::BulletExpired { slot });
                continue;
            }

            bullet.position += bullet.direction * (tuning.bullet_speed * dt);

            let hit = enemies.iter_mut().enumerate().find(|(_, enemy)| {
                enemy.alive
                    && circles_overlap(
                        enemy.position,
                        tuning.enemy_radius,
                        bullet.position,
                        tuning.bullet_radius,
                    )
            });

            if let Some((index, enemy)) = hit {
                bullet.alive = false;
                let killed = enemy.take_damage(tuning.bullet_damage);
                events.push(GameEvent::EnemyHit {
                    enemy: index,
                    health: enemy.health,
                });
                if killed {
                    log::debug!("Enemy {} destroyed by bullet {}", index, slot);
                    events.push(GameEvent::EnemyKilled { enemy: index });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn enemy_at(x: f32, y: f32, health: i32) -> Enemy {
        Enemy {
            position: Vec2::new(x, y),
            alive: true,
            health,
        }
    }

    #[test]
    fn test_fire_writes_cursor_slot() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(4);
        let shot = pool.fire(Vec2::ZERO, Vec2::new(0.0, -10.0), &tuning);
        assert_eq!(
            shot,
            Some(Shot {
                slot: 0,
                recycled: false
            })
        );
        assert_eq!(pool.cursor(), 1);

        let bullet = pool.slots()[0];
        assert!(bullet.alive);
        assert_eq!(bullet.position, Vec2::ZERO);
        assert_eq!(bullet.direction, Vec2::new(0.0, -1.0));
        assert_eq!(bullet.time_left, tuning.bullet_lifetime);
    }

    #[test]
    fn test_fire_at_origin_is_noop() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(4);
        let origin = Vec2::new(12.0, 3.0);
        assert_eq!(pool.fire(origin, origin, &tuning), None);
        assert_eq!(pool.cursor(), 0);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn test_wraparound_overwrites_slot_zero() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(tuning.bullet_pool_size);
        for i in 0..tuning.bullet_pool_size {
            pool.fire(Vec2::ZERO, Vec2::new(1.0, i as f32), &tuning);
        }
        assert_eq!(pool.cursor(), 0);

        let last = pool.fire(Vec2::new(5.0, 5.0), Vec2::new(5.0, 100.0), &tuning);
        assert_eq!(
            last,
            Some(Shot {
                slot: 0,
                recycled: true
            })
        );
        assert_eq!(pool.slots()[0].position, Vec2::new(5.0, 5.0));
        assert!((pool.slots()[0].direction - Vec2::Y).length() < 1e-6);
        assert_eq!(pool.live_count(), tuning.bullet_pool_size);
        assert_eq!(pool.cursor(), 1);
        assert_eq!(pool.recycled(), 1);
    }

    #[test]
    fn test_expired_slot_reuse_is_not_recycling() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(1);
        pool.fire(Vec2::ZERO, Vec2::X, &tuning);
        pool.tick(tuning.bullet_lifetime, &mut [], &tuning, &mut Vec::new());
        let shot = pool.fire(Vec2::ZERO, Vec2::X, &tuning).expect("shot");
        assert!(!shot.recycled);
        assert_eq!(pool.recycled(), 0);
    }

    #[test]
    fn test_bullet_moves_along_direction() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(2);
        pool.fire(Vec2::ZERO, Vec2::new(-4.0, 0.0), &tuning);
        pool.tick(0.5, &mut [], &tuning, &mut Vec::new());
        let bullet = pool.slots()[0];
        assert_eq!(bullet.position, Vec2::new(-250.0, 0.0));
        assert_eq!(bullet.time_left, 2.5);
    }

    #[test]
    fn test_bullet_expires_exactly_at_lifetime() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(2);
        let mut events = Vec::new();
        pool.fire(Vec2::ZERO, Vec2::Y, &tuning);

        // 2.75s elapsed: still flying
        for _ in 0..11 {
            pool.tick(0.25, &mut [], &tuning, &mut events);
        }
        assert_eq!(pool.live_count(), 1);
        assert!(events.is_empty());

        // 3.0s elapsed: gone
        pool.tick(0.25, &mut [], &tuning, &mut events);
        assert_eq!(pool.live_count(), 0);
        assert_eq!(events, vec![GameEvent::BulletExpired { slot: 0 }]);
    }

    #[test]
    fn test_expired_bullet_does_not_move_or_hit() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(1);
        pool.fire(Vec2::ZERO, Vec2::X, &tuning);
        let mut enemies = [enemy_at(500.0 * 3.0, 0.0, 100)];
        pool.tick(3.0, &mut enemies, &tuning, &mut Vec::new());
        assert_eq!(pool.slots()[0].position, Vec2::ZERO);
        assert_eq!(enemies[0].health, 100);
    }

    #[test]
    fn test_hit_damages_first_enemy_only() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(4);
        // Two enemies overlapping the bullet's landing point (50, 0)
        let mut enemies = [enemy_at(60.0, 0.0, 100), enemy_at(55.0, 5.0, 100)];
        let mut events = Vec::new();

        pool.fire(Vec2::ZERO, Vec2::X, &tuning);
        pool.tick(0.1, &mut enemies, &tuning, &mut events);

        assert_eq!(pool.live_count(), 0);
        assert_eq!(enemies[0].health, 90);
        assert_eq!(enemies[1].health, 100);
        assert_eq!(events, vec![GameEvent::EnemyHit { enemy: 0, health: 90 }]);
    }

    #[test]
    fn test_dead_enemy_is_skipped() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(4);
        let mut enemies = [enemy_at(60.0, 0.0, 100), enemy_at(55.0, 5.0, 100)];
        enemies[0].alive = false;

        pool.fire(Vec2::ZERO, Vec2::X, &tuning);
        pool.tick(0.1, &mut enemies, &tuning, &mut Vec::new());

        assert_eq!(enemies[0].health, 100);
        assert_eq!(enemies[1].health, 90);
    }

    #[test]
    fn test_lethal_hit_kills_enemy() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(4);
        let mut enemies = [enemy_at(60.0, 0.0, 10)];
        let mut events = Vec::new();

        pool.fire(Vec2::ZERO, Vec2::X, &tuning);
        pool.tick(0.1, &mut enemies, &tuning, &mut events);

        assert!(!enemies[0].alive);
        assert_eq!(
            events,
            vec![
                GameEvent::EnemyHit { enemy: 0, health: 0 },
                GameEvent::EnemyKilled { enemy: 0 }
            ]
        );

        // A second bullet passes straight through the corpse
        pool.fire(Vec2::ZERO, Vec2::X, &tuning);
        pool.tick(0.1, &mut enemies, &tuning, &mut Vec::new());
        assert_eq!(pool.live_count(), 1);
        assert_eq!(enemies[0].health, 0);
    }

    #[test]
    fn test_empty_pool_never_fires() {
        let tuning = Tuning::default();
        let mut pool = BulletPool::new(0);
        assert_eq!(pool.fire(Vec2::ZERO, Vec2::X, &tuning), None);
    }

    proptest! {
        #[test]
        fn prop_cursor_tracks_successful_shots(
            capacity in 1usize..64,
            shots in 0usize..200,
        ) {
            let tuning = Tuning::default();
            let mut pool = BulletPool::new(capacity);
            for i in 0..shots {
                let shot = pool.fire(Vec2::ZERO, Vec2::new(1.0, i as f32), &tuning);
                prop_assert_eq!(shot.map(|s| s.slot), Some(i % capacity));
            }
            prop_assert_eq!(pool.cursor(), shots % capacity);
            prop_assert_eq!(pool.live_count(), shots.min(capacity));
            prop_assert_eq!(pool.recycled(), shots.saturating_sub(capacity) as u64);
        }

        #[test]
        fn prop_live_bullets_have_unit_direction(
            tx in -1000.0f32..1000.0,
            ty in -1000.0f32..1000.0,
        ) {
            prop_assume!(tx.abs() > 1e-3 || ty.abs() > 1e-3);
            let tuning = Tuning::default();
            let mut pool = BulletPool::new(1);
            pool.fire(Vec2::ZERO, Vec2::new(tx, ty), &tuning);
            let bullet = pool.slots()[0];
            prop_assert!(bullet.alive);
            prop_assert!((bullet.direction.length() - 1.0).abs() < 1e-4);
        }
    }
}
