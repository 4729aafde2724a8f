use super::constants::{PATROL_MAX_X, PATROL_MIN_X};
use super::{Enemy, Facing};

/// Deterministic patrol bounce: one pixel per tick, velocity sign and facing
/// flip on the tick a bound is reached. Dead enemies stay parked where combat
/// left them.
pub fn update_patrol(enemy: &mut Enemy) {
    if !enemy.alive {
        return;
    }
    enemy.x += enemy.vel_sign;
    if enemy.x >= PATROL_MAX_X {
        enemy.vel_sign = -1;
        enemy.facing = Facing::Left;
    }
    if enemy.x <= PATROL_MIN_X {
        enemy.vel_sign = 1;
        enemy.facing = Facing::Right;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sim::animation::{enemy_clip, ENEMY_CLIP_LEFT, ENEMY_CLIP_RIGHT};

    #[test]
    fn moves_one_pixel_per_tick() {
        let mut enemy = Enemy::spawn();
        let start = enemy.x;
        update_patrol(&mut enemy);
        assert_eq!(enemy.x, start + 1);
    }

    #[test]
    fn sign_flips_exactly_at_upper_bound() {
        let mut enemy = Enemy::spawn();
        enemy.x = PATROL_MAX_X - 1;
        enemy.vel_sign = 1;

        update_patrol(&mut enemy);
        assert_eq!(enemy.x, PATROL_MAX_X);
        assert_eq!(enemy.vel_sign, -1);
        assert_eq!(enemy_clip(enemy.facing), ENEMY_CLIP_LEFT);

        update_patrol(&mut enemy);
        assert_eq!(enemy.x, PATROL_MAX_X - 1);
    }

    #[test]
    fn sign_flips_exactly_at_lower_bound() {
        let mut enemy = Enemy::spawn();
        enemy.x = PATROL_MIN_X + 1;
        enemy.vel_sign = -1;

        update_patrol(&mut enemy);
        assert_eq!(enemy.x, PATROL_MIN_X);
        assert_eq!(enemy.vel_sign, 1);
        assert_eq!(enemy_clip(enemy.facing), ENEMY_CLIP_RIGHT);

        update_patrol(&mut enemy);
        assert_eq!(enemy.x, PATROL_MIN_X + 1);
    }

    #[test]
    fn stays_within_patrol_bounds_over_a_full_circuit() {
        let mut enemy = Enemy::spawn();
        for _ in 0..2000 {
            update_patrol(&mut enemy);
            assert!(enemy.x >= PATROL_MIN_X);
            assert!(enemy.x <= PATROL_MAX_X);
        }
    }

    #[test]
    fn dead_enemy_does_not_patrol() {
        let mut enemy = Enemy::spawn();
        enemy.alive = false;
        let (x, sign) = (enemy.x, enemy.vel_sign);
        update_patrol(&mut enemy);
        assert_eq!((enemy.x, enemy.vel_sign), (x, sign));
    }
}
