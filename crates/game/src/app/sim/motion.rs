use super::constants::{GRAVITY_PER_TICK, PLAYER_GROUND_Y, PLAYER_H, PLAYER_W, SCREEN_WIDTH};
use super::{Facing, Player};

/// One motion tick: integrate velocity, apply gravity, clamp to world bounds,
/// then derive facing and airborne from the result. Facing is sticky at zero
/// horizontal velocity.
pub fn update_player(player: &mut Player) {
    player.x += player.vx;
    player.y += player.vy;
    player.y += GRAVITY_PER_TICK;

    if player.y > PLAYER_GROUND_Y {
        player.y = PLAYER_GROUND_Y;
    }
    if player.y < -PLAYER_H {
        player.y = -PLAYER_H;
    }
    if player.x < -PLAYER_W {
        player.x = -PLAYER_W;
    }
    if player.x > SCREEN_WIDTH {
        player.x = SCREEN_WIDTH;
    }

    if player.vx > 0 {
        player.facing = Facing::Right;
    } else if player.vx < 0 {
        player.facing = Facing::Left;
    }
    player.airborne = player.y < PLAYER_GROUND_Y;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded_player() -> Player {
        Player::spawn()
    }

    #[test]
    fn gravity_alone_keeps_player_on_ground() {
        let mut player = grounded_player();
        update_player(&mut player);
        assert_eq!(player.y, PLAYER_GROUND_Y);
        assert!(!player.airborne);
    }

    #[test]
    fn upward_velocity_lifts_and_marks_airborne() {
        let mut player = grounded_player();
        player.vy = -2;
        update_player(&mut player);
        assert_eq!(player.y, PLAYER_GROUND_Y - 1);
        assert!(player.airborne);
    }

    #[test]
    fn falling_player_lands_exactly_on_ground_line() {
        let mut player = grounded_player();
        player.y = PLAYER_GROUND_Y - 1;
        player.vy = 3;
        update_player(&mut player);
        assert_eq!(player.y, PLAYER_GROUND_Y);
        assert!(!player.airborne);
    }

    #[test]
    fn horizontal_clamp_allows_partial_offscreen_only() {
        let mut player = grounded_player();
        player.x = -PLAYER_W + 1;
        player.vx = -10;
        update_player(&mut player);
        assert_eq!(player.x, -PLAYER_W);

        player.x = SCREEN_WIDTH - 1;
        player.vx = 10;
        update_player(&mut player);
        assert_eq!(player.x, SCREEN_WIDTH);
    }

    #[test]
    fn ceiling_clamp_holds_above_screen() {
        let mut player = grounded_player();
        player.y = -PLAYER_H + 1;
        player.vy = -10;
        update_player(&mut player);
        assert_eq!(player.y, -PLAYER_H);
    }

    #[test]
    fn facing_flips_with_velocity_sign() {
        let mut player = grounded_player();
        player.vx = 1;
        update_player(&mut player);
        assert_eq!(player.facing, Facing::Right);

        player.vx = -1;
        update_player(&mut player);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn facing_is_sticky_at_zero_velocity() {
        let mut player = grounded_player();
        player.facing = Facing::Left;
        player.vx = 0;
        update_player(&mut player);
        assert_eq!(player.facing, Facing::Left);
    }
}
