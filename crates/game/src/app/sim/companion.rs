use super::constants::{
    DRIFT_X_BACK_AFTER, DRIFT_X_BACK_UNTIL, DRIFT_X_OUT_UNTIL, DRIFT_X_STRIDE_TICKS, DRIFT_X_WRAP,
    DRIFT_Y_DOWN_UNTIL, DRIFT_Y_STRIDE_TICKS, DRIFT_Y_WRAP, FOLLOW_AHEAD_DEADZONE,
    FOLLOW_BEHIND_DEADZONE, FOLLOW_VERTICAL_DEADZONE, PLAYER_W,
};
use super::{Companion, Player};

/// Cosmetic follower: a lazy chase toward the player inside an asymmetric
/// dead-zone band, plus an idle bob driven by two free-running cycles with
/// different periods. Never collides, never fights.
pub fn update_companion(wisp: &mut Companion, player: &Player) {
    follow_player(wisp, player);
    idle_drift(wisp);
}

fn follow_player(wisp: &mut Companion, player: &Player) {
    if player.x > wisp.x + FOLLOW_AHEAD_DEADZONE {
        wisp.x += 1;
    } else if player.x + PLAYER_W < wisp.x - FOLLOW_BEHIND_DEADZONE {
        wisp.x -= 1;
    }
    if player.y > wisp.y + FOLLOW_VERTICAL_DEADZONE {
        wisp.y += 1;
    } else if player.y < wisp.y - FOLLOW_VERTICAL_DEADZONE {
        wisp.y -= 1;
    }
}

fn idle_drift(wisp: &mut Companion) {
    if wisp.cycle_x < DRIFT_X_OUT_UNTIL {
        if wisp.cycle_x % DRIFT_X_STRIDE_TICKS == 0 {
            wisp.x += 1;
        }
    } else {
        if wisp.cycle_x % DRIFT_X_STRIDE_TICKS == 0
            && wisp.cycle_x > DRIFT_X_BACK_AFTER
            && wisp.cycle_x < DRIFT_X_BACK_UNTIL
        {
            wisp.x -= 1;
        }
        if wisp.cycle_x > DRIFT_X_WRAP {
            wisp.cycle_x = 0;
        }
    }
    wisp.cycle_x += 1;

    if wisp.cycle_y < DRIFT_Y_DOWN_UNTIL {
        if wisp.cycle_y % DRIFT_Y_STRIDE_TICKS == 0 {
            wisp.y += 1;
        }
    } else {
        if wisp.cycle_y % DRIFT_Y_STRIDE_TICKS == 0 {
            wisp.y -= 1;
        }
        if wisp.cycle_y > DRIFT_Y_WRAP {
            wisp.cycle_y = 0;
        }
    }
    wisp.cycle_y += 1;
}
