//! Tuning constants for the simulation. Every number that shapes gameplay
//! lives here, next to a note on the state machine it parameterizes.

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;

pub const GROUND_TILE_W: i32 = 32;
pub const GROUND_TILE_H: i32 = 32;

pub const PLAYER_W: i32 = 24;
pub const PLAYER_H: i32 = 26;
/// Floor line: the y at which the player stands on the ground row. Motion
/// clamps `py` here, and `py < PLAYER_GROUND_Y` defines airborne.
pub const PLAYER_GROUND_Y: i32 = SCREEN_HEIGHT - PLAYER_H - GROUND_TILE_H;
pub const PLAYER_SPAWN_X: i32 = SCREEN_WIDTH / 2 - PLAYER_W / 2 - 100;
/// Respawn target after health runs out.
pub const PLAYER_RESPAWN_X: i32 = 50;
pub const MAX_HEALTH: i32 = 4;
pub const GRAVITY_PER_TICK: i32 = 1;

pub const ENEMY_W: i32 = 56;
pub const ENEMY_H: i32 = 71;
pub const ENEMY_SPAWN_X: i32 = SCREEN_WIDTH / 2 - ENEMY_W / 2 + 100;
pub const ENEMY_SPAWN_Y: i32 = SCREEN_HEIGHT - ENEMY_H - GROUND_TILE_H - 5;
/// Horizontal extremes of the enemy patrol; the velocity sign flips on the
/// tick either bound is reached.
pub const PATROL_MIN_X: i32 = 100;
pub const PATROL_MAX_X: i32 = 500;
/// Dead enemies are parked here, well below the visible screen, instead of
/// being deallocated.
pub const ENEMY_REMOVED_Y: i32 = SCREEN_HEIGHT + 100;

/// Post-hit invulnerability window, in ticks.
pub const INVULN_TICKS: i32 = 120;
/// Flicker while invulnerable: of each 30-tick period the first 15 remaining
/// ticks are visible, the rest hidden.
pub const FLICKER_PERIOD_TICKS: i32 = 30;
pub const FLICKER_VISIBLE_TICKS: i32 = 15;

pub const BEAM_W: i32 = 86;
pub const BEAM_H: i32 = 50;
/// Beam anchor relative to the player: this far ahead of the sprite when
/// facing right, and pulled back by the trailing offset when facing left.
pub const BEAM_FORWARD_OFFSET: i32 = 10;
pub const BEAM_TRAILING_OFFSET: i32 = 8;

/// Companion follow dead-zone: chases when the player is more than this far
/// ahead, intentionally narrower than the trailing band.
pub const FOLLOW_AHEAD_DEADZONE: i32 = 10;
pub const FOLLOW_BEHIND_DEADZONE: i32 = 5;
pub const FOLLOW_VERTICAL_DEADZONE: i32 = 5;
/// Idle drift, horizontal cycle: nudges +1 every stride while below
/// DRIFT_X_OUT_UNTIL, -1 every stride inside the back window, wraps past
/// DRIFT_X_WRAP.
pub const DRIFT_X_STRIDE_TICKS: i32 = 12;
pub const DRIFT_X_OUT_UNTIL: i32 = 450;
pub const DRIFT_X_BACK_AFTER: i32 = 900;
pub const DRIFT_X_BACK_UNTIL: i32 = 1350;
pub const DRIFT_X_WRAP: i32 = 1800;
/// Idle drift, vertical cycle: +1 every stride below DRIFT_Y_DOWN_UNTIL,
/// -1 every stride after, wraps past DRIFT_Y_WRAP.
pub const DRIFT_Y_STRIDE_TICKS: i32 = 30;
pub const DRIFT_Y_DOWN_UNTIL: i32 = 150;
pub const DRIFT_Y_WRAP: i32 = 300;
/// The companion spawns slightly up-left of the player.
pub const COMPANION_SPAWN_OFFSET: i32 = 5;
