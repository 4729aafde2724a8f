//! Fixed-step simulation core. One call to [`World::tick`] advances every
//! system exactly one frame; the loop above drives it and the renderer reads
//! the resulting state without mutating it.

pub mod animation;
pub mod collision;
pub mod combat;
pub mod companion;
pub mod constants;
pub mod input;
pub mod invuln;
pub mod motion;
pub mod patrol;


use engine::KeyEvent;

use collision::Aabb;
use constants::{
    BEAM_FORWARD_OFFSET, BEAM_H, BEAM_TRAILING_OFFSET, BEAM_W, COMPANION_SPAWN_OFFSET, ENEMY_H,
    ENEMY_SPAWN_X, ENEMY_SPAWN_Y, ENEMY_W, MAX_HEALTH, PLAYER_GROUND_Y, PLAYER_H, PLAYER_SPAWN_X,
    PLAYER_W,
};
use invuln::InvulnTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    pub facing: Facing,
    pub airborne: bool,
    pub health: i32,
    pub invuln: InvulnTimer,
    pub visible: bool,
}

impl Player {
    pub fn spawn() -> Self {
        Self {
            x: PLAYER_SPAWN_X,
            y: PLAYER_GROUND_Y,
            vx: 0,
            vy: 0,
            facing: Facing::Right,
            airborne: false,
            health: MAX_HEALTH,
            invuln: InvulnTimer::default(),
            visible: true,
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.x, self.y, PLAYER_W, PLAYER_H)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    /// Patrol direction, always -1 or 1.
    pub vel_sign: i32,
    pub facing: Facing,
    pub health: i32,
    pub invuln: InvulnTimer,
    /// Cleared permanently when health runs out; a dead enemy is excluded
    /// from collision, patrol, and rendering. Distinct from the flicker
    /// driven `visible` flag, which comes back.
    pub alive: bool,
    pub visible: bool,
}

impl Enemy {
    pub fn spawn() -> Self {
        Self {
            x: ENEMY_SPAWN_X,
            y: ENEMY_SPAWN_Y,
            vel_sign: 1,
            facing: Facing::Right,
            health: MAX_HEALTH,
            invuln: InvulnTimer::default(),
            alive: true,
            visible: true,
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.x, self.y, ENEMY_W, ENEMY_H)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Beam {
    pub active: bool,
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl Default for Beam {
    fn default() -> Self {
        Self {
            active: false,
            x: 0,
            y: 0,
            facing: Facing::Right,
        }
    }
}

impl Beam {
    /// Re-anchor to the player's post-motion position. The beam extends
    /// forward from the leading edge of whichever way the player faces and
    /// is centered on the player vertically.
    pub fn track_player(&mut self, player: &Player) {
        self.facing = player.facing;
        self.x = match player.facing {
            Facing::Right => player.x + BEAM_FORWARD_OFFSET,
            Facing::Left => player.x - BEAM_W + PLAYER_W - BEAM_TRAILING_OFFSET,
        };
        self.y = player.y + PLAYER_H / 2 - BEAM_H / 2;
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.x, self.y, BEAM_W, BEAM_H)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Companion {
    pub x: i32,
    pub y: i32,
    pub cycle_x: i32,
    pub cycle_y: i32,
}

impl Companion {
    pub fn spawn() -> Self {
        Self {
            x: PLAYER_SPAWN_X - COMPANION_SPAWN_OFFSET,
            y: PLAYER_GROUND_Y - COMPANION_SPAWN_OFFSET,
            cycle_x: 0,
            cycle_y: 0,
        }
    }
}

/// Complete mutable game state. Everything the renderer needs is readable
/// here after a tick; nothing outside the world carries simulation state.
#[derive(Debug)]
pub struct World {
    pub player: Player,
    pub enemy: Enemy,
    pub beam: Beam,
    pub companion: Companion,
    quit: bool,
}

impl World {
    pub fn new() -> Self {
        Self {
            player: Player::spawn(),
            enemy: Enemy::spawn(),
            beam: Beam::default(),
            companion: Companion::spawn(),
            quit: false,
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) {
        input::apply_key_event(&mut self.player, &mut self.beam, &mut self.quit, event);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Advance the simulation one frame: movement first, then the follower
    /// and beam re-anchor to the new player position, then combat resolves
    /// against final positions.
    pub fn tick(&mut self) {
        motion::update_player(&mut self.player);
        self.player.visible = self.player.invuln.tick();

        patrol::update_patrol(&mut self.enemy);
        self.enemy.visible = self.enemy.invuln.tick();

        companion::update_companion(&mut self.companion, &self.player);
        self.beam.track_player(&self.player);

        combat::resolve_combat(&mut self.player, &mut self.enemy, &self.beam);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
