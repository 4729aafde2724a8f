use tracing::info;

use super::collision::boxes_overlap;
use super::constants::{ENEMY_REMOVED_Y, MAX_HEALTH, PLAYER_GROUND_Y, PLAYER_RESPAWN_X};
use super::{Beam, Enemy, Player};

/// One combat resolution pass, run after all movement for the tick. The beam
/// is checked against the enemy first, then the enemy against the player, so
/// a kill on this tick removes the enemy before it can deal contact damage.
pub fn resolve_combat(player: &mut Player, enemy: &mut Enemy, beam: &Beam) {
    resolve_beam_hit(enemy, beam);
    resolve_contact_damage(player, enemy);
}

fn resolve_beam_hit(enemy: &mut Enemy, beam: &Beam) {
    if !beam.active || !enemy.alive || enemy.invuln.is_active() {
        return;
    }
    if !boxes_overlap(beam.bounding_box(), enemy.bounding_box()) {
        return;
    }
    enemy.health -= 1;
    if enemy.health > 0 {
        enemy.invuln.start();
        info!(health = enemy.health, "enemy_hit");
    } else {
        enemy.alive = false;
        enemy.y = ENEMY_REMOVED_Y;
        info!("enemy_defeated");
    }
}

fn resolve_contact_damage(player: &mut Player, enemy: &Enemy) {
    if !enemy.alive || player.invuln.is_active() {
        return;
    }
    if !boxes_overlap(player.bounding_box(), enemy.bounding_box()) {
        return;
    }
    player.health -= 1;
    player.invuln.start();
    if player.health <= 0 {
        player.x = PLAYER_RESPAWN_X;
        player.y = PLAYER_GROUND_Y;
        player.health = MAX_HEALTH;
        info!("player_respawned");
    } else {
        info!(health = player.health, "player_hit");
    }
}
