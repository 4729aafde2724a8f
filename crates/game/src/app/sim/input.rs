use engine::{Key, KeyEvent};

use super::constants::PLAYER_GROUND_Y;
use super::{Beam, Facing, Player};

/// What a key means to the simulation. Motion keys carry velocity deltas that
/// are added on press and subtracted on release, so opposing keys cancel
/// instead of overwriting each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Motion {
        dvx: i32,
        dvy: i32,
        face: Option<Facing>,
        grounds_on_press: bool,
    },
    Beam,
    Quit,
}

const KEY_INTENTS: [(Key, KeyIntent); 6] = [
    (
        Key::Up,
        KeyIntent::Motion {
            dvx: 0,
            dvy: -2,
            face: None,
            grounds_on_press: false,
        },
    ),
    (
        Key::Down,
        KeyIntent::Motion {
            dvx: 0,
            dvy: 1,
            face: None,
            grounds_on_press: true,
        },
    ),
    (
        Key::Left,
        KeyIntent::Motion {
            dvx: -1,
            dvy: 0,
            face: Some(Facing::Left),
            grounds_on_press: false,
        },
    ),
    (
        Key::Right,
        KeyIntent::Motion {
            dvx: 1,
            dvy: 0,
            face: Some(Facing::Right),
            grounds_on_press: false,
        },
    ),
    (Key::Beam, KeyIntent::Beam),
    (Key::Quit, KeyIntent::Quit),
];

pub fn intent_for(key: Key) -> Option<KeyIntent> {
    KEY_INTENTS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, intent)| *intent)
}

/// Apply an edge-triggered key event. OS auto-repeat events are dropped here
/// so held keys contribute their velocity delta exactly once.
pub fn apply_key_event(player: &mut Player, beam: &mut Beam, quit: &mut bool, event: KeyEvent) {
    if event.repeat {
        return;
    }
    let Some(intent) = intent_for(event.key) else {
        return;
    };
    match intent {
        KeyIntent::Motion {
            dvx,
            dvy,
            face,
            grounds_on_press,
        } => {
            if event.pressed {
                player.vx += dvx;
                player.vy += dvy;
                if let Some(facing) = face {
                    player.facing = facing;
                }
                if grounds_on_press && player.y >= PLAYER_GROUND_Y {
                    player.airborne = false;
                }
            } else {
                player.vx -= dvx;
                player.vy -= dvy;
            }
        }
        KeyIntent::Beam => beam.active = event.pressed,
        KeyIntent::Quit => {
            if event.pressed {
                *quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> (Player, Beam, bool) {
        (Player::spawn(), Beam::default(), false)
    }

    fn apply(player: &mut Player, beam: &mut Beam, quit: &mut bool, event: KeyEvent) {
        apply_key_event(player, beam, quit, event)
    }

    #[test]
    fn every_key_has_an_intent() {
        for key in [Key::Up, Key::Down, Key::Left, Key::Right, Key::Beam, Key::Quit] {
            assert!(intent_for(key).is_some());
        }
    }

    #[test]
    fn press_and_release_cancel_exactly() {
        let (mut player, mut beam, mut quit) = fresh();
        for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
            apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(key));
        }
        for key in [Key::Up, Key::Down, Key::Left, Key::Right] {
            apply(&mut player, &mut beam, &mut quit, KeyEvent::released(key));
        }
        assert_eq!(player.vx, 0);
        assert_eq!(player.vy, 0);
    }

    #[test]
    fn opposing_keys_sum_their_deltas() {
        let (mut player, mut beam, mut quit) = fresh();
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Left));
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Right));
        assert_eq!(player.vx, 0);

        apply(&mut player, &mut beam, &mut quit, KeyEvent::released(Key::Left));
        assert_eq!(player.vx, 1);
    }

    #[test]
    fn up_outruns_gravity_while_down_only_assists_it() {
        let (mut player, mut beam, mut quit) = fresh();
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Up));
        assert_eq!(player.vy, -2);

        apply(&mut player, &mut beam, &mut quit, KeyEvent::released(Key::Up));
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Down));
        assert_eq!(player.vy, 1);
    }

    #[test]
    fn direction_press_sets_facing_immediately() {
        let (mut player, mut beam, mut quit) = fresh();
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Left));
        assert_eq!(player.facing, Facing::Left);
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Right));
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn down_press_regrounds_a_grounded_player() {
        let (mut player, mut beam, mut quit) = fresh();
        player.airborne = true; // stale flag with the player on the ground
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Down));
        assert!(!player.airborne);
    }

    #[test]
    fn down_press_leaves_airborne_player_airborne() {
        let (mut player, mut beam, mut quit) = fresh();
        player.y -= 40;
        player.airborne = true;
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Down));
        assert!(player.airborne);
    }

    #[test]
    fn beam_tracks_key_state() {
        let (mut player, mut beam, mut quit) = fresh();
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Beam));
        assert!(beam.active);
        apply(&mut player, &mut beam, &mut quit, KeyEvent::released(Key::Beam));
        assert!(!beam.active);
    }

    #[test]
    fn quit_fires_on_press_only() {
        let (mut player, mut beam, mut quit) = fresh();
        apply(&mut player, &mut beam, &mut quit, KeyEvent::released(Key::Quit));
        assert!(!quit);
        apply(&mut player, &mut beam, &mut quit, KeyEvent::pressed(Key::Quit));
        assert!(quit);
    }

    #[test]
    fn auto_repeat_events_are_ignored() {
        let (mut player, mut beam, mut quit) = fresh();
        let mut event = KeyEvent::pressed(Key::Left);
        event.repeat = true;
        apply(&mut player, &mut beam, &mut quit, event);
        assert_eq!(player.vx, 0);
    }
}
