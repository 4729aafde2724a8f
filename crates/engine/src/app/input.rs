/// Logical keys the simulation cares about. Everything else is dropped at the
/// window layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Beam,
    Quit,
}

/// A discrete key transition forwarded to the game. `repeat` marks OS
/// auto-repeat duplicates; the game treats those as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
    pub repeat: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            pressed: true,
            repeat: false,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            pressed: false,
            repeat: false,
        }
    }
}
