use super::constants::{FLICKER_PERIOD_TICKS, FLICKER_VISIBLE_TICKS, INVULN_TICKS};

/// Per-entity post-hit invulnerability countdown. While running it also
/// drives the visibility flicker; each entity owns its own timer (the player
/// uses it to skip rendering, the enemy to fake dying in and out of view).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvulnTimer {
    remaining: i32,
}

impl InvulnTimer {
    pub fn start(&mut self) {
        self.remaining = INVULN_TICKS;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Advance one tick and report whether the owning entity is visible.
    /// Counting down, the first FLICKER_VISIBLE_TICKS of every period are
    /// visible and the rest hidden; at zero visibility is forced true.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            return true;
        }
        (self.remaining % FLICKER_PERIOD_TICKS) < FLICKER_VISIBLE_TICKS
    }
}
