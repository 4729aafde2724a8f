use engine::ClipRect;

use super::constants::{ENEMY_H, ENEMY_W, PLAYER_H, PLAYER_W};
use super::Facing;

// Player sheet: 6x3 grid of 24x26 cells. Only four of the eighteen cells are
// selected by the state machine; the rest are reserved poses.
const PLAYER_SHEET_COLUMNS: usize = 6;
pub const PLAYER_SHEET_CELLS: usize = 18;
pub const PLAYER_CLIP_LEFT_GROUNDED: usize = 0;
pub const PLAYER_CLIP_RIGHT_GROUNDED: usize = 2;
pub const PLAYER_CLIP_LEFT_AIRBORNE: usize = 4;
pub const PLAYER_CLIP_RIGHT_AIRBORNE: usize = 5;

// Enemy sheet: 2x2 grid of 56x71 cells.
const ENEMY_SHEET_COLUMNS: usize = 2;
pub const ENEMY_CLIP_RIGHT: usize = 0;
pub const ENEMY_CLIP_LEFT: usize = 2;

// Beam sheets carry one active cell each at a fixed offset; the other cell is
// empty and never drawn.
pub const BEAM_LEFT_ACTIVE_CLIP: ClipRect = ClipRect::new(360, 236, 86, 50);
pub const BEAM_RIGHT_ACTIVE_CLIP: ClipRect = ClipRect::new(0, 206, 86, 50);

pub const GROUND_TILE_CLIP: ClipRect = ClipRect::new(32, 0, 32, 32);

/// Pure pose selection for the player: facing and airborne pick the cell.
pub fn player_clip(facing: Facing, airborne: bool) -> usize {
    match (facing, airborne) {
        (Facing::Right, false) => PLAYER_CLIP_RIGHT_GROUNDED,
        (Facing::Right, true) => PLAYER_CLIP_RIGHT_AIRBORNE,
        (Facing::Left, false) => PLAYER_CLIP_LEFT_GROUNDED,
        (Facing::Left, true) => PLAYER_CLIP_LEFT_AIRBORNE,
    }
}

pub fn player_clip_rect(index: usize) -> ClipRect {
    grid_cell(index, PLAYER_SHEET_COLUMNS, PLAYER_W as u32, PLAYER_H as u32)
}

pub fn enemy_clip(facing: Facing) -> usize {
    match facing {
        Facing::Right => ENEMY_CLIP_RIGHT,
        Facing::Left => ENEMY_CLIP_LEFT,
    }
}

pub fn enemy_clip_rect(index: usize) -> ClipRect {
    grid_cell(index, ENEMY_SHEET_COLUMNS, ENEMY_W as u32, ENEMY_H as u32)
}

pub fn beam_clip(facing: Facing) -> ClipRect {
    match facing {
        Facing::Right => BEAM_RIGHT_ACTIVE_CLIP,
        Facing::Left => BEAM_LEFT_ACTIVE_CLIP,
    }
}

fn grid_cell(index: usize, columns: usize, cell_w: u32, cell_h: u32) -> ClipRect {
    let column = (index % columns) as u32;
    let row = (index / columns) as u32;
    ClipRect::new(column * cell_w, row * cell_h, cell_w, cell_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_states_map_to_four_distinct_clips() {
        let clips = [
            player_clip(Facing::Right, false),
            player_clip(Facing::Right, true),
            player_clip(Facing::Left, false),
            player_clip(Facing::Left, true),
        ];
        for (i, a) in clips.iter().enumerate() {
            assert!(*a < PLAYER_SHEET_CELLS);
            for b in clips.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn player_grid_cells_follow_row_major_order() {
        assert_eq!(player_clip_rect(0), ClipRect::new(0, 0, 24, 26));
        assert_eq!(player_clip_rect(2), ClipRect::new(48, 0, 24, 26));
        assert_eq!(player_clip_rect(5), ClipRect::new(120, 0, 24, 26));
        assert_eq!(player_clip_rect(6), ClipRect::new(0, 26, 24, 26));
        assert_eq!(player_clip_rect(17), ClipRect::new(120, 52, 24, 26));
    }

    #[test]
    fn enemy_grid_is_two_by_two() {
        assert_eq!(enemy_clip_rect(0), ClipRect::new(0, 0, 56, 71));
        assert_eq!(enemy_clip_rect(1), ClipRect::new(56, 0, 56, 71));
        assert_eq!(enemy_clip_rect(2), ClipRect::new(0, 71, 56, 71));
        assert_eq!(enemy_clip_rect(3), ClipRect::new(56, 71, 56, 71));
    }

    #[test]
    fn enemy_facing_picks_row_edges() {
        assert_eq!(enemy_clip(Facing::Right), ENEMY_CLIP_RIGHT);
        assert_eq!(enemy_clip(Facing::Left), ENEMY_CLIP_LEFT);
    }

    #[test]
    fn beam_variant_follows_facing() {
        assert_eq!(beam_clip(Facing::Right), BEAM_RIGHT_ACTIVE_CLIP);
        assert_eq!(beam_clip(Facing::Left), BEAM_LEFT_ACTIVE_CLIP);
    }
}
