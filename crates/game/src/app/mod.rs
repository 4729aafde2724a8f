pub mod sim;

use engine::{AssetError, AssetProvider, Game, KeyEvent, RenderTarget, TextureId};

use sim::animation::{
    beam_clip, enemy_clip, enemy_clip_rect, player_clip, player_clip_rect, GROUND_TILE_CLIP,
};
use sim::constants::{GROUND_TILE_H, GROUND_TILE_W, SCREEN_HEIGHT, SCREEN_WIDTH};
use sim::World;

const BACKGROUND_FILE: &str = "Full Moon - background.png";
const PLAYER_SHEET_FILE: &str = "LayeredSprites.png";
const ENEMY_SHEET_FILE: &str = "Grue.png";
const BEAM_LEFT_FILE: &str = "beams.png";
const BEAM_RIGHT_FILE: &str = "beams2.png";
const COMPANION_FILE: &str = "Wisp.png";
const TILES_FILE: &str = "platformertiles.png";

// The backdrop is wider than the surface and sits shifted left so the moon
// lands off-center.
const BACKGROUND_X: i32 = -106;
const BACKGROUND_Y: i32 = 0;

struct Textures {
    background: TextureId,
    player_sheet: TextureId,
    enemy_sheet: TextureId,
    beam_left: TextureId,
    beam_right: TextureId,
    companion: TextureId,
    tiles: TextureId,
}

/// The game proper: owns the simulation world and maps its state to draw
/// calls each frame.
pub struct LightSpirits {
    world: World,
    textures: Option<Textures>,
}

impl LightSpirits {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            textures: None,
        }
    }
}

impl Default for LightSpirits {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for LightSpirits {
    fn load(&mut self, assets: &mut dyn AssetProvider) -> Result<(), AssetError> {
        self.textures = Some(Textures {
            background: assets.load_texture(BACKGROUND_FILE)?,
            player_sheet: assets.load_texture(PLAYER_SHEET_FILE)?,
            enemy_sheet: assets.load_texture(ENEMY_SHEET_FILE)?,
            beam_left: assets.load_texture(BEAM_LEFT_FILE)?,
            beam_right: assets.load_texture(BEAM_RIGHT_FILE)?,
            companion: assets.load_texture(COMPANION_FILE)?,
            tiles: assets.load_texture(TILES_FILE)?,
        });
        Ok(())
    }

    fn handle_key(&mut self, event: KeyEvent) {
        self.world.handle_key(event);
    }

    fn handle_close_requested(&mut self) {
        self.world.request_quit();
    }

    fn tick(&mut self) {
        self.world.tick();
    }

    fn render(&self, target: &mut dyn RenderTarget) {
        let Some(textures) = &self.textures else {
            return;
        };
        target.clear();
        target.draw(textures.background, None, BACKGROUND_X, BACKGROUND_Y);

        let player = &self.world.player;
        if player.visible {
            let clip = player_clip_rect(player_clip(player.facing, player.airborne));
            target.draw(textures.player_sheet, Some(clip), player.x, player.y);
        }

        let wisp = &self.world.companion;
        target.draw(textures.companion, None, wisp.x, wisp.y);

        let enemy = &self.world.enemy;
        if enemy.alive && enemy.visible {
            let clip = enemy_clip_rect(enemy_clip(enemy.facing));
            target.draw(textures.enemy_sheet, Some(clip), enemy.x, enemy.y);
        }

        let beam = &self.world.beam;
        if beam.active {
            let sheet = match beam.facing {
                sim::Facing::Left => textures.beam_left,
                sim::Facing::Right => textures.beam_right,
            };
            target.draw(sheet, Some(beam_clip(beam.facing)), beam.x, beam.y);
        }

        let ground_y = SCREEN_HEIGHT - GROUND_TILE_H;
        let mut tile_x = 0;
        while tile_x < SCREEN_WIDTH {
            target.draw(textures.tiles, Some(GROUND_TILE_CLIP), tile_x, ground_y);
            tile_x += GROUND_TILE_W;
        }
    }

    fn quit_requested(&self) -> bool {
        self.world.quit_requested()
    }
}
