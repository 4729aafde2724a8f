use std::path::PathBuf;

use thiserror::Error;

use super::input::KeyEvent;

/// Handle to a sprite sheet loaded through an [`AssetProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub(crate) usize);

impl TextureId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }
}

/// Rectangular sub-region of a sprite sheet, in sheet pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl ClipRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to open image {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Loads named image assets and answers size queries. Loading is eager; a
/// failed load aborts startup.
pub trait AssetProvider {
    fn load_texture(&mut self, file_name: &str) -> Result<TextureId, AssetError>;
    fn texture_size(&self, id: TextureId) -> Option<(u32, u32)>;
}

/// Receives the draw calls for one frame. Destinations are integer pixels on
/// the fixed logical surface; draws that fall partially or fully outside the
/// surface are clipped.
pub trait RenderTarget {
    fn clear(&mut self);
    /// Draw `clip` of `texture` at (`x`, `y`). A `None` clip draws the whole
    /// texture.
    fn draw(&mut self, texture: TextureId, clip: Option<ClipRect>, x: i32, y: i32);
}

/// One game, driven synchronously by the frame loop: load assets once, then
/// per frame receive input events, advance one tick, and emit draw calls.
pub trait Game {
    fn load(&mut self, assets: &mut dyn AssetProvider) -> Result<(), AssetError>;
    fn handle_key(&mut self, event: KeyEvent);
    fn handle_close_requested(&mut self);
    fn tick(&mut self);
    fn render(&self, target: &mut dyn RenderTarget);
    fn quit_requested(&self) -> bool;
}
