use std::path::PathBuf;
use std::sync::Arc;

use image::ImageReader;
use pixels::{Error, Pixels, SurfaceTexture};
use tracing::{info, warn};
use winit::window::Window;

use super::super::game::{AssetError, AssetProvider, ClipRect, RenderTarget, TextureId};

const CLEAR_COLOR: [u8; 4] = [0, 0, 0, 255];

struct LoadedTexture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

/// CPU framebuffer renderer over `pixels`, doubling as the texture store.
/// The logical surface stays at its configured size; window resizes only
/// rebuild the scaled-up presentation surface.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    surface_width: u32,
    surface_height: u32,
    images_dir: PathBuf,
    textures: Vec<LoadedTexture>,
}

impl Renderer {
    pub fn new(
        window: Arc<Window>,
        surface_width: u32,
        surface_height: u32,
        images_dir: PathBuf,
    ) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(
            Arc::clone(&window),
            size.width.max(1),
            size.height.max(1),
            surface_width,
            surface_height,
        )?;
        Ok(Self {
            window,
            pixels,
            surface_width,
            surface_height,
            images_dir,
            textures: Vec::new(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(
            Arc::clone(&self.window),
            width,
            height,
            self.surface_width,
            self.surface_height,
        )?;
        Ok(())
    }

    pub fn present(&mut self) -> Result<(), Error> {
        self.pixels.render()
    }

    fn build_pixels(
        window: Arc<Window>,
        window_width: u32,
        window_height: u32,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(window_width, window_height, window);
        Pixels::new(surface_width, surface_height, surface)
    }
}

impl AssetProvider for Renderer {
    fn load_texture(&mut self, file_name: &str) -> Result<TextureId, AssetError> {
        let path = self.images_dir.join(file_name);
        let reader = ImageReader::open(&path).map_err(|source| AssetError::Open {
            path: path.clone(),
            source,
        })?;
        let decoded = reader
            .decode()
            .map_err(|source| AssetError::Decode {
                path: path.clone(),
                source,
            })?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        let id = TextureId(self.textures.len());
        self.textures.push(LoadedTexture {
            width,
            height,
            rgba: decoded.into_raw(),
        });
        info!(file = file_name, width, height, "texture_loaded");
        Ok(id)
    }

    fn texture_size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures
            .get(id.0)
            .map(|texture| (texture.width, texture.height))
    }
}

impl RenderTarget for Renderer {
    fn clear(&mut self) {
        for chunk in self.pixels.frame_mut().chunks_exact_mut(4) {
            chunk.copy_from_slice(&CLEAR_COLOR);
        }
    }

    fn draw(&mut self, texture: TextureId, clip: Option<ClipRect>, x: i32, y: i32) {
        let Some(loaded) = self.textures.get(texture.0) else {
            warn!(texture_id = texture.0, "draw with unknown texture id");
            return;
        };
        let full = ClipRect::new(0, 0, loaded.width, loaded.height);
        let Some(clip) = clamp_clip_to_texture(clip.unwrap_or(full), loaded.width, loaded.height)
        else {
            return;
        };
        blit(
            self.pixels.frame_mut(),
            self.surface_width,
            self.surface_height,
            &loaded.rgba,
            loaded.width,
            clip,
            x,
            y,
        );
    }
}

/// Restrict a requested clip to the sheet's actual extent. Empty results
/// (including the zero-sized "inactive" clips some sheets carry) draw nothing.
fn clamp_clip_to_texture(clip: ClipRect, width: u32, height: u32) -> Option<ClipRect> {
    if clip.x >= width || clip.y >= height {
        return None;
    }
    let w = clip.w.min(width - clip.x);
    let h = clip.h.min(height - clip.y);
    if w == 0 || h == 0 {
        return None;
    }
    Some(ClipRect::new(clip.x, clip.y, w, h))
}

/// One axis of destination clipping: returns the source offset, destination
/// start, and run length that fall inside a surface of `surface_len`.
fn axis_span(dest_origin: i32, run_len: u32, surface_len: u32) -> Option<(u32, u32, u32)> {
    let run_len = i64::from(run_len);
    let surface_len = i64::from(surface_len);
    let start = i64::from(dest_origin).max(0);
    let end = (i64::from(dest_origin) + run_len).min(surface_len);
    if start >= end {
        return None;
    }
    let src_offset = start - i64::from(dest_origin);
    Some((src_offset as u32, start as u32, (end - start) as u32))
}

#[allow(clippy::too_many_arguments)]
fn blit(
    frame: &mut [u8],
    surface_width: u32,
    surface_height: u32,
    src_rgba: &[u8],
    src_width: u32,
    clip: ClipRect,
    dest_x: i32,
    dest_y: i32,
) {
    let Some((src_x_off, dest_x0, span_w)) = axis_span(dest_x, clip.w, surface_width) else {
        return;
    };
    let Some((src_y_off, dest_y0, span_h)) = axis_span(dest_y, clip.h, surface_height) else {
        return;
    };

    for row in 0..span_h {
        let src_y = clip.y + src_y_off + row;
        let src_row_start = ((src_y * src_width + clip.x + src_x_off) * 4) as usize;
        let dest_row_start = (((dest_y0 + row) * surface_width + dest_x0) * 4) as usize;
        for col in 0..span_w as usize {
            let src = src_row_start + col * 4;
            let dest = dest_row_start + col * 4;
            // Sprite sheets use binary transparency; fully transparent pixels
            // leave the frame untouched.
            if src_rgba[src + 3] == 0 {
                continue;
            }
            frame[dest..dest + 4].copy_from_slice(&src_rgba[src..src + 4]);
        }
    }
}
