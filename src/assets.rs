//! Sprite atlas loading and the built-in placeholder atlas.
//!
//! A real atlas is a flat file laid out as described by
//! [`SPRITES`](crate::core::SPRITES). Without one, [`placeholder_atlas`] draws
//! simple stand-in sprites in RGB332 so the game is playable out of the box.

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::{sprite, AssetStore, ATLAS_LEN};
use crate::types::{SpriteId, BACKGROUND};

const BLACK: u8 = 0x00;
const WHITE: u8 = 0xFF;
const YELLOW: u8 = 0xFC;
const ORANGE: u8 = 0xF0;
const RED: u8 = 0xE0;
const GRASS: u8 = 0x1C;
const DIRT: u8 = 0x88;
const PIPE: u8 = 0x14;
const PIPE_LIGHT: u8 = 0x5C;

/// Rows of the pipe cap.
const CAP_ROWS: usize = 12;
/// Columns left as background on each side of the pipe body.
const BODY_INSET: usize = 4;

/// Load the atlas named by `FLAPPY_ASSETS`, or the placeholder if unset.
pub fn load_from_env() -> Result<AssetStore> {
    match env::var_os("FLAPPY_ASSETS") {
        Some(path) => load(Path::new(&path)),
        None => {
            tracing::info!("FLAPPY_ASSETS not set, using placeholder sprites");
            Ok(placeholder_atlas())
        }
    }
}

pub fn load(path: &Path) -> Result<AssetStore> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read sprite atlas {}", path.display()))?;
    let store = AssetStore::from_bytes(bytes)
        .with_context(|| format!("invalid sprite atlas {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = store.len(), "loaded sprite atlas");
    Ok(store)
}

/// Mutable view of one sprite inside the atlas bytes.
struct Sketch<'a> {
    w: usize,
    h: usize,
    px: &'a mut [u8],
}

impl<'a> Sketch<'a> {
    fn new(bytes: &'a mut [u8], id: SpriteId) -> Self {
        let d = sprite(id);
        Self {
            w: d.width as usize,
            h: d.height as usize,
            px: &mut bytes[d.offset..d.end()],
        }
    }

    fn fill(&mut self, color: u8) {
        self.px.fill(color);
    }

    fn rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u8) {
        for row in y..(y + h).min(self.h) {
            let start = row * self.w + x.min(self.w);
            let end = row * self.w + (x + w).min(self.w);
            self.px[start..end].fill(color);
        }
    }

    fn border(&mut self, t: usize, color: u8) {
        let (w, h) = (self.w, self.h);
        self.rect(0, 0, w, t, color);
        self.rect(0, h - t, w, t, color);
        self.rect(0, 0, t, h, color);
        self.rect(w - t, 0, t, h, color);
    }

    /// Filled ellipse inscribed in the given box.
    fn ellipse(&mut self, x: usize, y: usize, w: usize, h: usize, color: u8) {
        let (rx, ry) = (w as f32 / 2.0, h as f32 / 2.0);
        let (cx, cy) = (x as f32 + rx, y as f32 + ry);
        for row in y..(y + h).min(self.h) {
            for col in x..(x + w).min(self.w) {
                let dx = (col as f32 + 0.5 - cx) / rx;
                let dy = (row as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.px[row * self.w + col] = color;
                }
            }
        }
    }
}

fn draw_bird(bytes: &mut [u8], id: SpriteId, wing_y: usize) {
    let mut s = Sketch::new(bytes, id);
    s.fill(BACKGROUND);
    s.ellipse(4, 3, 26, 19, YELLOW);
    s.ellipse(20, 6, 8, 8, WHITE);
    s.rect(24, 9, 2, 3, BLACK);
    s.rect(28, 13, 8, 4, ORANGE);
    s.ellipse(5, wing_y, 12, 6, WHITE);
}

fn draw_pipe(bytes: &mut [u8], id: SpriteId, cap_at_top: bool) {
    let mut s = Sketch::new(bytes, id);
    let (w, h) = (s.w, s.h);
    s.fill(BACKGROUND);
    s.rect(BODY_INSET, 0, w - 2 * BODY_INSET, h, PIPE);
    s.rect(BODY_INSET + 4, 0, 4, h, PIPE_LIGHT);
    let cap_y = if cap_at_top { 0 } else { h - CAP_ROWS };
    s.rect(0, cap_y, w, CAP_ROWS, PIPE);
    s.rect(3, cap_y, 4, CAP_ROWS, PIPE_LIGHT);
    s.rect(0, cap_y, w, 1, BLACK);
    s.rect(0, cap_y + CAP_ROWS - 1, w, 1, BLACK);
}

/// Procedurally drawn stand-in sprites.
pub fn placeholder_atlas() -> AssetStore {
    let mut bytes = vec![BACKGROUND; ATLAS_LEN];

    let mut title = Sketch::new(&mut bytes, SpriteId::Title);
    title.fill(ORANGE);
    title.border(3, BLACK);
    title.rect(12, 14, 116, 12, YELLOW);

    let mut ground = Sketch::new(&mut bytes, SpriteId::Ground);
    ground.fill(DIRT);
    ground.rect(0, 0, 200, 4, GRASS);
    for x in (0..200).step_by(10) {
        ground.rect(x, 4, 5, 2, GRASS);
    }

    draw_bird(&mut bytes, SpriteId::BirdLevel, 11);
    draw_bird(&mut bytes, SpriteId::BirdRising, 6);
    draw_bird(&mut bytes, SpriteId::BirdFalling, 15);

    draw_pipe(&mut bytes, SpriteId::PipeLower, true);
    draw_pipe(&mut bytes, SpriteId::PipeUpper, false);

    let mut end = Sketch::new(&mut bytes, SpriteId::EndTitle);
    end.fill(RED);
    end.border(3, WHITE);
    end.rect(15, 16, 120, 8, WHITE);

    match AssetStore::from_bytes(bytes) {
        Ok(store) => store,
        // The buffer is allocated at exactly ATLAS_LEN above.
        Err(_) => AssetStore::solid([ORANGE, DIRT, YELLOW, YELLOW, YELLOW, PIPE, PIPE, RED]),
    }
}
