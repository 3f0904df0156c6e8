//! Sprite atlas: the static sprite table and the read-only asset store.
//!
//! Every sprite lives at a fixed offset of one flat byte region, stored
//! row-major at its own width. The table below is the only place those
//! offsets are spelled out.

use crate::error::CoreError;
use crate::types::{Rect, SpriteId, PIPE_SPRITE_HEIGHT, PIPE_WIDTH};

/// Immutable sprite descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDesc {
    pub offset: usize,
    pub width: u16,
    pub height: u16,
    /// Fixed destination (x, y) for sprites that are never moved.
    pub anchor: Option<(u16, u16)>,
}

impl SpriteDesc {
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub const fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// Destination rectangle at `(x, y)`.
    pub const fn rect_at(&self, x: u16, y: u16) -> Rect {
        Rect::new(x, y, self.width, self.height)
    }

    pub fn anchor_rect(&self) -> Option<Rect> {
        self.anchor.map(|(x, y)| self.rect_at(x, y))
    }
}

const fn desc(offset: usize, width: u16, height: u16, anchor: Option<(u16, u16)>) -> SpriteDesc {
    SpriteDesc {
        offset,
        width,
        height,
        anchor,
    }
}

/// Sprite table indexed by [`SpriteId::index`].
pub const SPRITES: [SpriteDesc; SpriteId::COUNT] = [
    desc(0, 140, 40, Some((30, 10))),
    desc(5_600, 200, 25, Some((0, 125))),
    desc(10_600, 36, 25, Some((82, 55))),
    desc(11_500, 36, 25, Some((82, 58))),
    desc(12_400, 36, 25, Some((82, 52))),
    desc(13_300, PIPE_WIDTH, PIPE_SPRITE_HEIGHT, None),
    desc(18_300, PIPE_WIDTH, PIPE_SPRITE_HEIGHT, None),
    desc(23_300, 150, 40, Some((25, 60))),
];

/// Total atlas size in bytes.
pub const ATLAS_LEN: usize = SPRITES[SpriteId::COUNT - 1].end();

pub fn sprite(id: SpriteId) -> SpriteDesc {
    SPRITES[id.index()]
}

/// Read-only sprite bytes, validated against [`SPRITES`] on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetStore {
    bytes: Box<[u8]>,
}

impl AssetStore {
    pub fn from_bytes(bytes: impl Into<Box<[u8]>>) -> Result<Self, CoreError> {
        let bytes = bytes.into();
        if bytes.len() < ATLAS_LEN {
            return Err(CoreError::AtlasTooShort {
                needed: ATLAS_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes })
    }

    /// Build a store where every byte of a sprite holds one colour.
    pub fn solid(colors: [u8; SpriteId::COUNT]) -> Self {
        let mut bytes = vec![0u8; ATLAS_LEN];
        for id in SpriteId::ALL {
            let d = sprite(id);
            bytes[d.offset..d.end()].fill(colors[id.index()]);
        }
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// All bytes of one sprite.
    pub fn pixels(&self, id: SpriteId) -> &[u8] {
        let d = sprite(id);
        &self.bytes[d.offset..d.end()]
    }

    /// `count` full rows of a sprite starting at `first`.
    pub fn rows(&self, id: SpriteId, first: u16, count: u16) -> Result<&[u8], CoreError> {
        let d = sprite(id);
        if first as u32 + count as u32 > d.height as u32 {
            return Err(CoreError::SpriteRows {
                sprite: id,
                first,
                count,
            });
        }
        let start = d.offset + first as usize * d.width as usize;
        let len = count as usize * d.width as usize;
        Ok(&self.bytes[start..start + len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CANVAS_HEIGHT, CANVAS_WIDTH};

    #[test]
    fn sprites_are_packed_back_to_back() {
        for pair in SPRITES.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset);
        }
        assert_eq!(ATLAS_LEN, 29_300);
    }

    #[test]
    fn anchored_sprites_fit_the_canvas() {
        for d in SPRITES.iter() {
            if let Some(r) = d.anchor_rect() {
                assert!(r.fits(CANVAS_WIDTH, CANVAS_HEIGHT), "{:?}", d);
            }
        }
    }

    #[test]
    fn short_store_is_rejected() {
        let err = AssetStore::from_bytes(vec![0u8; ATLAS_LEN - 1]).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AtlasTooShort {
                needed: ATLAS_LEN,
                ..
            }
        ));
    }

    #[test]
    fn rows_slice_the_requested_band() {
        let mut bytes = vec![0u8; ATLAS_LEN];
        let d = sprite(SpriteId::PipeUpper);
        // Mark the last row of the upper pipe.
        let last = d.offset + (d.height as usize - 1) * d.width as usize;
        bytes[last..d.end()].fill(9);
        let store = AssetStore::from_bytes(bytes).unwrap();

        let rows = store.rows(SpriteId::PipeUpper, 99, 1).unwrap();
        assert_eq!(rows.len(), 50);
        assert!(rows.iter().all(|&b| b == 9));
        assert!(store.rows(SpriteId::PipeUpper, 99, 2).is_err());
    }

    #[test]
    fn solid_store_fills_each_sprite() {
        let store = AssetStore::solid([1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(store.pixels(SpriteId::Ground).iter().all(|&b| b == 2));
        assert!(store.pixels(SpriteId::EndTitle).iter().all(|&b| b == 8));
    }
}
