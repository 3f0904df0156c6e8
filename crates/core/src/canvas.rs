//! Canvas and blitter.
//!
//! A [`Canvas`] is an owned, row-major byte buffer of palette indices. The two
//! drawing primitives are opaque: `fill_rect` writes one colour, `blit` copies
//! sprite bytes verbatim (there is no transparency).
//!
//! Rectangles are checked before any pixel is written. A rectangle that does
//! not fit the canvas is reported as [`CanvasError::OutOfBounds`] and leaves the
//! canvas untouched.

use crate::error::CanvasError;
use crate::types::{Rect, CANVAS_HEIGHT, CANVAS_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Box<[u8]>,
}

impl Canvas {
    /// Create a game-sized canvas filled with `color`.
    pub fn new(color: u8) -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT, color)
    }

    pub fn with_size(width: u16, height: u16, color: u8) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; len].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn clear(&mut self, color: u8) {
        self.pixels.fill(color);
    }

    fn check(&self, rect: Rect) -> Result<(), CanvasError> {
        if rect.fits(self.width, self.height) {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Fill `rect` with a single colour.
    pub fn fill_rect(&mut self, rect: Rect, color: u8) -> Result<(), CanvasError> {
        self.check(rect)?;
        let stride = self.width as usize;
        for row in rect.y as usize..rect.bottom() as usize {
            let start = row * stride + rect.x as usize;
            self.pixels[start..start + rect.w as usize].fill(color);
        }
        Ok(())
    }

    /// Copy sprite bytes into `rect`.
    ///
    /// Destination row `r` receives `src[r * src_stride..][..rect.w]`, so a
    /// sub-rectangle of a sprite can be copied by offsetting `src` and passing
    /// the sprite width as the stride.
    pub fn blit(&mut self, src: &[u8], src_stride: usize, rect: Rect) -> Result<(), CanvasError> {
        self.check(rect)?;
        if rect.is_empty() {
            return Ok(());
        }
        let w = rect.w as usize;
        let needed = (rect.h as usize - 1) * src_stride + w;
        if src_stride < w || src.len() < needed {
            return Err(CanvasError::SourceTooShort {
                needed: needed.max(rect.h as usize * w),
                actual: src.len(),
            });
        }

        let stride = self.width as usize;
        for r in 0..rect.h as usize {
            let dst = (rect.y as usize + r) * stride + rect.x as usize;
            let from = r * src_stride;
            self.pixels[dst..dst + w].copy_from_slice(&src[from..from + w]);
        }
        Ok(())
    }
}
