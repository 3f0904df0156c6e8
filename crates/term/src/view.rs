//! CanvasView: maps an indexed canvas into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Canvas;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const OUTSIDE: Rgb = Rgb::new(0, 0, 0);

pub struct CanvasView {
    anchor_y: AnchorY,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
        }
    }
}

impl CanvasView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal cells needed for `canvas` at sampling step `scale`.
    pub fn image_size(canvas: &Canvas, scale: u32) -> (u16, u16) {
        let step = scale.max(1) as u16;
        let px_w = canvas.width().div_ceil(step);
        let px_h = canvas.height().div_ceil(step);
        (px_w, px_h.div_ceil(2))
    }

    /// Render `canvas` into an existing framebuffer.
    ///
    /// Every `scale`-th pixel in each direction is sampled, so a scale of 2
    /// halves both dimensions. `status` goes on the row below the image.
    pub fn render_into(
        &self,
        canvas: &Canvas,
        scale: u32,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let step = scale.max(1) as u16;
        let (img_w, img_h) = Self::image_size(canvas, scale);
        let total_h = img_h + u16::from(status.is_some());
        let start_x = viewport.width.saturating_sub(img_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let sample = |px: u16, py: u16| -> Rgb {
            let x = px.saturating_mul(step);
            let y = py.saturating_mul(step);
            canvas.get(x, y).map(palette::color).unwrap_or(OUTSIDE)
        };

        for cy in 0..img_h {
            for cx in 0..img_w {
                let top = sample(cx, cy * 2);
                let bottom = sample(cx, cy * 2 + 1);
                fb.set(
                    start_x.saturating_add(cx),
                    start_y.saturating_add(cy),
                    Cell::half_block(top, bottom),
                );
            }
        }

        if let Some(text) = status {
            let style = CellStyle {
                bold: true,
                ..CellStyle::default()
            };
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(img_w.saturating_sub(text_w) / 2);
            fb.put_str(x, start_y.saturating_add(img_h), text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &Canvas, scale: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, scale, None, viewport, &mut fb);
        fb
    }
}
