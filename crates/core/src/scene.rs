//! Scene renderer: composes sprites into a back buffer.
//!
//! There is no full-frame clear during play. Instead each buffer remembers the
//! rectangles its moving sprites were last drawn into ([`Footprints`]); a frame
//! first paints those rectangles with the background, then draws the sprites at
//! their current positions and records the new rectangles. The two buffers lag
//! each other by one frame, so their footprints are tracked separately while
//! the game positions themselves stay single and canonical.

use crate::atlas::{sprite, AssetStore};
use crate::canvas::Canvas;
use crate::error::CoreError;
use crate::scroller::{PipePair, PipePiece};
use crate::types::{
    BufferId, Pose, Rect, SpriteId, BACKGROUND, BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, PIPE_WIDTH,
    TITLE_WIPE_SLICE, TITLE_WIPE_STEPS,
};

/// Rectangles last drawn into one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Footprints {
    pub bird: Option<Rect>,
    /// Part of the title card still on screen.
    pub title: Option<Rect>,
    pub pipe_upper: Option<Rect>,
    pub pipe_lower: Option<Rect>,
}

impl Footprints {
    fn pipe_mut(&mut self, piece: PipePiece) -> &mut Option<Rect> {
        match piece {
            PipePiece::Upper => &mut self.pipe_upper,
            PipePiece::Lower => &mut self.pipe_lower,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    footprints: [Footprints; 2],
}

fn erase(canvas: &mut Canvas, slot: &mut Option<Rect>) -> Result<(), CoreError> {
    if let Some(rect) = slot.take() {
        canvas.fill_rect(rect, BACKGROUND)?;
    }
    Ok(())
}

/// Blit a whole sprite at `rect` (which must have the sprite's size).
fn draw_sprite(
    canvas: &mut Canvas,
    store: &AssetStore,
    id: SpriteId,
    rect: Rect,
) -> Result<(), CoreError> {
    let d = sprite(id);
    canvas.blit(store.pixels(id), d.width as usize, rect)?;
    Ok(())
}

fn draw_anchored(canvas: &mut Canvas, store: &AssetStore, id: SpriteId) -> Result<(), CoreError> {
    match sprite(id).anchor_rect() {
        Some(rect) => draw_sprite(canvas, store, id, rect),
        None => Ok(()),
    }
}

/// Rectangle of the bird sprite whose top row is `y`.
///
/// A negative row maps to a rectangle the canvas rejects.
pub fn bird_rect(y: i16) -> Rect {
    let y = u16::try_from(y).unwrap_or(u16::MAX);
    Rect::new(BIRD_X, y, BIRD_WIDTH, BIRD_HEIGHT)
}

fn title_rect() -> Option<Rect> {
    sprite(SpriteId::Title).anchor_rect()
}

/// Rows of the title card removed after `step` wipe steps (0-based).
pub fn title_wipe_rect(step: u16) -> Rect {
    let title = sprite(SpriteId::Title);
    let (x, y) = title.anchor.unwrap_or((0, 0));
    let bottom = y + title.height;
    let rows = (step.min(TITLE_WIPE_STEPS - 1) + 1) * TITLE_WIPE_SLICE;
    let top = bottom.saturating_sub(rows).max(y);
    Rect::new(x, top, title.width, bottom - top)
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn footprints(&self, buffer: BufferId) -> &Footprints {
        &self.footprints[buffer.index()]
    }

    /// Full-frame composition: background, title, ground and one bird pose at
    /// its anchor. Used for the attract frame and the start frame.
    pub fn compose_start_frame(
        &mut self,
        canvas: &mut Canvas,
        buffer: BufferId,
        store: &AssetStore,
        pose: Pose,
    ) -> Result<(), CoreError> {
        canvas.clear(BACKGROUND);
        self.footprints[buffer.index()] = Footprints::default();
        draw_anchored(canvas, store, SpriteId::Title)?;
        self.footprints[buffer.index()].title = title_rect();
        draw_anchored(canvas, store, SpriteId::Ground)?;
        self.draw_bird(canvas, buffer, store, pose, pose.idle_y())
    }

    pub fn clear_bird(&mut self, canvas: &mut Canvas, buffer: BufferId) -> Result<(), CoreError> {
        erase(canvas, &mut self.footprints[buffer.index()].bird)
    }

    pub fn draw_bird(
        &mut self,
        canvas: &mut Canvas,
        buffer: BufferId,
        store: &AssetStore,
        pose: Pose,
        y: i16,
    ) -> Result<(), CoreError> {
        let rect = bird_rect(y);
        draw_sprite(canvas, store, pose.sprite(), rect)?;
        self.footprints[buffer.index()].bird = Some(rect);
        Ok(())
    }

    pub fn clear_pipes(&mut self, canvas: &mut Canvas, buffer: BufferId) -> Result<(), CoreError> {
        let fp = &mut self.footprints[buffer.index()];
        erase(canvas, &mut fp.pipe_upper)?;
        erase(canvas, &mut fp.pipe_lower)
    }

    /// Draw the visible part of both pipe pieces.
    pub fn draw_pipes(
        &mut self,
        canvas: &mut Canvas,
        buffer: BufferId,
        store: &AssetStore,
        pipes: &PipePair,
    ) -> Result<(), CoreError> {
        let fp = &mut self.footprints[buffer.index()];
        for placement in pipes.placements() {
            let src = &store.pixels(placement.piece.sprite())[placement.src_offset()..];
            canvas.blit(src, PIPE_WIDTH as usize, placement.dst)?;
            *fp.pipe_mut(placement.piece) = Some(placement.dst);
        }
        Ok(())
    }

    /// Paint the opaque mask for the edge the pair is crossing, if any.
    pub fn apply_edge_mask(&self, canvas: &mut Canvas, pipes: &PipePair) -> Result<(), CoreError> {
        if let Some(mask) = pipes.edge_mask() {
            canvas.fill_rect(mask, BACKGROUND)?;
        }
        Ok(())
    }

    /// Remove the title card from the bottom up; steps past the last keep the
    /// whole card removed.
    pub fn wipe_title(
        &mut self,
        canvas: &mut Canvas,
        buffer: BufferId,
        step: u16,
    ) -> Result<(), CoreError> {
        let wiped = title_wipe_rect(step);
        canvas.fill_rect(wiped, BACKGROUND)?;
        let fp = &mut self.footprints[buffer.index()];
        fp.title = match fp.title {
            Some(rest) if wiped.y > rest.y => {
                Some(Rect::new(rest.x, rest.y, rest.w, wiped.y - rest.y))
            }
            _ => None,
        };
        Ok(())
    }

    /// Erase whatever is left of the title card in this buffer.
    pub fn clear_title(&mut self, canvas: &mut Canvas, buffer: BufferId) -> Result<(), CoreError> {
        erase(canvas, &mut self.footprints[buffer.index()].title)
    }

    pub fn overlay_end_title(&self, canvas: &mut Canvas, store: &AssetStore) -> Result<(), CoreError> {
        draw_anchored(canvas, store, SpriteId::EndTitle)
    }
}
