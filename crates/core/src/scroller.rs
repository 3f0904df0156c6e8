//! Obstacle scroller: the paired pipe pieces.
//!
//! The pair has one logical column `x` (which may be negative or past the right
//! edge while the pair scrolls in and out). Heights come from a fixed cycle and
//! upper + lower always equals [`PIPE_TOTAL_HEIGHT`].

use arrayvec::ArrayVec;

use crate::atlas::sprite;
use crate::types::{
    PipeStatus, Rect, SpriteId, CANVAS_WIDTH, EDGE_MASK_WIDTH, ENTERING_MIN_X, EXITING_MAX_X,
    GROUND_Y, PIPE_HEIGHTS, PIPE_RECYCLE_FRAMES, PIPE_RECYCLE_X, PIPE_REENTRY_X, PIPE_SPAWN_X,
    PIPE_STEP, PIPE_TOP_Y, PIPE_TOTAL_HEIGHT, PIPE_WIDTH,
};

/// Which half of the pair a placement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipePiece {
    Upper,
    Lower,
}

impl PipePiece {
    pub fn sprite(&self) -> SpriteId {
        match self {
            PipePiece::Upper => SpriteId::PipeUpper,
            PipePiece::Lower => SpriteId::PipeLower,
        }
    }
}

/// On-canvas part of one pipe piece and where it comes from in the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub piece: PipePiece,
    pub dst: Rect,
    pub src_row: u16,
    pub src_col: u16,
}

impl Placement {
    /// Byte offset of the first copied pixel, relative to the sprite start.
    pub fn src_offset(&self) -> usize {
        let d = sprite(self.piece.sprite());
        self.src_row as usize * d.width as usize + self.src_col as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipePair {
    x: i16,
    cycle_index: usize,
    recycle_countdown: u8,
}

impl Default for PipePair {
    fn default() -> Self {
        Self::new()
    }
}

impl PipePair {
    /// Pair fully off-screen right with the first height of the cycle.
    pub fn new() -> Self {
        Self {
            x: PIPE_SPAWN_X,
            cycle_index: 0,
            recycle_countdown: 0,
        }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn cycle_index(&self) -> usize {
        self.cycle_index
    }

    pub fn recycle_countdown(&self) -> u8 {
        self.recycle_countdown
    }

    pub fn upper_height(&self) -> u16 {
        PIPE_HEIGHTS[self.cycle_index]
    }

    pub fn lower_height(&self) -> u16 {
        PIPE_TOTAL_HEIGHT - self.upper_height()
    }

    /// First row of the lower piece.
    pub fn lower_top(&self) -> u16 {
        GROUND_Y - self.lower_height()
    }

    #[cfg(test)]
    pub(crate) fn set_x(&mut self, x: i16) {
        self.x = x;
    }

    /// Advance one frame. Returns true on the frame the pair snaps back right.
    pub fn advance(&mut self) -> bool {
        if self.recycle_countdown == 0 {
            self.x -= PIPE_STEP;
            if self.x <= PIPE_RECYCLE_X {
                // This frame still shows the pair at the left edge.
                self.recycle_countdown = PIPE_RECYCLE_FRAMES - 1;
            }
            return false;
        }

        self.recycle_countdown -= 1;
        self.x = PIPE_REENTRY_X;
        self.cycle_index = (self.cycle_index + 1) % PIPE_HEIGHTS.len();
        tracing::trace!(upper = self.upper_height(), "pipe recycled");
        true
    }

    pub fn status(&self) -> PipeStatus {
        if self.x <= EXITING_MAX_X {
            PipeStatus::Exiting
        } else if self.x >= ENTERING_MIN_X {
            PipeStatus::Entering
        } else {
            PipeStatus::Steady
        }
    }

    /// Opaque rectangle covering the edge the pair is scrolling across.
    pub fn edge_mask(&self) -> Option<Rect> {
        match self.status() {
            PipeStatus::Entering => Some(Rect::new(0, 0, EDGE_MASK_WIDTH, GROUND_Y)),
            PipeStatus::Exiting => Some(Rect::new(
                CANVAS_WIDTH - EDGE_MASK_WIDTH,
                0,
                EDGE_MASK_WIDTH,
                GROUND_Y,
            )),
            PipeStatus::Steady => None,
        }
    }

    /// Visible column span `(first canvas column, first sprite column, width)`.
    fn visible_columns(&self) -> Option<(u16, u16, u16)> {
        let left = self.x as i32;
        let right = left + PIPE_WIDTH as i32;
        let start = left.max(0);
        let end = right.min(CANVAS_WIDTH as i32);
        if start >= end {
            return None;
        }
        Some((start as u16, (start - left) as u16, (end - start) as u16))
    }

    /// Clipped placements of both pieces; empty while the pair is off-screen.
    pub fn placements(&self) -> ArrayVec<Placement, 2> {
        let mut out = ArrayVec::new();
        let Some((col, src_col, w)) = self.visible_columns() else {
            return out;
        };

        let upper = self.upper_height();
        let lower = self.lower_height();
        let sprite_h = sprite(SpriteId::PipeUpper).height;

        // The upper piece shows the bottom rows of its sprite (cap last).
        out.push(Placement {
            piece: PipePiece::Upper,
            dst: Rect::new(col, PIPE_TOP_Y, w, upper),
            src_row: sprite_h - upper,
            src_col,
        });
        // The lower piece shows the top rows of its sprite (cap first).
        out.push(Placement {
            piece: PipePiece::Lower,
            dst: Rect::new(col, self.lower_top(), w, lower),
            src_row: 0,
            src_col,
        });
        out
    }
}
