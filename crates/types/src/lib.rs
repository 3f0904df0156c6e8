//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation core, the terminal scan-out and the tests alike.
//!
//! # Canvas
//!
//! The game draws into a fixed 200x150 canvas with one byte per pixel. Pixel
//! values are palette indices; the sky colour is [`BACKGROUND`].
//!
//! # Playfield geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BIRD_X` | 82 | Fixed bird column |
//! | `TOP_BOUND` | 3 | Highest allowed bird row |
//! | `GROUND_BOUND` | 100 | Lowest allowed bird row |
//! | `GROUND_Y` | 125 | First row of the ground strip |
//! | `PIPE_TOTAL_HEIGHT` | 69 | Upper + lower pipe height |
//! | `PIPE_GAP` | 55 | Vertical gap between the pipes |
//!
//! # Motion
//!
//! - A banked jump moves the bird up `JUMP_RISE` (18) rows in one frame.
//! - Otherwise the bird falls `FALL_STEP` (3) rows per frame.
//! - Pipes scroll left `PIPE_STEP` (5) columns per frame and cycle through
//!   [`PIPE_HEIGHTS`] each time they re-enter from the right.
//!
//! # Examples
//!
//! ```
//! use flappy_fb_types::{Phase, Pose, PIPE_HEIGHTS, PIPE_TOTAL_HEIGHT};
//!
//! assert_eq!(Pose::for_frame(2), Pose::Rising);
//! assert_eq!(Phase::Attract.as_str(), "attract");
//! assert!(PIPE_HEIGHTS.iter().all(|&h| h < PIPE_TOTAL_HEIGHT));
//! ```

/// Canvas width in pixels
pub const CANVAS_WIDTH: u16 = 200;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: u16 = 150;

/// Sky colour index used to clear vacated sprite footprints
pub const BACKGROUND: u8 = 0x57;

/// Value written to the scan-out resolution-scale register
pub const RESOLUTION_SCALE: u32 = 2;

/// Bird sprite column (all poses share it)
pub const BIRD_X: u16 = 82;
pub const BIRD_WIDTH: u16 = 36;
pub const BIRD_HEIGHT: u16 = 25;

/// Bird row in the Attract frame and at the start of Play
pub const BIRD_START_Y: i16 = 55;

/// Highest row the bird may occupy; above it the game is lost
pub const TOP_BOUND: i16 = 3;

/// Lowest row the bird may occupy; below it the game is lost
pub const GROUND_BOUND: i16 = 100;

/// Rows gained by consuming one banked jump
pub const JUMP_RISE: i16 = 18;

/// Rows lost per frame without a jump
pub const FALL_STEP: i16 = 3;

/// Maximum number of pending jump impulses
pub const JUMP_BANK_CAP: u8 = 1;

/// First row of the ground strip (height of the playfield)
pub const GROUND_Y: u16 = 125;

pub const PIPE_WIDTH: u16 = 50;

/// Height of each pipe sprite in the atlas
pub const PIPE_SPRITE_HEIGHT: u16 = 100;

/// First row of the upper pipe
pub const PIPE_TOP_Y: u16 = 1;

/// Upper + lower pipe height, constant across recycles
pub const PIPE_TOTAL_HEIGHT: u16 = 69;

/// Gap between the bottom of the upper pipe and the top of the lower pipe
pub const PIPE_GAP: u16 = GROUND_Y - PIPE_TOP_Y - PIPE_TOTAL_HEIGHT;

/// Pipe x when Play starts (fully off-screen right)
pub const PIPE_SPAWN_X: i16 = 200;

/// Pipe x right after a recycle
pub const PIPE_REENTRY_X: i16 = PIPE_SPAWN_X - PIPE_STEP;

/// Columns scrolled per frame
pub const PIPE_STEP: i16 = 5;

/// A pipe at or left of this x is recycled on the next frame
pub const PIPE_RECYCLE_X: i16 = -40;

/// Frames in a recycle sequence (arming frame + snap frame)
pub const PIPE_RECYCLE_FRAMES: u8 = 2;

/// Upper pipe heights, in recycle order
pub const PIPE_HEIGHTS: [u16; 5] = [39, 19, 59, 29, 49];

/// Pipe x range in which the pipe overlaps the bird column
pub const HIT_BAND_MIN_X: i16 = 40;
pub const HIT_BAND_MAX_X: i16 = 110;

/// Pipes at or right of this x are still entering the screen
pub const ENTERING_MIN_X: i16 = CANVAS_WIDTH as i16 - 55;

/// Pipes at or left of this x are leaving the screen
pub const EXITING_MAX_X: i16 = 0;

/// Width of the opaque edge mask painted over scrolling pipe remnants
pub const EDGE_MASK_WIDTH: u16 = 50;

/// Number of title wipe steps before the title card is gone
pub const TITLE_WIPE_STEPS: u16 = 4;

/// Rows removed per title wipe step
pub const TITLE_WIPE_SLICE: u16 = 10;

/// Frames in one bird pose cycle
pub const POSE_CYCLE: u8 = 4;

/// Default frame pacing (milliseconds)
pub const DEFAULT_ATTRACT_POLL_MS: u64 = 16;
pub const DEFAULT_HANDOFF_MS: u64 = 150;
pub const DEFAULT_TITLE_FRAME_MS: u64 = 120;
pub const DEFAULT_PLAY_FRAME_MS: u64 = 50;

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> u32 {
        self.x as u32 + self.w as u32
    }

    pub const fn bottom(&self) -> u32 {
        self.y as u32 + self.h as u32
    }

    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check whether the rectangle fits inside a `width` x `height` surface
    pub const fn fits(&self, width: u16, height: u16) -> bool {
        self.right() <= width as u32 && self.bottom() <= height as u32
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && (x as u32) < self.right() && y >= self.y && (y as u32) < self.bottom()
    }
}

/// Game phases
///
/// Transitions are driven by counted rising edges of the button:
/// `Attract` -(1st press)-> `TitleDismiss` -(2nd press)-> `Play` -(loss)-> `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Attract,
    TitleDismiss,
    Play,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Attract => "attract",
            Phase::TitleDismiss => "title_dismiss",
            Phase::Play => "play",
            Phase::GameOver => "game_over",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

/// One of the two canvas buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferId {
    Zero,
    One,
}

impl BufferId {
    pub fn other(&self) -> Self {
        match self {
            BufferId::Zero => BufferId::One,
            BufferId::One => BufferId::Zero,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            BufferId::Zero => 0,
            BufferId::One => 1,
        }
    }

    /// Value written to the buffer-select register
    pub fn register_value(&self) -> u32 {
        self.index() as u32
    }
}

/// Bird animation poses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    Level,
    Rising,
    Falling,
}

impl Pose {
    /// Pose for a frame counter: 1 and 3 are level, 2 is rising, 0 is falling.
    pub fn for_frame(frame: u32) -> Self {
        match frame % POSE_CYCLE as u32 {
            1 | 3 => Pose::Level,
            2 => Pose::Rising,
            _ => Pose::Falling,
        }
    }

    /// Row used by the idle (title screen) animation.
    pub fn idle_y(&self) -> i16 {
        match self {
            Pose::Level => 55,
            Pose::Rising => 52,
            Pose::Falling => 58,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        match self {
            Pose::Level => SpriteId::BirdLevel,
            Pose::Rising => SpriteId::BirdRising,
            Pose::Falling => SpriteId::BirdFalling,
        }
    }
}

/// Every drawable asset in the sprite atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Title,
    Ground,
    BirdLevel,
    BirdFalling,
    BirdRising,
    PipeLower,
    PipeUpper,
    EndTitle,
}

impl SpriteId {
    pub const COUNT: usize = 8;

    pub const ALL: [SpriteId; Self::COUNT] = [
        SpriteId::Title,
        SpriteId::Ground,
        SpriteId::BirdLevel,
        SpriteId::BirdFalling,
        SpriteId::BirdRising,
        SpriteId::PipeLower,
        SpriteId::PipeUpper,
        SpriteId::EndTitle,
    ];

    pub fn index(&self) -> usize {
        match self {
            SpriteId::Title => 0,
            SpriteId::Ground => 1,
            SpriteId::BirdLevel => 2,
            SpriteId::BirdFalling => 3,
            SpriteId::BirdRising => 4,
            SpriteId::PipeLower => 5,
            SpriteId::PipeUpper => 6,
            SpriteId::EndTitle => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::Title => "title",
            SpriteId::Ground => "ground",
            SpriteId::BirdLevel => "bird_level",
            SpriteId::BirdFalling => "bird_falling",
            SpriteId::BirdRising => "bird_rising",
            SpriteId::PipeLower => "pipe_lower",
            SpriteId::PipeUpper => "pipe_upper",
            SpriteId::EndTitle => "end_title",
        }
    }
}

/// Where the pipe pair is relative to the screen edges
///
/// Decides which edge needs an opaque mask over partially scrolled remnants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeStatus {
    Entering,
    Steady,
    Exiting,
}

/// Playfield band edge hit by the bird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Ceiling,
    Ground,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LossCause {
    Ceiling,
    Ground,
    Pipe,
}

impl LossCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            LossCause::Ceiling => "ceiling",
            LossCause::Ground => "ground",
            LossCause::Pipe => "pipe",
        }
    }
}

impl From<Bound> for LossCause {
    fn from(bound: Bound) -> Self {
        match bound {
            Bound::Ceiling => LossCause::Ceiling,
            Bound::Ground => LossCause::Ground,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_geometry_leaves_a_fixed_gap() {
        assert_eq!(PIPE_GAP, 55);
        assert_eq!(PIPE_REENTRY_X, 195);
        assert_eq!(ENTERING_MIN_X, 145);
    }

    #[test]
    fn bird_band_fits_above_ground() {
        assert!(GROUND_BOUND as u16 + BIRD_HEIGHT <= GROUND_Y);
        assert!(TOP_BOUND >= 0);
    }

    #[test]
    fn pose_cycle_matches_frame_counter() {
        assert_eq!(Pose::for_frame(0), Pose::Falling);
        assert_eq!(Pose::for_frame(1), Pose::Level);
        assert_eq!(Pose::for_frame(2), Pose::Rising);
        assert_eq!(Pose::for_frame(3), Pose::Level);
        assert_eq!(Pose::for_frame(4), Pose::Falling);
    }

    #[test]
    fn buffer_ids_alternate() {
        assert_eq!(BufferId::Zero.other(), BufferId::One);
        assert_eq!(BufferId::One.other(), BufferId::Zero);
        assert_eq!(BufferId::One.register_value(), 1);
    }

    #[test]
    fn rect_fits_and_contains() {
        let r = Rect::new(190, 140, 10, 10);
        assert!(r.fits(CANVAS_WIDTH, CANVAS_HEIGHT));
        assert!(!Rect::new(191, 140, 10, 10).fits(CANVAS_WIDTH, CANVAS_HEIGHT));
        assert!(r.contains(199, 149));
        assert!(!r.contains(200, 149));
    }

    #[test]
    fn sprite_ids_index_in_order() {
        for (i, id) in SpriteId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }
}
