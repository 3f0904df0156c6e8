//! Core game logic - the frame loop, the simulation and the compositor
//!
//! This crate holds everything that decides what is on screen. It talks to the
//! outside world only through three seams, which makes it:
//!
//! - **Deterministic**: the same button script produces identical frames
//! - **Testable**: scripted input, a counting scan-out and a no-op pacer
//! - **Portable**: the terminal front-end is one implementation among others
//! - **Fast**: the Play frame path does not allocate
//!
//! # Module Structure
//!
//! - [`canvas`]: bounds-checked indexed-colour buffer with `fill_rect` and `blit`
//! - [`presenter`]: double buffering and the scan-out seam
//! - [`input`]: button register seam and rising-edge detection
//! - [`atlas`]: static sprite table and the validated asset store
//! - [`physics`]: bird motion with a one-slot jump bank
//! - [`scroller`]: the recycled pipe pair
//! - [`collision`]: band and pipe overlap tests
//! - [`scene`]: per-buffer footprints and sprite composition
//! - [`game_state`]: the state aggregate and per-phase updates
//! - [`game`]: the frame loop tying it all together
//!
//! # Example
//!
//! ```
//! use flappy_fb_core::{AssetStore, FrameTiming, Game, NoPacer, NullScanOut, ScriptedButton};
//! use flappy_fb_core::types::{LossCause, Phase};
//!
//! // Two taps: dismiss the title, then start playing. Never flap again.
//! let button = ScriptedButton::taps([true, true]);
//! let store = AssetStore::solid([1, 2, 3, 3, 3, 4, 5, 6]);
//! let mut game = Game::new(store, button, NullScanOut::default(), NoPacer::default(), FrameTiming::immediate());
//!
//! let loss = game.run_until_game_over(1_000).unwrap();
//! assert_eq!(loss, Some(LossCause::Ground));
//! assert_eq!(game.state().phase(), Phase::GameOver);
//! ```
//!
//! # Timing
//!
//! Frames are paced through [`FramePacer`]; see [`FrameTiming`] for the
//! per-phase delays and the environment variables that override them.

pub mod atlas;
pub mod canvas;
pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod game_state;
pub mod input;
pub mod pacing;
pub mod physics;
pub mod presenter;
pub mod scene;
pub mod scroller;

pub use flappy_fb_types as types;

// Re-export commonly used types for convenience
pub use atlas::{sprite, AssetStore, SpriteDesc, ATLAS_LEN, SPRITES};
pub use canvas::Canvas;
pub use config::FrameTiming;
pub use error::{CanvasError, CoreError, ScanOutError};
pub use game::{FrameOutcome, Game};
pub use game_state::{GameState, PlayFrame, TitleFrame};
pub use input::{ButtonRegister, Edge, EdgeDetector, ScriptedButton, BUTTON_MASK};
pub use pacing::{FramePacer, NoPacer, SleepPacer};
pub use physics::Player;
pub use presenter::{NullScanOut, Presenter, ScanOut};
pub use scene::{Footprints, Scene};
pub use scroller::{Placement, PipePair, PipePiece};
