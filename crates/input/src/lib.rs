//! Terminal input module.
//!
//! Maps `crossterm` key events onto the single-bit button register the core
//! polls, and provides a level tracker suitable for terminal environments
//! (including terminals without key-release events).

pub mod button;
pub mod map;

pub use flappy_fb_core as core;
pub use flappy_fb_types as types;

pub use button::{KeyLevelTracker, KeyboardButton, DEFAULT_KEY_RELEASE_MS};
pub use map::{is_flap_key, should_quit};
