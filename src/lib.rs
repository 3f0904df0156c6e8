//! Flappy framebuffer game (workspace facade crate).
//!
//! Re-exports the workspace crates as `flappy_fb::{core,input,term,types}` and
//! hosts the sprite atlas loader shared by the binary and the tests.

pub mod assets;

pub use flappy_fb_core as core;
pub use flappy_fb_input as input;
pub use flappy_fb_term as term;
pub use flappy_fb_types as types;
