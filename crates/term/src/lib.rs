//! Terminal scan-out.
//!
//! Stands in for the display hardware: whenever the core publishes a buffer,
//! the canvas is decoded through the RGB332 palette, downsampled by the
//! resolution scale and flushed to the terminal with half-block cells.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only emit the cells that changed between frames
//! - Keep the view pure so it can be unit-tested without a terminal

pub mod fb;
pub mod palette;
pub mod renderer;
pub mod scan_out;
pub mod view;

pub use flappy_fb_core as core;
pub use flappy_fb_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scan_out::TerminalScanOut;
pub use view::{AnchorY, CanvasView, Viewport};
