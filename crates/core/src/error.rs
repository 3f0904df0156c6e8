use std::fmt;

use crate::types::{Rect, SpriteId};

/// Boxed error returned by scan-out implementations.
pub type ScanOutError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CanvasError {
    OutOfBounds { rect: Rect, width: u16, height: u16 },
    SourceTooShort { needed: usize, actual: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                rect,
                width,
                height,
            } => write!(
                f,
                "rectangle {}x{} at ({}, {}) exceeds {width}x{height} canvas",
                rect.w, rect.h, rect.x, rect.y
            ),
            Self::SourceTooShort { needed, actual } => {
                write!(f, "blit source too short: need {needed} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

#[derive(Debug)]
pub enum CoreError {
    Canvas(CanvasError),
    AtlasTooShort { needed: usize, actual: usize },
    SpriteRows { sprite: SpriteId, first: u16, count: u16 },
    ScanOut(ScanOutError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(e) => write!(f, "canvas: {e}"),
            Self::AtlasTooShort { needed, actual } => {
                write!(f, "sprite atlas too short: need {needed} bytes, got {actual}")
            }
            Self::SpriteRows {
                sprite,
                first,
                count,
            } => write!(
                f,
                "rows {first}..{} out of range for sprite {}",
                *first as u32 + *count as u32,
                sprite.as_str()
            ),
            Self::ScanOut(e) => write!(f, "scan-out: {e}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(e) => Some(e),
            Self::ScanOut(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<CanvasError> for CoreError {
    fn from(e: CanvasError) -> Self {
        Self::Canvas(e)
    }
}
