//! Frame timing configuration.

use std::env;
use std::time::Duration;

use crate::types::{
    DEFAULT_ATTRACT_POLL_MS, DEFAULT_HANDOFF_MS, DEFAULT_PLAY_FRAME_MS, DEFAULT_TITLE_FRAME_MS,
};

/// Delays requested from the frame pacer, per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTiming {
    /// Between button polls while the attract frame is shown.
    pub attract_poll: Duration,
    /// After the first press, before the title animation starts.
    pub handoff: Duration,
    /// After each title-dismiss frame.
    pub title_frame: Duration,
    /// After each Play frame.
    pub play_frame: Duration,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            attract_poll: Duration::from_millis(DEFAULT_ATTRACT_POLL_MS),
            handoff: Duration::from_millis(DEFAULT_HANDOFF_MS),
            title_frame: Duration::from_millis(DEFAULT_TITLE_FRAME_MS),
            play_frame: Duration::from_millis(DEFAULT_PLAY_FRAME_MS),
        }
    }
}

impl FrameTiming {
    /// All delays zero; useful for headless runs.
    pub fn immediate() -> Self {
        Self {
            attract_poll: Duration::ZERO,
            handoff: Duration::ZERO,
            title_frame: Duration::ZERO,
            play_frame: Duration::ZERO,
        }
    }

    /// Create from environment variables.
    ///
    /// - `FLAPPY_ATTRACT_POLL_MS`
    /// - `FLAPPY_HANDOFF_MS`
    /// - `FLAPPY_TITLE_FRAME_MS`
    /// - `FLAPPY_PLAY_FRAME_MS`
    pub fn from_env() -> Self {
        Self {
            attract_poll: read_env_ms("FLAPPY_ATTRACT_POLL_MS", DEFAULT_ATTRACT_POLL_MS),
            handoff: read_env_ms("FLAPPY_HANDOFF_MS", DEFAULT_HANDOFF_MS),
            title_frame: read_env_ms("FLAPPY_TITLE_FRAME_MS", DEFAULT_TITLE_FRAME_MS),
            play_frame: read_env_ms("FLAPPY_PLAY_FRAME_MS", DEFAULT_PLAY_FRAME_MS),
        }
    }
}

pub(crate) fn parse_ms(value: Option<&str>, default_ms: u64) -> Result<u64, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(default_ms),
        Some(v) => v.parse::<u64>().map_err(|_| v.to_string()),
    }
}

fn read_env_ms(name: &str, default_ms: u64) -> Duration {
    let raw = env::var(name).ok();
    let ms = match parse_ms(raw.as_deref(), default_ms) {
        Ok(ms) => ms,
        Err(bad) => {
            tracing::warn!("{} has invalid value {:?}. Falling back to {}ms.", name, bad, default_ms);
            default_ms
        }
    };
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_constants() {
        let t = FrameTiming::default();
        assert_eq!(t.play_frame, Duration::from_millis(DEFAULT_PLAY_FRAME_MS));
        assert_eq!(t.title_frame, Duration::from_millis(DEFAULT_TITLE_FRAME_MS));
    }

    #[test]
    fn parse_ms_falls_back_on_missing_and_rejects_garbage() {
        assert_eq!(parse_ms(None, 7), Ok(7));
        assert_eq!(parse_ms(Some("  "), 7), Ok(7));
        assert_eq!(parse_ms(Some(" 42 "), 7), Ok(42));
        assert_eq!(parse_ms(Some("fast"), 7), Err("fast".to_string()));
    }
}
