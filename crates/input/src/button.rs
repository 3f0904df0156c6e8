//! Keyboard-backed button register.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! the button reads as held while flap keys keep arriving (auto-repeat) and
//! reads as released once none arrived for the release timeout.

use std::env;
use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::core::{ButtonRegister, BUTTON_MASK};
use crate::map::{is_flap_key, should_quit};

pub const DEFAULT_KEY_RELEASE_MS: u64 = 120;

/// Button level derived from press/release events with a release timeout.
#[derive(Debug, Clone)]
pub struct KeyLevelTracker {
    held: bool,
    last_key_time: Instant,
    key_release_timeout: Duration,
}

impl KeyLevelTracker {
    pub fn new(key_release_timeout: Duration) -> Self {
        Self {
            held: false,
            last_key_time: Instant::now(),
            key_release_timeout,
        }
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn press(&mut self, now: Instant) {
        self.held = true;
        self.last_key_time = now;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Current level; auto-releases a key that went quiet for the timeout.
    pub fn level(&mut self, now: Instant) -> bool {
        if self.held && now.saturating_duration_since(self.last_key_time) > self.key_release_timeout {
            self.held = false;
        }
        self.held
    }
}

/// [`ButtonRegister`] fed from terminal key events.
///
/// Each register read drains the pending events without blocking. Quit keys
/// are latched in [`quit_requested`](Self::quit_requested).
pub struct KeyboardButton {
    tracker: KeyLevelTracker,
    quit: bool,
    error: Option<io::Error>,
}

impl Default for KeyboardButton {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_KEY_RELEASE_MS))
    }
}

impl KeyboardButton {
    pub fn new(key_release_timeout: Duration) -> Self {
        Self {
            tracker: KeyLevelTracker::new(key_release_timeout),
            quit: false,
            error: None,
        }
    }

    /// Create from `FLAPPY_KEY_RELEASE_MS`.
    pub fn from_env() -> Self {
        let ms = match env::var("FLAPPY_KEY_RELEASE_MS") {
            Ok(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "FLAPPY_KEY_RELEASE_MS has invalid value {:?}. Falling back to {}ms.",
                    raw,
                    DEFAULT_KEY_RELEASE_MS
                );
                DEFAULT_KEY_RELEASE_MS
            }),
            Err(_) => DEFAULT_KEY_RELEASE_MS,
        };
        Self::new(Duration::from_millis(ms))
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// First terminal read error, if any. The button reads as released after it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        if !is_flap_key(key) {
            return;
        }
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.tracker.press(now),
            KeyEventKind::Release => self.tracker.release(),
        }
    }

    /// Drain pending terminal events without blocking.
    pub fn pump(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    /// Block up to `timeout` for one event; used while nothing is animating.
    pub fn wait(&mut self, timeout: Duration) -> io::Result<()> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key, Instant::now());
            }
        }
        Ok(())
    }

    pub fn level(&mut self) -> bool {
        self.tracker.level(Instant::now())
    }
}

impl ButtonRegister for KeyboardButton {
    fn read_register(&mut self) -> u32 {
        if self.error.is_none() {
            if let Err(e) = self.pump() {
                tracing::warn!(error = %e, "terminal input failed");
                self.error = Some(e);
            }
        }
        if self.error.is_none() && self.level() {
            BUTTON_MASK
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn tap_auto_releases_after_timeout() {
        let t0 = Instant::now();
        let mut tr = KeyLevelTracker::new(Duration::from_millis(50));
        tr.press(t0);
        assert!(tr.level(t0 + Duration::from_millis(50)));
        assert!(!tr.level(t0 + Duration::from_millis(51)));
    }

    #[test]
    fn auto_repeat_keeps_the_button_held() {
        let t0 = Instant::now();
        let mut tr = KeyLevelTracker::new(Duration::from_millis(50));
        tr.press(t0);
        tr.press(t0 + Duration::from_millis(40));
        assert!(tr.level(t0 + Duration::from_millis(80)));
    }

    #[test]
    fn release_event_drops_the_level_immediately() {
        let now = Instant::now();
        let mut b = KeyboardButton::new(Duration::from_secs(10));
        b.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press), now);
        assert!(b.tracker.level(now));
        b.handle_key(key(KeyCode::Char(' '), KeyEventKind::Release), now);
        assert!(!b.tracker.level(now));
    }

    #[test]
    fn quit_keys_latch_and_do_not_press() {
        let now = Instant::now();
        let mut b = KeyboardButton::default();
        b.handle_key(key(KeyCode::Esc, KeyEventKind::Press), now);
        assert!(b.quit_requested());
        assert!(!b.tracker.level(now));
    }

    #[test]
    fn other_keys_are_ignored() {
        let now = Instant::now();
        let mut b = KeyboardButton::default();
        b.handle_key(key(KeyCode::Left, KeyEventKind::Press), now);
        assert!(!b.tracker.level(now));
        assert!(!b.quit_requested());
    }
}
