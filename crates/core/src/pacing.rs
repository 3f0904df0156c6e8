//! Frame pacing.
//!
//! The game loop never spins; after each frame it asks a [`FramePacer`] to
//! wait for a fixed duration. Tests use [`NoPacer`] so they never depend on
//! real elapsed time.

use std::time::Duration;

pub trait FramePacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl FramePacer for SleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Returns immediately, keeping a running total of requested waits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPacer {
    pub pauses: u64,
    pub total: Duration,
}

impl FramePacer for NoPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses += 1;
        self.total += duration;
    }
}
