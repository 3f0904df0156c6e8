//! Button input and edge detection.
//!
//! The button is a single bit (bit 0) of an externally owned register. The
//! detector samples it once per frame and turns level changes into edges;
//! holding the button down produces exactly one rising edge.

use std::collections::VecDeque;

/// Bit of the input register carrying the button level.
pub const BUTTON_MASK: u32 = 0x0000_0001;

/// Memory-mapped input register seam.
pub trait ButtonRegister {
    fn read_register(&mut self) -> u32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Rising,
    Falling,
}

#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    last_level: bool,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_level(&self) -> bool {
        self.last_level
    }

    /// Sample the register and report a level change, if any.
    pub fn poll(&mut self, reg: &mut impl ButtonRegister) -> Option<Edge> {
        let level = reg.read_register() & BUTTON_MASK != 0;
        let edge = match (self.last_level, level) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        };
        self.last_level = level;
        edge
    }

    /// Sample the register; true only on a 0 -> 1 transition.
    pub fn rising_edge(&mut self, reg: &mut impl ButtonRegister) -> bool {
        self.poll(reg) == Some(Edge::Rising)
    }
}

/// Register fed from a fixed list of levels, one per read.
///
/// Once the script is exhausted the last level is held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedButton {
    levels: VecDeque<bool>,
    held: bool,
    reads: u64,
}

impl ScriptedButton {
    pub fn new(levels: impl IntoIterator<Item = bool>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
            held: false,
            reads: 0,
        }
    }

    /// Script made of taps: `true` reads as one pressed sample followed by one
    /// released sample, `false` as one released sample.
    pub fn taps(taps: impl IntoIterator<Item = bool>) -> Self {
        let mut levels = Vec::new();
        for tap in taps {
            if tap {
                levels.push(true);
            }
            levels.push(false);
        }
        Self::new(levels)
    }

    pub fn push(&mut self, level: bool) {
        self.levels.push_back(level);
    }

    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl ButtonRegister for ScriptedButton {
    fn read_register(&mut self) -> u32 {
        self.reads += 1;
        if let Some(level) = self.levels.pop_front() {
            self.held = level;
        }
        // Upper bits are noise from other devices on the same register.
        if self.held {
            0xFFFF_FF01
        } else {
            0xFFFF_FF00
        }
    }
}
