//! Game state aggregate and per-phase updates.
//!
//! Everything the loop mutates between frames lives in [`GameState`]. The
//! update functions here are pure state transitions; drawing is done by the
//! caller from the values they return.

use crate::collision;
use crate::physics::Player;
use crate::scroller::PipePair;
use crate::types::{LossCause, Phase, Pose};

/// What a title-dismiss frame should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleFrame {
    pub pose: Pose,
    pub wipe_step: u16,
}

/// Result of one Play frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayFrame {
    pub pose: Pose,
    pub y: i16,
    pub loss: Option<LossCause>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    phase: Phase,
    /// Rising edges counted in the current phase.
    presses: u32,
    frame: u32,
    wipe_step: u16,
    player: Player,
    pipes: PipePair,
    loss: Option<LossCause>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Attract,
            presses: 0,
            frame: 0,
            wipe_step: 0,
            player: Player::new(),
            pipes: PipePair::new(),
            loss: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn presses(&self) -> u32 {
        self.presses
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn wipe_step(&self) -> u16 {
        self.wipe_step
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn pipes(&self) -> &PipePair {
        &self.pipes
    }

    pub fn loss(&self) -> Option<LossCause> {
        self.loss
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = self.phase.as_str(), to = phase.as_str(), "phase change");
        self.phase = phase;
    }

    /// Apply one counted rising edge. Returns the new phase when it changed.
    pub fn register_press(&mut self) -> Option<Phase> {
        self.presses += 1;
        match self.phase {
            Phase::Attract => {
                self.enter(Phase::TitleDismiss);
                // Frame 0 is the start frame drawn on the press itself.
                self.frame = 1;
                self.wipe_step = 0;
                Some(Phase::TitleDismiss)
            }
            Phase::TitleDismiss => {
                self.start_play();
                Some(Phase::Play)
            }
            Phase::Play => {
                self.player.bank_jump();
                None
            }
            Phase::GameOver => None,
        }
    }

    fn start_play(&mut self) {
        self.enter(Phase::Play);
        self.presses = 0;
        self.frame = 0;
        self.player = Player::new();
        self.pipes = PipePair::new();
    }

    /// Advance the idle animation and the title wipe by one frame.
    pub fn title_frame(&mut self) -> TitleFrame {
        let out = TitleFrame {
            pose: Pose::for_frame(self.frame),
            wipe_step: self.wipe_step,
        };
        self.frame = self.frame.wrapping_add(1);
        self.wipe_step = self.wipe_step.saturating_add(1);
        out
    }

    /// Run physics, scroll and collision for one Play frame.
    ///
    /// A row outside the band is a loss whether the frame starts there or
    /// physics moves it there. The first loss is kept and moves the game to
    /// [`Phase::GameOver`].
    pub fn play_frame(&mut self) -> PlayFrame {
        let pose = self.player.pose();
        let entry = collision::check_bounds(self.player.y());
        let moved = self.player.advance();
        self.pipes.advance();

        let loss = collision::evaluate(entry.or(moved), self.player.y(), &self.pipes);
        if let Some(cause) = loss {
            if self.loss.is_none() {
                self.loss = Some(cause);
                tracing::info!(cause = cause.as_str(), frame = self.frame, "game over");
                self.enter(Phase::GameOver);
            }
        }

        self.player.tick_animation();
        self.frame = self.frame.wrapping_add(1);
        PlayFrame {
            pose,
            y: self.player.y(),
            loss,
        }
    }
}
