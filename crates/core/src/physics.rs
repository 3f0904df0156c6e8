//! Player physics: discrete jump/fall steps with a one-slot jump bank.

use crate::collision::check_bounds;
use crate::types::{
    Bound, Pose, BIRD_START_Y, FALL_STEP, GROUND_BOUND, JUMP_BANK_CAP, JUMP_RISE, POSE_CYCLE,
    TOP_BOUND,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    y: i16,
    jump_bank: u8,
    pose_frame: u8,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            jump_bank: 0,
            pose_frame: 0,
        }
    }

    /// Top row of the bird sprite.
    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn jump_bank(&self) -> u8 {
        self.jump_bank
    }

    pub fn pose_frame(&self) -> u8 {
        self.pose_frame
    }

    pub fn pose(&self) -> Pose {
        Pose::for_frame(self.pose_frame as u32)
    }

    /// Place the bird at an arbitrary row (no clamping).
    pub fn set_y(&mut self, y: i16) {
        self.y = y;
    }

    /// Deposit one jump impulse. Pressing again before it is consumed does nothing.
    pub fn bank_jump(&mut self) {
        self.jump_bank = (self.jump_bank + 1).min(JUMP_BANK_CAP);
    }

    /// Apply one frame of motion and clamp to the playfield band.
    ///
    /// Returns the band edge that was hit, if the unclamped row left the band.
    pub fn advance(&mut self) -> Option<Bound> {
        let next = if self.jump_bank > 0 {
            self.jump_bank -= 1;
            self.y - JUMP_RISE
        } else {
            self.y + FALL_STEP
        };

        let hit = check_bounds(next);
        self.y = next.clamp(TOP_BOUND, GROUND_BOUND);
        hit
    }

    pub fn tick_animation(&mut self) {
        self.pose_frame = (self.pose_frame + 1) % POSE_CYCLE;
    }
}
