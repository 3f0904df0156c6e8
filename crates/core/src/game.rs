//! The frame loop.
//!
//! [`Game`] owns the state, the presenter, the scene footprints and the three
//! external seams. One call to [`Game::step`] runs exactly one frame of the
//! current phase.

use crate::atlas::AssetStore;
use crate::config::FrameTiming;
use crate::error::CoreError;
use crate::game_state::GameState;
use crate::input::{ButtonRegister, EdgeDetector};
use crate::pacing::FramePacer;
use crate::presenter::{Presenter, ScanOut};
use crate::scene::Scene;
use crate::types::{BufferId, LossCause, Phase, Pose};

/// What one [`Game::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Phase after the frame.
    pub phase: Phase,
    /// Buffer made visible by this frame, if one was published.
    pub published: Option<BufferId>,
    /// Loss detected during this frame.
    pub loss: Option<LossCause>,
}

pub struct Game<B, S, P> {
    state: GameState,
    presenter: Presenter<S>,
    scene: Scene,
    store: AssetStore,
    button: B,
    edges: EdgeDetector,
    pacer: P,
    timing: FrameTiming,
    booted: bool,
}

impl<B, S, P> Game<B, S, P>
where
    B: ButtonRegister,
    S: ScanOut,
    P: FramePacer,
{
    pub fn new(store: AssetStore, button: B, scan_out: S, pacer: P, timing: FrameTiming) -> Self {
        Self {
            state: GameState::new(),
            presenter: Presenter::new(scan_out),
            scene: Scene::new(),
            store,
            button,
            edges: EdgeDetector::new(),
            pacer,
            timing,
            booted: false,
        }
    }

    /// Power on the display and draw the attract frame into the back buffer.
    ///
    /// Called by the first [`step`](Self::step) if not called explicitly.
    pub fn boot(&mut self) -> Result<(), CoreError> {
        if self.booted {
            return Ok(());
        }
        self.presenter.power_on()?;
        let back = self.presenter.current_back();
        self.scene.compose_start_frame(
            self.presenter.back_mut(),
            back,
            &self.store,
            Pose::Level,
        )?;
        self.booted = true;
        tracing::debug!(back = back.index(), "booted");
        Ok(())
    }

    pub fn step(&mut self) -> Result<FrameOutcome, CoreError> {
        self.boot()?;
        match self.state.phase() {
            Phase::Attract => self.attract_frame(),
            Phase::TitleDismiss => self.title_frame(),
            Phase::Play => self.play_frame(),
            Phase::GameOver => Ok(self.outcome(None, None)),
        }
    }

    /// Step until the game is over or `max_frames` frames ran.
    pub fn run_until_game_over(&mut self, max_frames: u64) -> Result<Option<LossCause>, CoreError> {
        for _ in 0..max_frames {
            if self.step()?.phase.is_terminal() {
                break;
            }
        }
        Ok(self.state.loss())
    }

    fn outcome(&self, published: Option<BufferId>, loss: Option<LossCause>) -> FrameOutcome {
        FrameOutcome {
            phase: self.state.phase(),
            published,
            loss,
        }
    }

    fn attract_frame(&mut self) -> Result<FrameOutcome, CoreError> {
        if !self.edges.rising_edge(&mut self.button) {
            self.pacer.pause(self.timing.attract_poll);
            return Ok(self.outcome(None, None));
        }

        let front = self.presenter.publish()?;
        let back = self.presenter.current_back();
        self.scene.compose_start_frame(
            self.presenter.back_mut(),
            back,
            &self.store,
            Pose::Falling,
        )?;
        self.state.register_press();
        self.pacer.pause(self.timing.handoff);
        Ok(self.outcome(Some(front), None))
    }

    fn title_frame(&mut self) -> Result<FrameOutcome, CoreError> {
        let frame = self.state.title_frame();
        let back = self.presenter.current_back();
        let canvas = self.presenter.back_mut();
        self.scene.clear_bird(canvas, back)?;
        self.scene.wipe_title(canvas, back, frame.wipe_step)?;
        self.scene
            .draw_bird(canvas, back, &self.store, frame.pose, frame.pose.idle_y())?;

        let front = self.presenter.publish()?;
        self.pacer.pause(self.timing.title_frame);

        if self.edges.rising_edge(&mut self.button) {
            self.state.register_press();
        }
        Ok(self.outcome(Some(front), None))
    }

    fn play_frame(&mut self) -> Result<FrameOutcome, CoreError> {
        if self.edges.rising_edge(&mut self.button) {
            self.state.register_press();
        }

        let back = self.presenter.current_back();
        let canvas = self.presenter.back_mut();
        // A press that cuts the wipe short leaves part of the card behind.
        self.scene.clear_title(canvas, back)?;
        self.scene.clear_bird(canvas, back)?;
        self.scene.clear_pipes(canvas, back)?;

        let frame = self.state.play_frame();
        let pipes = self.state.pipes();
        self.scene.draw_pipes(canvas, back, &self.store, pipes)?;
        self.scene.apply_edge_mask(canvas, pipes)?;
        self.scene
            .draw_bird(canvas, back, &self.store, frame.pose, frame.y)?;

        if frame.loss.is_some() {
            self.scene.overlay_end_title(canvas, &self.store)?;
        }

        let front = self.presenter.publish()?;
        tracing::trace!(y = frame.y, x = pipes.x(), front = front.index(), "play frame");
        self.pacer.pause(self.timing.play_frame);
        Ok(self.outcome(Some(front), frame.loss))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn presenter(&self) -> &Presenter<S> {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut Presenter<S> {
        &mut self.presenter
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn button(&self) -> &B {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn store(&self) -> &AssetStore {
        &self.store
    }
}
