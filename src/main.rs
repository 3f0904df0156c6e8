//! Terminal flappy runner (default binary).
//!
//! The core draws into its two indexed-colour buffers; the terminal scan-out
//! shows whichever one is published and the keyboard stands in for the button.

use std::env;
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use flappy_fb::assets;
use flappy_fb::core::{FrameTiming, Game, SleepPacer};
use flappy_fb::input::KeyboardButton;
use flappy_fb::term::TerminalScanOut;

type TerminalGame = Game<KeyboardButton, TerminalScanOut, SleepPacer>;

const HELP: &str = "space: flap   q: quit";
const HOLD_POLL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    init_tracing()?;

    let store = assets::load_from_env()?;
    let timing = FrameTiming::from_env();
    tracing::info!(?timing, "starting");

    let mut scan_out = TerminalScanOut::new();
    scan_out.set_status(HELP);
    scan_out.renderer_mut().enter()?;

    let mut game = Game::new(store, KeyboardButton::from_env(), scan_out, SleepPacer, timing);
    let result = run(&mut game);

    // Always try to restore terminal state.
    let _ = game
        .presenter_mut()
        .scan_out_mut()
        .renderer_mut()
        .exit();
    result
}

/// Logs go to `FLAPPY_LOG_PATH` when set; the terminal itself is the game.
fn init_tracing() -> Result<()> {
    let Some(path) = env::var_os("FLAPPY_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.to_string_lossy()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn check_input(game: &mut TerminalGame) -> Result<bool> {
    if let Some(e) = game.button_mut().take_error() {
        return Err(e).context("failed to read terminal input");
    }
    Ok(game.button().quit_requested())
}

fn run(game: &mut TerminalGame) -> Result<()> {
    loop {
        if check_input(game)? {
            return Ok(());
        }
        if game.step()?.phase.is_terminal() {
            break;
        }
    }

    let cause = game
        .state()
        .loss()
        .map(|c| c.as_str())
        .unwrap_or("unknown");
    tracing::info!(cause, frames = game.state().frame(), "holding game over screen");

    let status = format!("game over ({cause})   q: quit");
    game.presenter_mut().scan_out_mut().set_status(&status);
    game.presenter_mut().refresh()?;

    while !check_input(game)? {
        game.button_mut()
            .wait(HOLD_POLL)
            .context("failed to read terminal input")?;
    }
    Ok(())
}
