//! Integration tests for the simulation pieces working together

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use flappy_fb::core::{
    collision, AssetStore, Canvas, GameState, PipePair, Player, Scene, ATLAS_LEN,
};
use flappy_fb::input::KeyboardButton;
use flappy_fb::types::{
    BufferId, Phase, PipeStatus, BACKGROUND, GROUND_BOUND, PIPE_GAP, PIPE_HEIGHTS,
    PIPE_TOTAL_HEIGHT, TOP_BOUND,
};

#[test]
fn test_pipe_cycle_over_many_recycles() {
    let mut pipes = PipePair::new();
    let mut heights = vec![pipes.upper_height()];
    for _ in 0..2_000 {
        if pipes.advance() {
            assert_eq!(pipes.upper_height() + pipes.lower_height(), PIPE_TOTAL_HEIGHT);
            heights.push(pipes.upper_height());
        }
    }
    assert!(heights.len() > 10);
    for (i, h) in heights.iter().enumerate() {
        assert_eq!(*h, PIPE_HEIGHTS[i % PIPE_HEIGHTS.len()]);
    }
}

#[test]
fn test_pipe_status_sequence() {
    let mut pipes = PipePair::new();
    let mut seen = Vec::new();
    for _ in 0..60 {
        let status = pipes.status();
        if seen.last() != Some(&status) {
            seen.push(status);
        }
        pipes.advance();
    }
    assert_eq!(
        seen,
        vec![
            PipeStatus::Entering,
            PipeStatus::Steady,
            PipeStatus::Exiting,
            PipeStatus::Entering,
        ]
    );
}

#[test]
fn test_gap_is_always_passable() {
    let mut pipes = PipePair::new();
    for _ in 0..PIPE_HEIGHTS.len() {
        // Park the pair in the hit band.
        while pipes.x() > 100 {
            pipes.advance();
        }
        let safe_top = pipes.upper_height() as i16 + 1;
        let safe_bottom = pipes.lower_top() as i16 - 26;
        assert_eq!(pipes.lower_top() - pipes.upper_height() - 1, PIPE_GAP);
        assert!(!collision::pipe_overlap(safe_top, &pipes));
        assert!(!collision::pipe_overlap(safe_bottom, &pipes));
        assert!(collision::pipe_overlap(safe_top - 1, &pipes));
        assert!(collision::pipe_overlap(safe_bottom + 1, &pipes));
        while !pipes.advance() {}
    }
}

#[test]
fn test_player_stays_in_band_under_any_input() {
    let mut player = Player::new();
    for i in 0..500u32 {
        if i % 3 == 0 {
            player.bank_jump();
        }
        let hit = player.advance();
        assert!((TOP_BOUND..=GROUND_BOUND).contains(&player.y()));
        if hit.is_some() {
            player = Player::new();
        }
    }
}

#[test]
fn test_state_phases_follow_presses() {
    let mut state = GameState::new();
    assert_eq!(state.phase(), Phase::Attract);
    state.register_press();
    assert_eq!(state.phase(), Phase::TitleDismiss);
    state.title_frame();
    state.register_press();
    assert_eq!(state.phase(), Phase::Play);
    while state.phase() == Phase::Play {
        state.play_frame();
    }
    assert_eq!(state.phase(), Phase::GameOver);
    assert!(state.loss().is_some());
}

#[test]
fn test_scene_draws_clipped_pipes_at_the_edges() {
    let store = AssetStore::solid([1, 2, 3, 3, 3, 4, 5, 6]);
    let mut scene = Scene::new();
    let mut canvas = Canvas::new(BACKGROUND);
    let mut pipes = PipePair::new();

    // Walk the pair across the whole screen; every frame must stay in bounds.
    for _ in 0..120 {
        scene.clear_pipes(&mut canvas, BufferId::Zero).unwrap();
        pipes.advance();
        scene
            .draw_pipes(&mut canvas, BufferId::Zero, &store, &pipes)
            .unwrap();
        scene.apply_edge_mask(&mut canvas, &pipes).unwrap();
    }
}

#[test]
fn test_short_atlas_is_rejected() {
    assert!(AssetStore::from_bytes(vec![0u8; ATLAS_LEN - 1]).is_err());
    assert!(AssetStore::from_bytes(vec![0u8; ATLAS_LEN]).is_ok());
}

#[test]
fn test_keyboard_button_level_follows_key_events() {
    let key = |kind| KeyEvent {
        code: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    };
    let now = Instant::now();
    let mut button = KeyboardButton::new(Duration::from_secs(60));

    button.handle_key(key(KeyEventKind::Press), now);
    assert!(button.level());
    button.handle_key(key(KeyEventKind::Repeat), now);
    assert!(button.level());
    button.handle_key(key(KeyEventKind::Release), now);
    assert!(!button.level());
    assert!(!button.quit_requested());
}
