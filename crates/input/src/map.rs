//! Key mapping from terminal events to the button and the quit request.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that act as the flap button.
pub fn is_flap_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char(' ')
            | KeyCode::Up
            | KeyCode::Enter
            | KeyCode::Char('w')
            | KeyCode::Char('W')
            | KeyCode::Char('k')
            | KeyCode::Char('K')
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_flap_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Char('W'),
            KeyCode::Char('k'),
        ] {
            assert!(is_flap_key(KeyEvent::from(code)), "{:?}", code);
        }
        assert!(!is_flap_key(KeyEvent::from(KeyCode::Down)));
        assert!(!is_flap_key(KeyEvent::from(KeyCode::Char('q'))));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }
}
