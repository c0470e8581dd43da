//! Key mapping from terminal events to game actions.
//!
//! Diagonals use the corner keys of three common clusters: QE/ZC on the left
//! hand, YU/BN (roguelike) and the numeric keypad 7/9/1/3.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') | KeyCode::Char('Y')
        | KeyCode::Char('7') | KeyCode::Home => Some(GameAction::Move(Direction::UpLeft)),
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Char('u') | KeyCode::Char('U')
        | KeyCode::Char('9') | KeyCode::PageUp => Some(GameAction::Move(Direction::UpRight)),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('b') | KeyCode::Char('B')
        | KeyCode::Char('1') | KeyCode::End => Some(GameAction::Move(Direction::DownLeft)),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('n') | KeyCode::Char('N')
        | KeyCode::Char('3') | KeyCode::PageDown => Some(GameAction::Move(Direction::DownRight)),

        // Lifecycle
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// `q` is a movement key here, so quitting uses Esc or Ctrl+C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn dir(code: KeyCode) -> Option<Direction> {
        match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::Move(d)) => Some(d),
            _ => None,
        }
    }

    #[test]
    fn test_left_hand_cluster() {
        assert_eq!(dir(KeyCode::Char('q')), Some(Direction::UpLeft));
        assert_eq!(dir(KeyCode::Char('e')), Some(Direction::UpRight));
        assert_eq!(dir(KeyCode::Char('z')), Some(Direction::DownLeft));
        assert_eq!(dir(KeyCode::Char('c')), Some(Direction::DownRight));

        assert_eq!(dir(KeyCode::Char('Q')), Some(Direction::UpLeft));
        assert_eq!(dir(KeyCode::Char('C')), Some(Direction::DownRight));
    }

    #[test]
    fn test_roguelike_and_keypad() {
        assert_eq!(dir(KeyCode::Char('y')), Some(Direction::UpLeft));
        assert_eq!(dir(KeyCode::Char('u')), Some(Direction::UpRight));
        assert_eq!(dir(KeyCode::Char('b')), Some(Direction::DownLeft));
        assert_eq!(dir(KeyCode::Char('n')), Some(Direction::DownRight));

        assert_eq!(dir(KeyCode::Char('7')), Some(Direction::UpLeft));
        assert_eq!(dir(KeyCode::Char('9')), Some(Direction::UpRight));
        assert_eq!(dir(KeyCode::Char('1')), Some(Direction::DownLeft));
        assert_eq!(dir(KeyCode::Char('3')), Some(Direction::DownRight));
        assert_eq!(dir(KeyCode::PageDown), Some(Direction::DownRight));
    }

    #[test]
    fn test_orthogonal_keys_do_nothing() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), None);
    }

    #[test]
    fn test_lifecycle_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Start)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
