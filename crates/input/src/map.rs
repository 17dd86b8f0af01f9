//! Key mapping from terminal events to driver actions.

use crate::types::DriverAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to driver actions.
pub fn map_key(key: KeyEvent) -> Option<DriverAction> {
    if should_quit(key) {
        return Some(DriverAction::Quit);
    }

    match key.code {
        // Pause / resume
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(DriverAction::TogglePause)
        }

        // Single step
        KeyCode::Right
        | KeyCode::Enter
        | KeyCode::Char('n')
        | KeyCode::Char('N')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(DriverAction::Step),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(DriverAction::Restart),

        // Speed
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(DriverAction::Faster),
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('_') => Some(DriverAction::Slower),

        _ => None,
    }
}

/// Check if key should quit the simulation.
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
    fn test_pause_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(DriverAction::TogglePause)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('P'))),
            Some(DriverAction::TogglePause)
        );
    }

    #[test]
    fn test_step_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(DriverAction::Step)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('n'))),
            Some(DriverAction::Step)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(DriverAction::Step)
        );
    }

    #[test]
    fn test_speed_and_restart_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('+'))),
            Some(DriverAction::Faster)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('-'))),
            Some(DriverAction::Slower)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(DriverAction::Restart)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
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
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Q'))),
            Some(DriverAction::Quit)
        );
    }
}
