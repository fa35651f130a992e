//! Keyboard input mapping.
//!
//! Maps key events to menu actions. Selection (Enter/Space) and
//! expansion (arrows/Tab) stay on separate keys so neither can trigger
//! the other.

use crossterm::event::KeyEvent;

use super::state::MenuAction;

/// Convert a keyboard event to a MenuAction
pub fn key_to_action(key: KeyEvent) -> Option<MenuAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Select),
        KeyCode::Right | KeyCode::Char('l') => Some(MenuAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(MenuAction::Collapse),
        KeyCode::Tab => Some(MenuAction::ToggleExpand),
        KeyCode::Char('q') | KeyCode::Esc => Some(MenuAction::Quit),
        _ => None,
    }
}
