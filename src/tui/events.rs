use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// User actions from keyboard and mouse events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Esc: close the detail panel, else clear the search, else quit
    Cancel,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    /// Enter: open the selected item, toggle the focused filter option, or close the panel
    Activate,
    ToggleFocus,
    CycleBucket,
    ToggleLifetime,
    LowerCeiling,
    RaiseCeiling,
    Reset,
    CopyToClipboard,
    UpdateSearch(char),
    DeleteChar,
    Click { column: u16, row: u16 },
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => key_to_action(key),
            Event::Mouse(mouse) => mouse_to_action(mouse),
            _ => Action::None,
        });
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Cancel,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Action::ToggleFocus,

        // Price controls
        (KeyCode::Left, _) => Action::LowerCeiling,
        (KeyCode::Right, _) => Action::RaiseCeiling,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::CycleBucket,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ToggleLifetime,

        // Actions
        (KeyCode::Enter, _) => Action::Activate,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Reset,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyToClipboard,

        // Search input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateSearch(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}

fn mouse_to_action(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Action::Click { column: mouse.column, row: mouse.row }
        }
        MouseEventKind::ScrollUp => Action::MoveUp,
        MouseEventKind::ScrollDown => Action::MoveDown,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_quit_and_cancel() {
        assert_eq!(key_to_action(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Esc, KeyModifiers::NONE)), Action::Cancel);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(key_to_action(key(KeyCode::Char('p'), KeyModifiers::CONTROL)), Action::MoveUp);
        assert_eq!(key_to_action(key(KeyCode::Char('n'), KeyModifiers::CONTROL)), Action::MoveDown);
        assert_eq!(key_to_action(key(KeyCode::Up, KeyModifiers::NONE)), Action::MoveUp);
        assert_eq!(key_to_action(key(KeyCode::Down, KeyModifiers::NONE)), Action::MoveDown);
        assert_eq!(key_to_action(key(KeyCode::PageUp, KeyModifiers::NONE)), Action::PageUp);
        assert_eq!(key_to_action(key(KeyCode::PageDown, KeyModifiers::NONE)), Action::PageDown);
        assert_eq!(key_to_action(key(KeyCode::Tab, KeyModifiers::NONE)), Action::ToggleFocus);
    }

    #[test]
    fn test_price_controls() {
        assert_eq!(key_to_action(key(KeyCode::Left, KeyModifiers::NONE)), Action::LowerCeiling);
        assert_eq!(key_to_action(key(KeyCode::Right, KeyModifiers::NONE)), Action::RaiseCeiling);
        assert_eq!(
            key_to_action(key(KeyCode::Char('b'), KeyModifiers::CONTROL)),
            Action::CycleBucket
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Action::ToggleLifetime
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_to_action(key(KeyCode::Enter, KeyModifiers::NONE)), Action::Activate);
        assert_eq!(key_to_action(key(KeyCode::Char('r'), KeyModifiers::CONTROL)), Action::Reset);
        assert_eq!(
            key_to_action(key(KeyCode::Char('y'), KeyModifiers::CONTROL)),
            Action::CopyToClipboard
        );
    }

    #[test]
    fn test_search_input() {
        assert_eq!(
            key_to_action(key(KeyCode::Char('f'), KeyModifiers::NONE)),
            Action::UpdateSearch('f')
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char('F'), KeyModifiers::SHIFT)),
            Action::UpdateSearch('F')
        );
        assert_eq!(
            key_to_action(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Action::UpdateSearch(' ')
        );
        assert_eq!(key_to_action(key(KeyCode::Backspace, KeyModifiers::NONE)), Action::DeleteChar);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key_to_action(key(KeyCode::F(1), KeyModifiers::NONE)), Action::None);
    }

    #[test]
    fn test_mouse_click() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_action(click), Action::Click { column: 4, row: 7 });

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_to_action(moved), Action::None);
    }
}
