//! Key bindings: terminal key events to board commands and session requests.
//!
//! | Keys | Action |
//! |------|--------|
//! | `←` `h` `a` | move left |
//! | `→` `l` `d` | move right |
//! | `↓` `j` `s` | move down |
//! | `↑` `k` `w` `Space` | rotate |
//! | `q` `Ctrl-C` | quit |
//! | `r` | restart |
//!
//! Letters match in either case. Any other key, and any letter chord with
//! Ctrl or Alt held, is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Command;

/// What a single key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Quit,
    Restart,
}

/// Look up the binding for a key event.
pub fn classify(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'));
        return ctrl_c.then_some(KeyAction::Quit);
    }

    let command = match key.code {
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Up => Command::Rotate,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => Command::MoveLeft,
            'l' | 'd' => Command::MoveRight,
            'j' | 's' => Command::MoveDown,
            'k' | 'w' | ' ' => Command::Rotate,
            'q' => return Some(KeyAction::Quit),
            'r' => return Some(KeyAction::Restart),
            _ => return None,
        },
        _ => return None,
    };
    Some(KeyAction::Command(command))
}
