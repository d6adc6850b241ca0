//! Per-frame command batching.
//!
//! The game loop drains every pending terminal event between two frames and
//! applies the resulting commands in order. The batch is fixed-capacity so a
//! burst of auto-repeat events never allocates; commands past the capacity are
//! dropped for that frame.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{classify, KeyAction};
use crate::types::Command;

/// Commands accepted per frame before further input is dropped
pub const MAX_COMMANDS_PER_FRAME: usize = 32;

/// Commands and session requests collected during one frame
#[derive(Debug, Clone, Default)]
pub struct CommandBatch {
    commands: ArrayVec<Command, MAX_COMMANDS_PER_FRAME>,
    quit: bool,
    restart: bool,
}

impl CommandBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one key event.
    ///
    /// Presses and terminal auto-repeats both count; releases are ignored.
    pub fn push_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        match classify(key) {
            Some(KeyAction::Command(command)) => {
                let _ = self.commands.try_push(command);
            }
            Some(KeyAction::Quit) => self.quit = true,
            Some(KeyAction::Restart) => self.restart = true,
            None => {}
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn restart_requested(&self) -> bool {
        self.restart
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && !self.quit && !self.restart
    }

    /// Forget everything, ready for the next frame.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.quit = false;
        self.restart = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn collects_commands_in_order() {
        let mut batch = CommandBatch::new();
        batch.push_key(KeyEvent::from(KeyCode::Left));
        batch.push_key(KeyEvent::from(KeyCode::Up));
        batch.push_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(
            batch.commands(),
            &[Command::MoveLeft, Command::Rotate, Command::MoveDown]
        );
        assert!(!batch.quit_requested());
    }

    #[test]
    fn ignores_release_and_unmapped_keys() {
        let mut batch = CommandBatch::new();
        batch.push_key(key(KeyCode::Left, KeyEventKind::Release));
        batch.push_key(KeyEvent::from(KeyCode::Char('x')));
        assert!(batch.is_empty());
    }

    #[test]
    fn accepts_auto_repeat() {
        let mut batch = CommandBatch::new();
        batch.push_key(key(KeyCode::Right, KeyEventKind::Repeat));
        assert_eq!(batch.commands(), &[Command::MoveRight]);
    }

    #[test]
    fn records_quit_and_restart() {
        let mut batch = CommandBatch::new();
        batch.push_key(KeyEvent::from(KeyCode::Char('r')));
        assert!(batch.restart_requested());
        batch.push_key(KeyEvent::from(KeyCode::Char('q')));
        assert!(batch.quit_requested());
        assert!(batch.commands().is_empty());

        batch.clear();
        assert!(batch.is_empty());
    }

    #[test]
    fn drops_commands_past_capacity() {
        let mut batch = CommandBatch::new();
        for _ in 0..MAX_COMMANDS_PER_FRAME + 5 {
            batch.push_key(KeyEvent::from(KeyCode::Down));
        }
        assert_eq!(batch.commands().len(), MAX_COMMANDS_PER_FRAME);
    }
}
