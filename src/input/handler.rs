use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// A key press translated into something the game loop acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Maps terminal key events to commands. Arrows and WASD steer.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn translate(&self, key: KeyEvent) -> Option<Command> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Command::Steer(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Command::Steer(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Command::Steer(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Command::Steer(Direction::Right)),

            KeyCode::Char(' ') | KeyCode::Char('p' | 'P') => Some(Command::TogglePause),
            KeyCode::Char('r' | 'R') => Some(Command::Restart),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
