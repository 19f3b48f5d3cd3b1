//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lg_core::movement::Direction;

/// Viewer command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step the explorer one tile
    Move(Direction),
    /// Generate a new floor from a fresh seed
    Regenerate,
    Quit,
}

/// Convert a key event to a viewer command.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit), // Ctrl+C
            _ => None,
        };
    }

    match key.code {
        // Vi keys
        KeyCode::Char('h') => Some(Command::Move(Direction::West)),
        KeyCode::Char('j') => Some(Command::Move(Direction::South)),
        KeyCode::Char('k') => Some(Command::Move(Direction::North)),
        KeyCode::Char('l') => Some(Command::Move(Direction::East)),
        KeyCode::Char('y') => Some(Command::Move(Direction::NorthWest)),
        KeyCode::Char('u') => Some(Command::Move(Direction::NorthEast)),
        KeyCode::Char('b') => Some(Command::Move(Direction::SouthWest)),
        KeyCode::Char('n') => Some(Command::Move(Direction::SouthEast)),

        // Arrow keys
        KeyCode::Up => Some(Command::Move(Direction::North)),
        KeyCode::Down => Some(Command::Move(Direction::South)),
        KeyCode::Left => Some(Command::Move(Direction::West)),
        KeyCode::Right => Some(Command::Move(Direction::East)),

        KeyCode::Char('r') => Some(Command::Regenerate),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}
