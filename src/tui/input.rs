//! Keyboard mapping and cursor movement.

use super::app::{Focus, Message};
use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction of a cursor or selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0 or the first move.
    Up,
    /// Toward row 2 or the latest move.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

impl Direction {
    /// Direction for an arrow key or its vi equivalent.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Up | KeyCode::Char('k') => Some(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Moves the cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Translates a key press into an app message.
///
/// Digits `1`-`9` play the matching square regardless of focus.
pub fn message_for_key(key: KeyEvent, focus: Focus, cursor: Position) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Message::Quit),
        KeyCode::Tab | KeyCode::BackTab => return Some(Message::ToggleFocus),
        KeyCode::Home => return Some(Message::JumpToStart),
        KeyCode::End => return Some(Message::JumpToLatest),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            return c
                .to_digit(10)
                .and_then(|digit| (digit as usize).checked_sub(1))
                .and_then(Position::from_index)
                .map(Message::Click);
        }
        _ => {}
    }

    match focus {
        Focus::Board => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Click(cursor)),
            code => Direction::from_key(code).map(Message::MoveCursor),
        },
        Focus::Moves => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Message::JumpToSelected),
            code => match Direction::from_key(code) {
                Some(direction @ (Direction::Up | Direction::Down)) => {
                    Some(Message::SelectMove(direction))
                }
                _ => None,
            },
        },
    }
}
