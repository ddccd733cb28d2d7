//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight lines that win the game, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    winner: Player,
    line: [Position; 3],
}

impl WinningLine {
    /// The player holding all three squares.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The three positions of the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is one of the three winning squares.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Classifies a board: the first complete line, or `None`.
///
/// Lines are scanned rows first, then columns, then the two diagonals.
/// A full board without a line also yields `None`; draws are not
/// distinguished from games in progress.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> Option<WinningLine> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(winner)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(WinningLine { winner, line })
            }
            _ => None,
        }
    })
}
