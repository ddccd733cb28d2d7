//! Presentation model for one board snapshot.
//!
//! [`BoardView`] is a pure function of the snapshot and the player to move.
//! It owns no state: a click yields the next snapshot, and committing that
//! snapshot is left to whoever holds the history.

use super::rules::{self, WinningLine};
use super::{Board, Player, Position, Square};
use derive_more::Display;
use tracing::{debug, instrument};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner is {_0}")]
    Winner(Player),
    /// No line yet; this player moves next.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// One square as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    position: Position,
    square: Square,
    winning: bool,
}

impl CellView {
    /// Where the cell sits on the board.
    pub fn position(&self) -> Position {
        self.position
    }

    /// What the cell holds.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Text shown in the cell; empty when nobody has played here.
    pub fn glyph(&self) -> &'static str {
        self.square.glyph()
    }

    /// Whether the cell is part of the winning line.
    pub fn is_winning(&self) -> bool {
        self.winning
    }
}

/// Read-only view of a snapshot with the turn it was reached on.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    to_move: Player,
    winner: Option<WinningLine>,
}

impl<'a> BoardView<'a> {
    /// Builds the view, classifying the board once.
    #[instrument(level = "trace", skip(board))]
    pub fn new(to_move: Player, board: &'a Board) -> Self {
        Self {
            board,
            to_move,
            winner: rules::evaluate(board),
        }
    }

    /// The snapshot being shown.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Player whose mark the next click places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Completed line on this snapshot, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        self.winner
    }

    /// Text for the status line.
    pub fn status(&self) -> Status {
        match self.winner {
            Some(win) => Status::Winner(win.winner()),
            None => Status::NextPlayer(self.to_move),
        }
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> CellView {
        CellView {
            position: pos,
            square: self.board.get(pos),
            winning: self.winner.is_some_and(|win| win.contains(pos)),
        }
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> [CellView; 9] {
        Position::ALL.map(|pos| self.cell(pos))
    }

    /// Resolves a click on `pos` into the next snapshot.
    ///
    /// Returns `None` when the square is taken or the game is already won.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn handle_click(&self, pos: Position) -> Option<Board> {
        if !self.board.is_empty(pos) || self.winner.is_some() {
            debug!("Click ignored");
            return None;
        }
        Some(self.board.with_mark(pos, self.to_move))
    }
}
