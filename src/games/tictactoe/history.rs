//! Move history with time travel.
//!
//! [`History`] owns every snapshot reached on the current branch and the
//! index of the one on display. Jumping back only moves the index; a move
//! made from an earlier snapshot drops everything after it first.

use super::rules::{self, WinningLine};
use super::view::BoardView;
use super::{Board, Player, Position};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Error raised for an invalid history operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested a move that is not in the history.
    #[display("Move {requested} is out of range (history has {len} entries)")]
    OutOfRange {
        /// Index that was asked for.
        requested: usize,
        /// Number of entries at the time.
        len: usize,
    },
}

/// Phase of the snapshot on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    /// No line complete.
    InProgress,
    /// A player completed a line.
    #[display("Won({_0})")]
    Won(Player),
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    index: usize,
    is_current: bool,
}

impl MoveEntry {
    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this entry is the snapshot on display.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Button text for the entry.
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Game controller: snapshots plus the current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
    current: usize,
}

impl History {
    /// Starts a game with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Snapshot on display.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Index of the snapshot on display.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of snapshots, game start included.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always `false`: the game start is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots on the current branch.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Player who moves from the snapshot on display.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.current)
    }

    /// View of the snapshot on display.
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(self.to_move(), self.current())
    }

    /// Completed line on the snapshot on display.
    pub fn winner(&self) -> Option<WinningLine> {
        rules::evaluate(self.current())
    }

    /// Phase of the snapshot on display.
    pub fn phase(&self) -> Phase {
        match self.winner() {
            Some(win) => Phase::Won(win.winner()),
            None => Phase::InProgress,
        }
    }

    /// The move list, one entry per snapshot.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.snapshots.len())
            .map(|index| MoveEntry {
                index,
                is_current: index == self.current,
            })
            .collect()
    }

    /// Plays the active player's mark at `pos`.
    ///
    /// The board view decides whether the click counts. Returns the new
    /// current index, or `None` when the click was ignored.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn apply_move(&mut self, pos: Position) -> Option<usize> {
        let next = self.view().handle_click(pos)?;
        Some(self.play(next))
    }

    /// Commits `next` as the snapshot after the current one.
    ///
    /// Later snapshots are discarded first. Returns the new current index.
    #[instrument(skip(self, next), fields(current = self.current, len = self.snapshots.len()))]
    pub fn play(&mut self, next: Board) -> usize {
        let dropped = self.snapshots.len() - (self.current + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding forward history");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        if let Some(win) = rules::evaluate(&next) {
            info!(winner = %win.winner(), line = ?win.indices(), "Line completed");
        }
        self.current
    }

    /// Displays the snapshot at `position` without changing the history.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, position: usize) -> Result<(), HistoryError> {
        if position >= self.snapshots.len() {
            return Err(HistoryError::OutOfRange {
                requested: position,
                len: self.snapshots.len(),
            });
        }
        debug!(from = self.current, "Jumping");
        self.current = position;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_entry_labels() {
        let mut history = History::new();
        history.apply_move(Position::Center);
        history.apply_move(Position::TopLeft);

        let labels: Vec<String> = history.moves().iter().map(MoveEntry::label).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_only_current_entry_marked() {
        let mut history = History::new();
        history.apply_move(Position::Center);
        history.apply_move(Position::TopLeft);
        history.jump_to(1).unwrap();

        let current: Vec<usize> = history
            .moves()
            .iter()
            .filter(|entry| entry.is_current())
            .map(MoveEntry::index)
            .collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn test_never_empty() {
        let mut history = History::new();
        assert!(!history.is_empty());
        assert_eq!(history.len(), 1);

        history.apply_move(Position::Center);
        history.jump_to(0).unwrap();
        history.apply_move(Position::TopLeft);
        assert!(!history.is_empty());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut history = History::new();
        let err = history.jump_to(1).unwrap_err();
        assert_eq!(err, HistoryError::OutOfRange { requested: 1, len: 1 });
        assert_eq!(history.current_index(), 0);
    }

    #[test]
    fn test_phase_follows_display() {
        let mut history = History::new();
        for pos in [0, 3, 1, 4, 2] {
            history.apply_move(Position::from_index(pos).unwrap());
        }
        assert_eq!(history.phase(), Phase::Won(Player::X));

        history.jump_to(4).unwrap();
        assert_eq!(history.phase(), Phase::InProgress);

        history.jump_to(5).unwrap();
        assert_eq!(history.phase(), Phase::Won(Player::X));
    }
}
