//! Time-travel tic-tac-toe
//!
//! A terminal tic-tac-toe game that keeps every board reached on the
//! current line of play and lets the player jump back to any of them.
//!
//! # Architecture
//!
//! - **History**: the game controller, owning snapshots and the current index
//! - **BoardView**: status text, cells and click resolution for one snapshot
//! - **Rules**: the pure win detector
//! - **TUI**: ratatui front end that draws the view and feeds clicks back
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{History, Position, Status, TicTacToePlayer as Player};
//!
//! let mut history = History::new();
//! for index in [0, 3, 1, 4, 2] {
//!     history.apply_move(Position::from_index(index).unwrap());
//! }
//! assert_eq!(history.view().status(), Status::Winner(Player::X));
//!
//! history.jump_to(2).unwrap();
//! assert_eq!(history.view().status(), Status::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod games;
mod logging;
mod replay;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Palette, Theme};

// Crate-level exports - Logging
pub use logging::init_stderr as init_stderr_logging;

// Crate-level exports - Replay
pub use replay::replay;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardView, CellView, History, HistoryError, MoveEntry, Phase, Player as TicTacToePlayer,
    Position, Square, Status, WinningLine,
    rules::{LINES, evaluate},
};
