//! Tic-tac-toe with move history and time travel.

mod history;
mod position;
pub mod rules;
mod types;
mod view;

pub use history::{History, HistoryError, MoveEntry, Phase};
pub use position::Position;
pub use rules::WinningLine;
pub use types::{Board, Player, Square};
pub use view::{BoardView, CellView, Status};
