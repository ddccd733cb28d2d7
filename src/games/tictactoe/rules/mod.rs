//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot.

pub mod win;

pub use win::{LINES, WinningLine, evaluate};
