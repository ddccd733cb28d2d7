//! Non-interactive replay of a sequence of clicks.

use crate::games::tictactoe::{History, Position};
use anyhow::Result;
use std::io::Write;
use tracing::{info, instrument, warn};

/// Plays `clicks` from an empty board, writing each board and status.
///
/// Clicks on taken squares or after a win are reported and skipped.
/// Returns the final history.
#[instrument(skip(out))]
pub fn replay(clicks: &[Position], out: &mut impl Write) -> Result<History> {
    let mut history = History::new();
    writeln!(out, "{}", history.current().display())?;
    writeln!(out, "{}", history.view().status())?;

    for (n, &pos) in clicks.iter().enumerate() {
        writeln!(out)?;
        let to_move = history.to_move();
        let next = history.view().handle_click(pos);
        match next {
            Some(next) => {
                let index = history.play(next);
                writeln!(out, "Move #{}: {} plays {} ({})", index, to_move, pos, pos.to_index())?;
                writeln!(out, "{}", history.current().display())?;
                writeln!(out, "{}", history.view().status())?;
            }
            None => {
                warn!(click = n, position = %pos, "Click ignored");
                writeln!(out, "Click {} on {} ({}) ignored", n + 1, pos, pos.to_index())?;
            }
        }
    }

    info!(moves = history.len() - 1, phase = %history.phase(), "Replay finished");
    Ok(history)
}
