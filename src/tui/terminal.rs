//! Raw mode and alternate screen, restored on drop.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Puts the terminal into game mode and restores it when dropped.
///
/// Restoring runs on every exit path: a normal quit, an error from the
/// event loop, or a failure halfway through [`TerminalGuard::enter`].
#[derive(Debug)]
pub struct TerminalGuard<W: Write> {
    out: W,
    mouse: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Creates a guard writing escape sequences to `out`. Touches nothing yet.
    pub fn new(out: W, mouse: bool) -> Self {
        Self { out, mouse }
    }

    /// Enables raw mode, the alternate screen and, if asked, mouse capture.
    #[instrument(skip(self), fields(mouse = self.mouse))]
    pub fn enter(mut self) -> io::Result<Self> {
        enable_raw_mode()?;
        if self.mouse {
            execute!(self.out, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(self.out, EnterAlternateScreen)?;
        }
        Ok(self)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        if self.mouse {
            let _ = execute!(self.out, DisableMouseCapture);
        }
        let _ = execute!(self.out, LeaveAlternateScreen, Show);
    }
}
