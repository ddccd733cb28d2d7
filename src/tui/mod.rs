//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, Flow, Focus, HitMap, Message};
pub use input::{Direction, move_cursor};
pub use terminal::TerminalGuard;
pub use ui::draw;

use crate::config::GameConfig;
use crate::logging;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the interactive game until the player quits.
#[instrument(skip_all, fields(log_file = %config.log_file().display()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    logging::init_file(config.log_file(), config.log_filter())?;
    let palette = config.theme().palette().context("Invalid theme")?;

    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::new(io::stdout(), *config.mouse()).enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(palette));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Longest wait for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Draw, wait up to [`POLL_INTERVAL`] for one event, apply it; repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let mut hit_map = HitMap::default();
        terminal.draw(|f| hit_map = ui::draw(f, &app))?;
        app.set_hit_map(hit_map);

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Some(message) = message_for_event(&app, event::read()?) {
            if app.update(message) == Flow::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}

/// Message for one terminal event. Key releases and repeats are ignored.
fn message_for_event(app: &App, event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.message_for_key(key),
        Event::Mouse(mouse) => app.message_for_mouse(mouse),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Palette;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_only_key_presses_become_messages() {
        let app = App::new(Palette::default());
        assert_eq!(
            message_for_event(&app, key(KeyCode::Char('q'), KeyEventKind::Press)),
            Some(Message::Quit)
        );
        assert_eq!(
            message_for_event(&app, key(KeyCode::Char('q'), KeyEventKind::Release)),
            None
        );
        assert_eq!(message_for_event(&app, Event::Resize(80, 24)), None);
    }
}
