//! Stateless UI rendering using ratatui.

mod board;
mod cell;
mod history;

use super::app::{App, Focus, HitMap};
use crate::games::tictactoe::Status;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use board::render_board;
use history::render_moves;

const HELP: &str = "Arrows/hjkl: move | Enter/1-9: play | Tab: moves | Home/End: start/latest | Q: quit";

/// Draws the whole screen and returns the clickable regions.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let mut hit_map = HitMap::default();
    let view = app.history().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(24)])
        .split(chunks[1]);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let board_block = pane("Board", app.focus() == Focus::Board);
    let board_area = board_block.inner(body[0]);
    frame.render_widget(board_block, body[0]);
    for (area, pos) in render_board(frame, board_area, &view, cursor, app.palette()) {
        hit_map.add_cell(area, pos);
    }

    let moves_block = pane("Moves", app.focus() == Focus::Moves);
    let moves_area = moves_block.inner(body[1]);
    frame.render_widget(moves_block, body[1]);
    let selected = (app.focus() == Focus::Moves).then_some(app.selected_move());
    for (area, index) in render_moves(frame, moves_area, &app.history().moves(), selected) {
        hit_map.add_move(area, index);
    }

    let status = view.status();
    let status_style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status_text = Paragraph::new(status.to_string())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);

    hit_map
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}
