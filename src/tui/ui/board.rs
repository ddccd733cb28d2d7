//! Tic-tac-toe board rendering.

use super::cell::render_cell;
use crate::config::Palette;
use crate::games::tictactoe::{BoardView, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board centered in `area`.
///
/// Returns where each square landed, in row-major order.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView<'_>,
    cursor: Option<Position>,
    palette: &Palette,
) -> Vec<(Rect, Position)> {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut regions = Vec::with_capacity(9);
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        regions.extend(render_row(frame, row_area, view, cursor, palette, row));
    }
    render_separator(frame, rows[1]);
    render_separator(frame, rows[3]);
    regions
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView<'_>,
    cursor: Option<Position>,
    palette: &Palette,
    row: usize,
) -> Vec<(Rect, Position)> {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    render_vertical_sep(frame, cols[1]);
    render_vertical_sep(frame, cols[3]);

    [cols[0], cols[2], cols[4]]
        .into_iter()
        .enumerate()
        .filter_map(|(col, cell_area)| {
            let pos = Position::from_row_col(row, col)?;
            let cell = view.cell(pos);
            render_cell(frame, cell_area, &cell, cursor == Some(pos), palette);
            Some((cell_area, pos))
        })
        .collect()
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
