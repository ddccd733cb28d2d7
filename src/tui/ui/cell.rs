//! A single board square.

use crate::config::Palette;
use crate::games::tictactoe::{CellView, Player, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

/// Style for one square.
///
/// The winning-line background always shows. On a winning square the
/// cursor is drawn as an underline instead of a background.
pub fn cell_style(cell: &CellView, is_cursor: bool, palette: &Palette) -> Style {
    let base_style = match cell.square() {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => {
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD)
        }
        Square::Occupied(Player::O) => {
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD)
        }
    };

    match (cell.is_winning(), is_cursor) {
        (true, true) => base_style
            .bg(palette.winning)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base_style.bg(palette.winning).fg(Color::Black),
        (false, true) => base_style.bg(palette.cursor).fg(Color::Black),
        (false, false) => base_style,
    }
}

/// Renders one square, filling its whole area with the cell style.
pub fn render_cell(
    frame: &mut Frame,
    area: Rect,
    cell: &CellView,
    is_cursor: bool,
    palette: &Palette,
) {
    let style = cell_style(cell, is_cursor, palette);

    // Pad so the glyph sits on the middle row.
    let top_padding = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::default()).collect();
    lines.push(Line::from(cell.glyph()));

    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, BoardView, Position};

    fn top_row_won() -> Board {
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |board, p| board.with_mark(p, Player::X))
    }

    #[test]
    fn test_winning_background_beats_cursor() {
        let board = top_row_won();
        let view = BoardView::new(Player::O, &board);
        let palette = Palette::default();

        let style = cell_style(&view.cell(Position::TopRight), true, &palette);
        assert_eq!(style.bg, Some(palette.winning));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_cursor_background_off_the_line() {
        let board = top_row_won();
        let view = BoardView::new(Player::O, &board);
        let palette = Palette::default();

        let style = cell_style(&view.cell(Position::Center), true, &palette);
        assert_eq!(style.bg, Some(palette.cursor));
        let style = cell_style(&view.cell(Position::Center), false, &palette);
        assert_eq!(style.bg, None);
    }
}
