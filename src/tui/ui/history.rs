//! Move list rendering.

use crate::games::tictactoe::MoveEntry;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the move list, one entry per line.
///
/// When the list is taller than `area`, the window scrolls to keep the
/// selected entry (or else the current one) visible. Returns where each
/// visible entry landed.
pub fn render_moves(
    frame: &mut Frame,
    area: Rect,
    entries: &[MoveEntry],
    selected: Option<usize>,
) -> Vec<(Rect, usize)> {
    let visible = area.height as usize;
    if visible == 0 {
        return Vec::new();
    }

    let anchor = selected
        .or_else(|| entries.iter().position(MoveEntry::is_current))
        .unwrap_or(0);
    let offset = (anchor + 1).saturating_sub(visible);

    entries
        .iter()
        .skip(offset)
        .take(visible)
        .enumerate()
        .map(|(row, entry)| {
            let line_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
            frame.render_widget(Paragraph::new(entry_line(entry, selected)), line_area);
            (line_area, entry.index())
        })
        .collect()
}

fn entry_line(entry: &MoveEntry, selected: Option<usize>) -> Line<'static> {
    let marker = if entry.is_current() { "▶ " } else { "  " };
    let mut style = if entry.is_current() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    if selected == Some(entry.index()) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(entry.label(), style),
    ])
}
