//! Application state and logic.

use super::input::{self, Direction};
use crate::config::Palette;
use crate::games::tictactoe::{History, Position};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{self, Rect};
use tracing::{debug, instrument, warn};

/// Pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Everything the UI can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A square was clicked.
    Click(Position),
    /// A move-list entry was activated.
    JumpTo(usize),
    /// Activate the highlighted move-list entry.
    JumpToSelected,
    /// Show the empty board.
    JumpToStart,
    /// Show the most recent move.
    JumpToLatest,
    /// Step the board cursor.
    MoveCursor(Direction),
    /// Step the move-list selection.
    SelectMove(Direction),
    /// Switch between board and move list.
    ToggleFocus,
    /// Leave the game.
    Quit,
}

/// Screen regions recorded during the last draw, for mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: Vec<(Rect, Position)>,
    moves: Vec<(Rect, usize)>,
}

impl HitMap {
    /// Records where a square was drawn.
    pub fn add_cell(&mut self, area: Rect, pos: Position) {
        self.cells.push((area, pos));
    }

    /// Records where a move-list entry was drawn.
    pub fn add_move(&mut self, area: Rect, index: usize) {
        self.moves.push((area, index));
    }

    /// Message for a click at terminal column `x`, row `y`.
    pub fn message_at(&self, x: u16, y: u16) -> Option<Message> {
        let point = layout::Position::new(x, y);
        if let Some((_, pos)) = self.cells.iter().find(|(area, _)| area.contains(point)) {
            return Some(Message::Click(*pos));
        }
        self.moves
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, index)| Message::JumpTo(*index))
    }
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Stop and restore the terminal.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    history: History,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    palette: Palette,
    hit_map: HitMap,
}

impl App {
    /// Creates a new application.
    pub fn new(palette: Palette) -> Self {
        Self {
            history: History::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            palette,
            hit_map: HitMap::default(),
        }
    }

    /// The game controller.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted move-list entry.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Colors for rendering.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Stores the regions from the latest draw.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Message for a mouse event, if it landed on something clickable.
    pub fn message_for_mouse(&self, mouse: MouseEvent) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.hit_map.message_at(mouse.column, mouse.row)
            }
            _ => None,
        }
    }

    /// Message for a key event in the current focus.
    pub fn message_for_key(&self, key: crossterm::event::KeyEvent) -> Option<Message> {
        input::message_for_key(key, self.focus, self.cursor)
    }

    /// Applies a message to the state.
    #[instrument(skip(self), fields(current = self.history.current_index()))]
    pub fn update(&mut self, message: Message) -> Flow {
        match message {
            Message::Click(pos) => {
                self.cursor = pos;
                let next = self.history.view().handle_click(pos);
                if let Some(next) = next {
                    self.selected_move = self.history.play(next);
                    debug!(position = %pos, "Move played");
                }
            }
            Message::JumpTo(index) => self.jump(index),
            Message::JumpToSelected => self.jump(self.selected_move),
            Message::JumpToStart => self.jump(0),
            Message::JumpToLatest => self.jump(self.history.len() - 1),
            Message::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Message::SelectMove(direction) => {
                let last = self.history.len() - 1;
                self.selected_move = match direction {
                    Direction::Up => self.selected_move.saturating_sub(1),
                    Direction::Down => (self.selected_move + 1).min(last),
                    Direction::Left | Direction::Right => self.selected_move,
                };
            }
            Message::ToggleFocus => {
                self.focus = self.focus.toggle();
                if self.focus == Focus::Moves {
                    self.selected_move = self.history.current_index();
                }
            }
            Message::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn jump(&mut self, index: usize) {
        match self.history.jump_to(index) {
            Ok(()) => self.selected_move = index,
            Err(e) => warn!(error = %e, "Ignoring jump"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Square};

    fn app() -> App {
        App::new(Palette::default())
    }

    #[test]
    fn test_click_plays_and_selects_new_move() {
        let mut app = app();
        app.update(Message::Click(Position::TopLeft));

        assert_eq!(app.history().len(), 2);
        assert_eq!(app.selected_move(), 1);
        assert_eq!(
            app.history().current().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_enter_on_selected_move_jumps() {
        let mut app = app();
        app.update(Message::Click(Position::TopLeft));
        app.update(Message::Click(Position::Center));
        app.update(Message::ToggleFocus);
        assert_eq!(app.selected_move(), 2);

        app.update(Message::SelectMove(Direction::Up));
        app.update(Message::SelectMove(Direction::Up));
        app.update(Message::SelectMove(Direction::Up));
        assert_eq!(app.selected_move(), 0);

        app.update(Message::JumpToSelected);
        assert_eq!(app.history().current_index(), 0);
        assert_eq!(app.history().len(), 3);
    }

    #[test]
    fn test_selection_clamped_to_history() {
        let mut app = app();
        app.update(Message::Click(Position::TopLeft));
        app.update(Message::ToggleFocus);
        app.update(Message::SelectMove(Direction::Down));
        app.update(Message::SelectMove(Direction::Down));
        assert_eq!(app.selected_move(), 1);
    }

    #[test]
    fn test_out_of_range_jump_ignored() {
        let mut app = app();
        app.update(Message::JumpTo(5));
        assert_eq!(app.history().current_index(), 0);
        assert_eq!(app.selected_move(), 0);
    }

    #[test]
    fn test_start_and_latest() {
        let mut app = app();
        app.update(Message::Click(Position::TopLeft));
        app.update(Message::Click(Position::Center));

        app.update(Message::JumpToStart);
        assert_eq!(app.history().current_index(), 0);

        app.update(Message::JumpToLatest);
        assert_eq!(app.history().current_index(), 2);
    }

    #[test]
    fn test_mouse_hits_recorded_regions() {
        let mut app = app();
        let mut hit_map = HitMap::default();
        hit_map.add_cell(Rect::new(10, 5, 12, 3), Position::TopLeft);
        hit_map.add_move(Rect::new(50, 2, 20, 1), 0);
        app.set_hit_map(hit_map);

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };

        assert_eq!(
            app.message_for_mouse(click(11, 6)),
            Some(Message::Click(Position::TopLeft))
        );
        assert_eq!(app.message_for_mouse(click(55, 2)), Some(Message::JumpTo(0)));
        assert_eq!(app.message_for_mouse(click(0, 0)), None);
    }

    #[test]
    fn test_quit() {
        assert_eq!(app().update(Message::Quit), Flow::Quit);
    }
}
