//! Tests for the board view and win detector.

use timetravel_tictactoe::{
    Board, BoardView, LINES, Position, Square, Status, TicTacToePlayer as Player, evaluate,
};

#[test]
fn test_status_on_empty_board() {
    let board = Board::new();
    let view = BoardView::new(Player::X, &board);
    assert_eq!(view.status(), Status::NextPlayer(Player::X));
    assert_eq!(view.status().to_string(), "Next player: X");
}

#[test]
fn test_cells_in_row_major_order() {
    let board = Board::new().with_mark(Position::MiddleRight, Player::O);
    let view = BoardView::new(Player::X, &board);
    let cells = view.cells();

    for (index, cell) in cells.iter().enumerate() {
        assert_eq!(cell.position().to_index(), index);
        assert!(!cell.is_winning());
    }
    assert_eq!(cells[5].square(), Square::Occupied(Player::O));
    assert_eq!(cells[5].glyph(), "O");
    assert_eq!(cells[0].glyph(), "");
}

#[test]
fn test_winning_cells_flagged() {
    let board = [Position::TopRight, Position::Center, Position::BottomLeft]
        .into_iter()
        .fold(Board::new(), |board, p| board.with_mark(p, Player::O));
    let view = BoardView::new(Player::X, &board);

    let winning: Vec<usize> = view
        .cells()
        .iter()
        .filter(|cell| cell.is_winning())
        .map(|cell| cell.position().to_index())
        .collect();
    assert_eq!(winning, vec![2, 4, 6]);
    assert_eq!(view.status().to_string(), "Winner is O");
}

#[test]
fn test_click_builds_next_snapshot_without_touching_current() {
    let board = Board::new();
    let view = BoardView::new(Player::O, &board);
    let next = view.handle_click(Position::BottomCenter).expect("square is free");

    assert_eq!(next.get(Position::BottomCenter), Square::Occupied(Player::O));
    assert_eq!(board, Board::new());
}

#[test]
fn test_click_on_taken_square_ignored() {
    let board = Board::new().with_mark(Position::Center, Player::X);
    let view = BoardView::new(Player::O, &board);
    assert_eq!(view.handle_click(Position::Center), None);
}

#[test]
fn test_click_after_win_ignored() {
    let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
        .into_iter()
        .fold(Board::new(), |board, p| board.with_mark(p, Player::X));
    let view = BoardView::new(Player::O, &board);
    assert_eq!(view.handle_click(Position::BottomRight), None);
}

#[test]
fn test_detector_order_rows_columns_diagonals() {
    let expected = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    let actual: Vec<[usize; 3]> = LINES
        .iter()
        .map(|line| line.map(Position::to_index))
        .collect();
    assert_eq!(actual, expected.to_vec());
}

#[test]
fn test_detector_first_match_wins() {
    // X holds the middle column and the anti-diagonal; the column comes first.
    let board = [1, 4, 7, 2, 6]
        .into_iter()
        .filter_map(Position::from_index)
        .fold(Board::new(), |board, p| board.with_mark(p, Player::X));
    let win = evaluate(&board).expect("two lines complete");
    assert_eq!(win.indices(), [1, 4, 7]);
}

#[test]
fn test_board_display() {
    let board = Board::new()
        .with_mark(Position::TopLeft, Player::X)
        .with_mark(Position::Center, Player::O);
    assert_eq!(board.display(), "X|.|.\n-+-+-\n.|O|.\n-+-+-\n.|.|.");
}
