//! Tests for the non-interactive replay command.

use timetravel_tictactoe::{Phase, Position, TicTacToePlayer as Player, replay};

fn positions(indices: &[usize]) -> Vec<Position> {
    indices.iter().filter_map(|&i| Position::from_index(i)).collect()
}

#[test]
fn test_replay_to_a_win() {
    let mut out = Vec::new();
    let history = replay(&positions(&[0, 3, 1, 4, 2]), &mut out).unwrap();

    assert_eq!(history.len(), 6);
    assert_eq!(history.phase(), Phase::Won(Player::X));

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with(".|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|.\nNext player: X\n"));
    assert!(text.contains("Move #5: X plays Top-right (2)"));
    assert!(text.trim_end().ends_with("X|X|X\n-+-+-\nO|O|.\n-+-+-\n.|.|.\nWinner is X"));
}

#[test]
fn test_replay_skips_ignored_clicks() {
    let mut out = Vec::new();
    let history = replay(&positions(&[4, 4, 0]), &mut out).unwrap();

    assert_eq!(history.len(), 3);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Click 2 on Center (4) ignored"));
    assert!(text.contains("Move #2: O plays Top-left (0)"));
}
