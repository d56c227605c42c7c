//! Tests for the headless replay command.

use timetravel_tictactoe::{GameState, GameStatus, Player, Position};
use timetravel_tui::{ReplayFormat, parse_moves, render, replay};

#[test]
fn test_parse_indices_and_labels() {
    let moves = parse_moves("0, center ,8").expect("valid moves");
    assert_eq!(
        moves,
        vec![Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert!(parse_moves("").expect("empty is fine").is_empty());
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert!(parse_moves("0,9").is_err());
}

#[test]
fn test_replay_with_jump() {
    let moves = parse_moves("0,4,8").unwrap();
    let game = replay(&moves, Some(1));
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.next_player(), Player::O);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_replay_skips_illegal_moves() {
    // Second 0 is occupied; moves after the win are ignored.
    let moves = parse_moves("0,0,3,1,4,2,8").unwrap();
    let game = replay(&moves, Some(42));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.current_step(), 5);
}

#[test]
fn test_json_output_round_trips() {
    let game = replay(&parse_moves("4,0").unwrap(), None);
    let json = render(&game, ReplayFormat::Json).expect("json");
    let restored: GameState = serde_json::from_str(&json).expect("valid state");
    assert_eq!(restored, game);
}
