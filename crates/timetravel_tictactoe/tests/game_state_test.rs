//! Tests for moves, turn order and time travel.

use timetravel_tictactoe::{
    Board, GameInvariants, GameState, GameStatus, InvariantSet, Move, MoveError, Player, Position,
    Square,
};

fn play(indices: &[usize]) -> GameState {
    indices.iter().fold(GameState::new(), |game, &idx| {
        game.apply_move(Position::from_index(idx).expect("index in range"))
    })
}

#[test]
fn test_occupied_square_is_noop() {
    let game = play(&[0]);
    assert_eq!(
        game.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );

    let after = game.apply_move(Position::TopLeft);
    assert_eq!(after, game);
}

#[test]
fn test_turn_alternation() {
    let game = GameState::new();
    assert_eq!(game.next_player(), Player::X);

    let game = game.apply_move(Position::Center);
    assert_eq!(game.next_player(), Player::O);

    let game = game.apply_move(Position::TopLeft);
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn test_rejected_move_does_not_flip_turn() {
    let game = play(&[4]);
    let after = game.apply_move(Position::Center);
    assert_eq!(after.next_player(), Player::O);
}

#[test]
fn test_time_travel() {
    let game = play(&[0, 4, 8]);
    let rewound = game.jump_to(1);

    let board = rewound.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.occupied(), 1);
    assert_eq!(rewound.next_player(), Player::O);
    // Future is still there until the next move.
    assert_eq!(rewound.history().len(), 4);
    assert_eq!(rewound.jump_to(3), game);
}

#[test]
fn test_branching_discards_future() {
    let game = play(&[0, 4, 8]).jump_to(1).apply_move(Position::MiddleLeft);

    assert_eq!(game.history().moves().len(), 2);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 2);
    assert_eq!(
        game.history().moves(),
        vec![
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::MiddleLeft),
        ]
    );
    assert!(game.current_board().is_empty(Position::Center));
    assert!(game.current_board().is_empty(Position::BottomRight));
}

#[test]
fn test_win_scenario() {
    // X@0, O@3, X@1, O@4, X@2
    let game = play(&[0, 3, 1, 4, 2]);
    assert_eq!(
        GameState::calculate_winner(game.current_board()),
        Some(Player::X)
    );
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.status_line(), "Winner: X");
    assert!(game.valid_moves().is_empty());

    for pos in Position::ALL {
        assert_eq!(game.apply_move(pos), game);
    }
    assert_eq!(
        game.try_apply_move(Position::BottomRight),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_draw_rejects_moves() {
    // X O X / X O O / O X X
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert_eq!(game.status_line(), "Draw");
    assert!(game.valid_moves().is_empty());
    assert_eq!(game.current_step(), 9);
}

#[test]
fn test_rewind_out_of_terminal_state_allows_moves() {
    let won = play(&[0, 3, 1, 4, 2]);
    let rewound = won.jump_to(4);
    assert_eq!(rewound.status(), GameStatus::InProgress);

    let branched = rewound.apply_move(Position::BottomRight);
    assert_ne!(branched, rewound);
    assert_eq!(branched.history().len(), 6);
    assert_eq!(branched.status(), GameStatus::InProgress);
}

#[test]
fn test_jump_to_start() {
    let game = play(&[0, 4]).jump_to(0);
    assert_eq!(game.current_board(), &Board::new());
    assert_eq!(game.next_player(), Player::X);
}

#[test]
fn test_invariants_hold_over_random_walk() {
    // Deterministic walk mixing moves and jumps.
    let mut game = GameState::new();
    let mut seed: usize = 17;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345) % (1 << 31);
        if seed % 4 == 0 {
            game = game.jump_to(seed % game.history().len());
        } else {
            game = game.apply_move(Position::ALL[seed % 9]);
        }
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_json_snapshot_restores() {
    let game = play(&[4, 0, 8]).jump_to(2);
    let json = serde_json::to_string(&game).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
}

#[test]
fn test_json_snapshot_rejects_dangling_step() {
    let json = r#"{"history":[{"squares":["Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty","Empty"]}],"current_step":3}"#;
    let result: Result<GameState, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn test_json_snapshot_rejects_move_after_win() {
    // X@0, O@3, X@1, O@4, X@2, then O@8 appended by hand.
    let won = play(&[0, 3, 1, 4, 2]);
    let mut extra = won.current_board().clone();
    extra.set(Position::BottomRight, Square::Occupied(Player::O));

    let mut value = serde_json::to_value(&won).expect("serialize");
    value["history"]
        .as_array_mut()
        .expect("history is an array")
        .push(serde_json::to_value(&extra).expect("serialize board"));
    value["current_step"] = serde_json::json!(6);

    let result: Result<GameState, _> = serde_json::from_value(value);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("No move follows a won board"), "{}", err);
}
