//! Tests for the game state machine.

use tictactoe_rules::{
    Cell, GameState, GameStatus, LINES, Line, Mark, Move, MoveOutcome, Position, Rejection,
};

/// Plays the given position numbers, asserting every one is accepted.
fn play(numbers: &[u8]) -> GameState {
    let mut game = GameState::new();
    for &number in numbers {
        let outcome = game.apply_number(number).expect("valid position");
        assert!(outcome.is_accepted(), "move {number} rejected: {outcome:?}");
    }
    game
}

/// Builds a move order in which `winner` completes `line` on its third mark.
///
/// The opponent only plays cells off the line, picked so they never form a
/// line of their own.
fn winning_sequence(line: Line, winner: Mark) -> Vec<Position> {
    let filler_count = if winner == Mark::X { 2 } else { 3 };
    let mut filler: Vec<Position> = Vec::new();
    for pos in Position::ALL {
        if filler.len() == filler_count {
            break;
        }
        if line.contains(&pos) {
            continue;
        }
        let completes_line = LINES
            .iter()
            .any(|other| other.iter().all(|p| *p == pos || filler.contains(p)));
        if !completes_line {
            filler.push(pos);
        }
    }

    let mut fill = filler.into_iter();
    let mut sequence = Vec::new();
    if winner == Mark::O {
        sequence.extend(fill.next());
    }
    for (i, pos) in line.iter().enumerate() {
        sequence.push(*pos);
        if i < 2 {
            sequence.extend(fill.next());
        }
    }
    sequence
}

#[test]
fn test_initial_state() {
    let game = GameState::new();
    assert_eq!(game.current_player(), Mark::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.move_count(), 0);
    assert!(Position::ALL.iter().all(|pos| game.cell_at(*pos) == Cell::Empty));
    assert_eq!(game, GameState::default());
}

#[test]
fn test_alternation() {
    let mut game = GameState::new();
    let order = [5, 1, 9, 3, 2, 8, 4, 6];
    for (k, number) in order.iter().enumerate() {
        let expected = if k % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.current_player(), expected, "before move {k}");
        game.apply_number(*number).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
    }
    assert_eq!(game.current_player(), Mark::X);
}

#[test]
fn test_top_row_scenario() {
    let game = play(&[1, 5, 2, 6, 3]);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.move_count(), 5);
    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_draw_scenario() {
    let game = play(&[1, 2, 3, 5, 4, 7, 6, 9, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_win_on_final_cell_is_not_a_draw() {
    // X completes the left column with the ninth mark.
    let game = play(&[1, 2, 3, 5, 4, 6, 8, 9, 7]);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.winning_line(), Some(LINES[3]));
}

#[test]
fn test_every_line_wins_for_both_marks() {
    for line in LINES {
        for winner in [Mark::X, Mark::O] {
            let mut game = GameState::new();
            let sequence = winning_sequence(line, winner);
            let (last, opening) = sequence.split_last().unwrap();

            for pos in opening {
                assert_eq!(
                    game.apply_move(*pos).status(),
                    Some(GameStatus::InProgress),
                    "line {line:?}, winner {winner}"
                );
            }

            let outcome = game.apply_move(*last);
            assert_eq!(outcome.status(), Some(GameStatus::Won(winner)));
            assert_eq!(game.winning_line(), Some(line));

            // Nothing else is accepted once the line is complete.
            for pos in Position::ALL {
                assert!(!game.apply_move(pos).is_accepted());
            }
        }
    }
}

#[test]
fn test_occupied_cell_is_inert() {
    let mut game = play(&[5, 1]);
    let before = game.clone();

    for number in [5, 1] {
        let outcome = game.apply_number(number).unwrap();
        assert!(matches!(outcome, MoveOutcome::Rejected(Rejection::Occupied(_))));
        assert_eq!(game, before);
    }
}

#[test]
fn test_moves_after_game_over_are_inert() {
    let mut won = play(&[1, 5, 2, 6, 3]);
    let mut drawn = play(&[1, 2, 3, 5, 4, 7, 6, 9, 8]);

    for game in [&mut won, &mut drawn] {
        let before = game.clone();
        for pos in Position::ALL {
            let outcome = game.apply_move(pos);
            assert!(
                outcome.rejection().is_some(),
                "{pos} accepted after game over"
            );
        }
        assert_eq!(*game, before);
    }

    assert_eq!(
        won.apply_move(Position::BottomLeft),
        MoveOutcome::Rejected(Rejection::GameOver(GameStatus::Won(Mark::X)))
    );
}

#[test]
fn test_reset_restores_initial_state() {
    for numbers in [
        &[][..],
        &[5, 1, 9][..],
        &[1, 5, 2, 6, 3][..],
        &[1, 2, 3, 5, 4, 7, 6, 9, 8][..],
    ] {
        let mut game = play(numbers);
        game.reset();
        assert_eq!(game, GameState::new());
        assert_eq!(game.current_player(), Mark::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.move_count(), 0);
        assert!(game.history().is_empty());
    }
}

#[test]
fn test_reset_allows_a_new_game() {
    let mut game = play(&[1, 5, 2, 6, 3]);
    game.reset();
    let outcome = game.apply_move(Position::Center);
    assert_eq!(
        outcome,
        MoveOutcome::Accepted {
            placed: Move::new(Mark::X, Position::Center),
            status: GameStatus::InProgress,
        }
    );
}

#[test]
fn test_history_records_accepted_moves_only() {
    let mut game = GameState::new();
    game.apply_move(Position::Center);
    game.apply_move(Position::Center);
    game.apply_move(Position::TopLeft);
    assert_eq!(
        game.history(),
        &[
            Move::new(Mark::X, Position::Center),
            Move::new(Mark::O, Position::TopLeft),
        ]
    );
}

#[test]
fn test_state_serializes() {
    let game = play(&[1, 5, 2]);
    let json = serde_json::to_string(&game).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
}

#[test]
fn test_stored_win_without_a_line_is_refused() {
    let mut value = serde_json::to_value(GameState::new()).unwrap();
    value["status"] = serde_json::json!({ "Won": "X" });

    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("Status matches the board"));
}

#[test]
fn test_stored_history_must_match_board() {
    let mut value = serde_json::to_value(GameState::new()).unwrap();
    value["history"] = serde_json::json!([{ "mark": "X", "position": "Center" }]);
    value["current_player"] = serde_json::json!("O");

    let err = serde_json::from_value::<GameState>(value).unwrap_err();
    assert!(err.to_string().contains("Inconsistent game state"));
}

#[test]
fn test_stored_moves_after_the_end_are_refused() {
    let game = play(&[1, 5, 2, 6, 3]);
    let mut value = serde_json::to_value(&game).unwrap();
    value["board"]["cells"][6] = serde_json::json!({ "Marked": "O" });
    value["history"]
        .as_array_mut()
        .unwrap()
        .push(serde_json::json!({ "mark": "O", "position": "BottomLeft" }));

    assert!(serde_json::from_value::<GameState>(value).is_err());
}

#[test]
fn test_stored_game_keeps_playing() {
    let game = play(&[1, 5, 9]);
    let json = serde_json::to_string(&game).unwrap();
    let mut restored: GameState = serde_json::from_str(&json).unwrap();
    assert!(restored.apply_move(Position::TopRight).is_accepted());
    assert_eq!(restored.current_player(), Mark::X);
}
