//! Tests for turn order, game-over detection and the illegal-move rule.

use tictactoe::{Board, GameState, GameStatus, Player, Symbol};

fn ann() -> Player {
    Player::new("Ann", "X")
}

fn bo() -> Player {
    Player::new("Bo", "O")
}

fn game() -> GameState {
    GameState::new([ann(), bo()])
}

fn play(game: &mut GameState, moves: &[i64]) {
    for &pos in moves {
        game.make_move(pos);
    }
}

#[test]
fn test_column_win() {
    let mut game = game();
    play(&mut game, &[1, 2, 4, 5]);
    assert!(!game.board().has_win(&Symbol::from("X")));
    assert!(!game.is_game_over());
    assert_eq!(game.winner(), None);

    game.make_move(7);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(&ann()));
    assert_eq!(game.status(), GameStatus::Won(ann()));
}

#[test]
fn test_second_player_can_win() {
    let mut game = game();
    play(&mut game, &[1, 3, 2, 5, 9, 7]);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(&bo()));
}

#[test]
fn test_draw() {
    let mut game = game();
    let moves = [1, 2, 3, 5, 4, 7, 6, 9, 8];
    for (i, &pos) in moves.iter().enumerate() {
        assert!(!game.is_game_over(), "game ended early at move {i}");
        game.make_move(pos);
    }
    assert_eq!(game.turn(), 9);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let mut game = game();
    play(&mut game, &[1, 3, 2, 4, 6, 5, 7, 8, 9]);
    assert_eq!(game.turn(), 9);
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Draw);

    // X takes 3-5-7 with the ninth move
    let mut game = self::game();
    play(&mut game, &[1, 2, 3, 4, 5, 6, 8, 9]);
    assert!(!game.is_game_over());
    game.make_move(7);
    assert_eq!(game.turn(), 9);
    assert_eq!(game.status(), GameStatus::Won(ann()));
}

#[test]
fn test_illegal_move_still_consumes_turn() {
    let mut game = game();
    game.make_move(0);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player(), &bo());
}

#[test]
fn test_occupied_square_move_passes_turn() {
    let mut game = game();
    game.make_move(5);
    game.make_move(5);
    assert_eq!(game.turn(), 2);
    assert_eq!(game.current_player(), &ann());
    let occupied = game.board().squares().iter().filter(|s| !s.is_empty()).count();
    assert_eq!(occupied, 1);
}

#[test]
fn test_illegal_moves_can_exhaust_turns() {
    let mut game = game();
    play(&mut game, &[0; 9]);
    assert!(game.is_game_over());
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().squares().iter().all(|s| s.is_empty()));
}

#[test]
fn test_shared_symbol_reports_first_player() {
    let mut game = GameState::new([Player::new("Ann", "X"), Player::new("Cy", "X")]);
    play(&mut game, &[1, 2, 3]);
    assert!(game.is_game_over());
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Ann"));
}

#[test]
fn test_reset_starts_a_fresh_session() {
    let mut game = game();
    play(&mut game, &[1, 2, 4, 5, 7]);
    assert!(game.is_game_over());

    game.reset();
    assert_eq!(game.turn(), 0);
    assert_eq!(game.board().size(), 3);
    assert_eq!(game.current_player(), &ann());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!((1..=9).all(|pos| game.is_legal_move(pos)));
}

#[test]
fn test_custom_board_size() {
    let board = Board::with_size(4).expect("size 4 is valid");
    let mut game = GameState::with_board([ann(), bo()], board);
    play(&mut game, &[1, 5, 2, 6, 3, 7]);
    assert!(!game.is_game_over());
    game.make_move(4);
    assert_eq!(game.winner(), Some(&ann()));
}

#[test]
fn test_single_square_game_ends_after_one_move() {
    let board = Board::with_size(1).expect("size 1 is valid");
    let mut game = GameState::with_board([ann(), bo()], board);
    game.make_move(1);
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(&ann()));
}
