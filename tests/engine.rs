extern crate connect_four;

use connect_four::game::connect_four::ConnectFour;
use connect_four::game::error::GameError;
use connect_four::game::game::{FinishedState, Game, GameState, MoveOutcome};
use connect_four::game::grid::GridIndex;
use connect_four::game::player_pair::PlayerSlot;

const RED: &str = "red";
const GOLD: &str = "gold";

fn standard_game() -> ConnectFour<&'static str> {
    ConnectFour::new(RED, GOLD)
}

/// plays every column in order, panicking on a rejected move
fn play(
    game: &mut ConnectFour<&'static str>,
    cols: impl IntoIterator<Item = usize>,
) -> Vec<MoveOutcome> {
    cols.into_iter()
        .map(|col| game.update(col).unwrap())
        .collect()
}

#[test]
fn test_vertical_win_with_interleaved_opponent() {
    let mut game = standard_game();
    let outcomes = play(&mut game, [0, 6, 0, 6, 0, 6, 0]);

    // the first six moves keep the game going
    for outcome in &outcomes[..6] {
        assert!(matches!(outcome.state, GameState::Turn(_)));
    }
    let last = outcomes.last().unwrap();
    assert_eq!(
        last.state,
        GameState::Finished(FinishedState::Win(PlayerSlot::First))
    );
    assert_eq!(last.cell, GridIndex::new(2, 0));
    assert_eq!(*game.player(PlayerSlot::First), RED);
}

#[test]
fn test_full_board_without_a_line_is_a_tie() {
    let mut game = standard_game();

    // fills the board two rows at a time; columns 0-2 and 6 alternate
    // owners opposite to columns 3-5, which keeps every run below four
    let mut columns = Vec::new();
    for _ in 0..3 {
        columns.extend([0, 3, 1, 4, 2, 5, 6, 0, 3, 1, 4, 2, 5, 6]);
    }
    assert_eq!(columns.len(), 42);

    let outcomes = play(&mut game, columns);
    for outcome in &outcomes[..41] {
        assert!(matches!(outcome.state, GameState::Turn(_)));
    }
    assert_eq!(
        outcomes.last().unwrap().state,
        GameState::Finished(FinishedState::Draw)
    );
    assert!(!game.has_winning_line(PlayerSlot::First));
    assert!(!game.has_winning_line(PlayerSlot::Second));
}

#[test]
fn test_out_of_range_columns_are_rejected_without_mutation() {
    let mut game = standard_game();
    play(&mut game, [2, 3]);
    let board = game.board().clone();
    let state = game.state();

    for col in [7, 100, usize::MAX] {
        assert_eq!(game.update(col).unwrap_err(), GameError::invalid_column(6, col));
        assert_eq!(*game.board(), board);
        assert_eq!(game.state(), state);
    }
}

#[test]
fn test_diagonal_staircase_win_on_minimal_board() {
    let mut game = ConnectFour::with_dimensions(RED, GOLD, 4, 4).unwrap();
    let outcomes = play(&mut game, [0, 1, 1, 2, 3, 2, 2, 3, 3, 0, 3]);

    let last = outcomes.last().unwrap();
    assert_eq!(
        last.state,
        GameState::Finished(FinishedState::Win(PlayerSlot::First))
    );
    // the run climbs from the bottom-left corner to the top-right one
    assert_eq!(last.cell, GridIndex::new(0, 3));
    for (row, col) in [(3, 0), (2, 1), (1, 2), (0, 3)] {
        assert_eq!(
            game.board()[GridIndex::new(row, col)],
            Some(PlayerSlot::First)
        );
    }
}

#[test]
fn test_win_detected_from_any_completing_cell() {
    let run = [2, 3, 4, 5];
    for last in run {
        let mut game = standard_game();
        for col in run.into_iter().filter(|&col| col != last) {
            game.update(col).unwrap();
            game.update(0).unwrap();
        }
        let outcome = game.update(last).unwrap();
        assert_eq!(
            outcome.state,
            GameState::Finished(FinishedState::Win(PlayerSlot::First)),
            "run not detected when column {} completes it",
            last
        );
        assert_eq!(outcome.cell, GridIndex::new(5, last));
    }
}

#[test]
fn test_landing_row_matches_column_occupancy() {
    let mut game = standard_game();
    play(&mut game, [3, 3, 4, 3, 0, 6, 3]);

    for col in 0..game.width() {
        let occupied = (0..game.height())
            .filter(|&row| game.board()[GridIndex::new(row, col)].is_some())
            .count();
        let expected = if occupied == game.height() {
            None
        } else {
            Some(game.height() - 1 - occupied)
        };
        assert_eq!(game.find_landing_row(col).unwrap(), expected);
    }
}

#[test]
fn test_finished_game_rejects_further_moves() {
    let mut game = standard_game();
    play(&mut game, [0, 6, 0, 6, 0, 6, 0]);
    let board = game.board().clone();

    // every later submission fails the same way and mutates nothing
    for col in [0, 1, 6] {
        assert_eq!(game.update(col).unwrap_err(), GameError::GameIsFinished);
        assert_eq!(*game.board(), board);
        assert_eq!(
            game.state(),
            GameState::Finished(FinishedState::Win(PlayerSlot::First))
        );
    }
}
