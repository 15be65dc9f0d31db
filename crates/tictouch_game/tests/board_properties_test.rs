//! Property tests for the board model and turn alternation.

use proptest::prelude::*;
use tictouch_game::{
    Board, Cell, CellOccupied, GameStatus, Player, Position, TouchOutcome, TurnController,
};

/// Any ordering of all nine positions.
fn shuffled_positions() -> impl Strategy<Value = Vec<Position>> {
    Just(Position::ALL.to_vec()).prop_shuffle()
}

fn any_player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// Line check written against rows/columns directly, independent of `rules::LINES`.
fn has_uniform_line(board: &Board) -> bool {
    let at = |row: usize, col: usize| board.get(Position::new(row, col).unwrap());
    let uniform =
        |cells: [Cell; 3]| !cells[0].is_empty() && cells[0] == cells[1] && cells[1] == cells[2];

    let straight = (0..3).any(|i| {
        uniform([at(i, 0), at(i, 1), at(i, 2)]) || uniform([at(0, i), at(1, i), at(2, i)])
    });
    let diagonal =
        uniform([at(0, 0), at(1, 1), at(2, 2)]) || uniform([at(0, 2), at(1, 1), at(2, 0)]);
    straight || diagonal
}

proptest! {
    #[test]
    fn winner_appears_exactly_with_a_uniform_line(
        positions in shuffled_positions(),
        players in prop::collection::vec(any_player(), 9),
    ) {
        let mut board = Board::new();
        for (pos, player) in positions.into_iter().zip(players) {
            prop_assert!(board.place(pos, player).is_ok());
            prop_assert_eq!(board.winner().is_some(), has_uniform_line(&board));
        }
    }

    #[test]
    fn placing_on_occupied_cell_changes_nothing(
        positions in shuffled_positions(),
        filled in 1usize..=9,
        retry in 0usize..9,
        player in any_player(),
    ) {
        let mut board = Board::new();
        for (i, pos) in positions.iter().take(filled).enumerate() {
            let mover = if i % 2 == 0 { Player::X } else { Player::O };
            board.place(*pos, mover).unwrap();
        }

        let target = positions[retry % filled];
        let before = board.clone();
        prop_assert_eq!(board.place(target, player), Err(CellOccupied::new(target)));
        prop_assert_eq!(board, before);
    }

    #[test]
    fn reset_restores_empty_board(
        positions in shuffled_positions(),
        count in 0usize..=9,
    ) {
        let mut board = Board::new();
        for pos in positions.into_iter().take(count) {
            board.place(pos, Player::X).unwrap();
        }
        board.reset();
        prop_assert_eq!(board, Board::new());
    }

    #[test]
    fn turns_alternate_until_game_over(
        touches in prop::collection::vec(0usize..9, 0..30),
    ) {
        let mut controller = TurnController::new();
        let mut placed = 0usize;

        for index in touches {
            if controller.state().status().is_over() {
                break;
            }
            let position = Position::from_index(index).unwrap();
            match controller.apply(position) {
                TouchOutcome::Placed { player, .. } => {
                    let expected = if placed % 2 == 0 { Player::X } else { Player::O };
                    prop_assert_eq!(player, expected);
                    placed += 1;
                }
                TouchOutcome::Ignored { position } => {
                    prop_assert!(!controller.state().board().is_empty_at(position));
                }
                TouchOutcome::Reset => prop_assert!(false, "reset while in progress"),
            }
        }

        prop_assert_eq!(controller.state().history().len(), placed);
    }

    #[test]
    fn status_matches_board(
        touches in prop::collection::vec(0usize..9, 0..30),
    ) {
        let positions: Vec<Position> = touches
            .into_iter()
            .filter_map(Position::from_index)
            .collect();
        let controller = TurnController::replay(&positions);
        let state = controller.state();

        match state.status() {
            GameStatus::Won(player) => prop_assert_eq!(state.board().winner(), Some(player)),
            GameStatus::Draw => {
                prop_assert!(state.board().is_full());
                prop_assert_eq!(state.board().winner(), None);
            }
            GameStatus::InProgress => {
                prop_assert_eq!(state.board().winner(), None);
                prop_assert!(!state.board().is_full());
            }
        }
    }
}
