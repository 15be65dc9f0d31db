//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Every recorded move must have landed on an empty cell, and no cell may
/// hold a mark that history does not account for.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        for mov in state.history() {
            if reconstructed.place(mov.position, mov.player).is_err() {
                return false;
            }
        }
        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
