//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: players alternate turns, starting with X.
///
/// While the game is in progress the active player is whoever did not make
/// the last move. After a terminal move it stays on the player who made it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        let expected_active = match history.last() {
            None => Player::X,
            Some(last) if state.status().is_over() => last.player,
            Some(last) => last.player.opponent(),
        };
        state.active_player() == expected_active
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
