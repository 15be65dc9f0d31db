//! Game state owned by the turn controller.

use super::{Board, Move, Player};
use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for the terminal states (`Won`, `Draw`).
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete game state.
///
/// Read-only from the outside. [`TurnController`](super::TurnController) is
/// the only writer, and a reset replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) active_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates the startup state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next placement uses.
    ///
    /// Once the game is over this stays on the player who made the final move.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
