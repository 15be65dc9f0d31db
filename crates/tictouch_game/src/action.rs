//! Move records and move errors.
//!
//! A `Move` is what got applied to the board; the turn controller keeps them
//! in order so the board can always be rebuilt from history.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A placement targeted a cell that already holds a mark.
///
/// Non-fatal: the touch layer treats it as "ignore this press".
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cell {} is already occupied", position)]
pub struct CellOccupied {
    /// The occupied position.
    pub position: Position,
}

impl CellOccupied {
    /// Creates a new occupied-cell error.
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}
