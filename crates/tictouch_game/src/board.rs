//! The 3x3 board model.

use super::rules;
use super::{Cell, CellOccupied, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from `Empty` to `Occupied`; the only way back is
/// [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if a cell is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns the positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty_at(*pos))
            .collect()
    }

    /// Places `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`CellOccupied`] if the cell already holds a mark. The board
    /// is left untouched in that case.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), CellOccupied> {
        if !self.is_empty_at(pos) {
            return Err(CellOccupied::new(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(player);
        trace!(position = %pos, %player, "Cell set");
        Ok(())
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Overwrites a cell without the occupancy check.
    #[cfg(test)]
    pub(crate) fn overwrite(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the board as rows like `X|O|3`, empty cells showing their 1-based number.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.cells[idx] {
                    Cell::Empty => write!(f, "{}", idx + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
