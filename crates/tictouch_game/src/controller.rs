//! Turn controller: the game's state machine.
//!
//! ```text
//!            place ok, no line, board not full
//!           ┌───────────────┐
//!           ▼               │
//!      InProgress ──────────┘
//!        │    │
//!  line  │    │ board full
//!        ▼    ▼
//!   Won(p)    Draw ──── any touch ───► InProgress (fresh state)
//!      └──────── any touch ──────────► InProgress (fresh state)
//! ```

use super::invariants::{GameInvariants, InvariantSet};
use super::{BoardGeometry, GameState, GameStatus, Move, Player, Position, TouchPoint};
use tracing::{debug, info, instrument, warn};

/// What a touch did to the game, and therefore what must be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The game was over; the touch was consumed by a full reset.
    Reset,
    /// The touched cell was already occupied; nothing changed.
    Ignored {
        /// The occupied cell.
        position: Position,
    },
    /// A mark was placed.
    Placed {
        /// Where the mark went.
        position: Position,
        /// Whose mark it is.
        player: Player,
        /// Status after the placement. `Won`/`Draw` means this move ended the game.
        status: GameStatus,
    },
}

impl TouchOutcome {
    /// Returns true if this touch moved the game into a terminal state.
    pub fn ends_game(&self) -> bool {
        matches!(self, TouchOutcome::Placed { status, .. } if status.is_over())
    }
}

/// Owns the [`GameState`] and applies touches to it.
///
/// The only mutation paths are [`on_touch`](Self::on_touch) (and its
/// post-mapping half [`apply`](Self::apply)) and [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct TurnController {
    state: GameState,
}

impl TurnController {
    /// Creates a controller with a fresh game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Handles one press from the touch panel.
    ///
    /// In a terminal state the press resets the game and is not applied as a
    /// move. Otherwise it is mapped to a cell and applied.
    #[instrument(skip(self, geometry), fields(status = ?self.state.status))]
    pub fn on_touch(&mut self, point: TouchPoint, geometry: &BoardGeometry) -> TouchOutcome {
        if self.state.status.is_over() {
            self.reset();
            return TouchOutcome::Reset;
        }
        self.apply(geometry.cell_of(point))
    }

    /// Applies a press that has already been mapped to `position`.
    ///
    /// Same transition as [`on_touch`](Self::on_touch) minus the coordinate
    /// mapping.
    #[instrument(skip(self), fields(player = %self.state.active_player))]
    pub fn apply(&mut self, position: Position) -> TouchOutcome {
        if self.state.status.is_over() {
            self.reset();
            return TouchOutcome::Reset;
        }

        let player = self.state.active_player;
        if let Err(e) = self.state.board.place(position, player) {
            debug!(error = %e, "Ignoring touch on occupied cell");
            return TouchOutcome::Ignored { position };
        }
        self.state.history.push(Move::new(player, position));

        let status = if let Some(winner) = self.state.board.winner() {
            debug_assert_eq!(winner, player, "only the mover can complete a line");
            GameStatus::Won(player)
        } else if self.state.board.is_full() {
            GameStatus::Draw
        } else {
            self.state.active_player = player.opponent();
            GameStatus::InProgress
        };
        self.state.status = status;

        debug_assert!(
            GameInvariants::check_all(&self.state).is_ok(),
            "game invariants violated: {:?}",
            GameInvariants::check_all(&self.state)
        );

        if status.is_over() {
            info!(%status, moves = self.state.history.len(), "Game over");
        } else {
            debug!(next = %self.state.active_player, "Turn passed");
        }

        TouchOutcome::Placed {
            position,
            player,
            status,
        }
    }

    /// Replaces the game with a fresh one: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
        info!("Game reset");
    }

    /// Builds a controller by applying `positions` in order from a fresh game.
    ///
    /// Stops at the first terminal state; later positions are dropped.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        let mut controller = Self::new();
        for (i, &position) in positions.iter().enumerate() {
            if controller.state.status.is_over() {
                warn!(dropped = positions.len() - i, "Replay continued past game over");
                break;
            }
            controller.apply(position);
        }
        controller
    }
}
