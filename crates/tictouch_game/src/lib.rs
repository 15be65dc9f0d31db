//! Tic-tac-toe game logic for touch-driven displays.
//!
//! This crate holds everything with real invariants and nothing that touches
//! hardware:
//!
//! - **Geometry**: maps raw touch coordinates to board cells
//! - **Board**: cell storage, move legality, win/draw detection
//! - **Turn controller**: the `InProgress -> Won | Draw -> InProgress` state machine
//!
//! # Example
//!
//! ```
//! use tictouch_game::{
//!     BoardGeometry, GameStatus, Player, TouchOutcome, TouchPoint, TurnController,
//! };
//!
//! let geometry = BoardGeometry::new(240, 320);
//! let mut controller = TurnController::new();
//!
//! let outcome = controller.on_touch(TouchPoint::new(5, 5), &geometry);
//! assert!(matches!(outcome, TouchOutcome::Placed { player: Player::X, .. }));
//! assert_eq!(controller.state().status(), GameStatus::InProgress);
//! assert_eq!(controller.state().active_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
mod geometry;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{CellOccupied, Move};
pub use board::Board;
pub use controller::{TouchOutcome, TurnController};
pub use geometry::{BoardGeometry, TouchPoint, cell_of};
pub use position::Position;
pub use state::{GameState, GameStatus};
pub use types::{Cell, Player};
