//! Touch-driven tic-tac-toe for small SPI displays.
//!
//! Game rules live in [`tictouch_game`]; this crate connects them to the
//! hardware collaborators.
//!
//! # Architecture
//!
//! - **Display**: drawing primitives, implemented for any `embedded-graphics` target
//! - **Render**: draws grid, marks, and status line from game events
//! - **Input**: touch sources and the adapter that feeds presses to the game
//! - **Backlight**: panel backlight behind an `embedded-hal` output pin
//! - **Config**: TOML configuration with command-line overrides
//!
//! # Example
//!
//! ```
//! use tictouch::{BoardRenderer, FrameBuffer, GraphicsDisplay, Palette, TicTacToe, TouchPoint};
//!
//! let display = GraphicsDisplay::new(FrameBuffer::new(240, 320).unwrap());
//! let mut game = TicTacToe::new(BoardRenderer::new(display, Palette::default()), false);
//! game.start().unwrap();
//! game.handle_touch(TouchPoint::new(120, 160)).unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod backlight;
mod config;
pub mod display;
mod framebuffer;
mod input;
mod palette;
mod render;

// Crate-level exports - Session
pub use app::TicTacToe;

// Crate-level exports - Hardware collaborators
pub use backlight::{Backlight, SimulatedPin};
pub use display::{Display, GraphicsDisplay};
pub use framebuffer::{FrameBuffer, FrameBufferTooLarge};
pub use input::{
    LineTouchSource, TouchCallback, TouchInput, TouchSource, TouchSourceError, parse_touch,
};

// Crate-level exports - Rendering
pub use palette::{Color565, Palette};
pub use render::{BoardRenderer, TITLE, outcome_message};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DisplayConfig, MAX_EDGE, TouchConfig};

// Crate-level exports - Game types
pub use tictouch_game::{
    Board, BoardGeometry, Cell, CellOccupied, GameState, GameStatus, Move, Player, Position,
    TouchOutcome, TouchPoint, TurnController, cell_of,
};
