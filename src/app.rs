//! The game session: turn controller plus renderer.

use crate::{BoardRenderer, Display};
use tictouch_game::{GameState, TouchOutcome, TouchPoint, TurnController};
use tracing::{debug, info, instrument};

/// One running game on one display.
///
/// Applies touches to the [`TurnController`] and issues the matching draw
/// calls: one mark per placement, one message per game end, a full redraw per
/// reset, nothing for an ignored press.
#[derive(Debug)]
pub struct TicTacToe<D> {
    controller: TurnController,
    renderer: BoardRenderer<D>,
    show_readout: bool,
}

impl<D: Display> TicTacToe<D> {
    /// Creates a session with a fresh game.
    pub fn new(renderer: BoardRenderer<D>, show_readout: bool) -> Self {
        Self {
            controller: TurnController::new(),
            renderer,
            show_readout,
        }
    }

    /// Draws the initial screen.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), D::Error> {
        info!("Drawing initial board");
        self.renderer.draw_board()
    }

    /// Applies one press and redraws what changed.
    #[instrument(skip(self))]
    pub fn handle_touch(&mut self, point: TouchPoint) -> Result<TouchOutcome, D::Error> {
        let geometry = *self.renderer.geometry();
        let outcome = self.controller.on_touch(point, &geometry);

        match outcome {
            TouchOutcome::Reset => self.renderer.draw_board()?,
            TouchOutcome::Ignored { .. } => {}
            TouchOutcome::Placed {
                position,
                player,
                status,
            } => {
                self.renderer.draw_mark(position, player)?;
                if status.is_over() {
                    self.renderer.draw_outcome(status)?;
                }
            }
        }

        // Only a placement that keeps the game going touches the status line:
        // ignored presses draw nothing, and the banner or outcome message
        // stays up after a reset or a game-ending move.
        let in_play = matches!(outcome, TouchOutcome::Placed { status, .. } if !status.is_over());
        if self.show_readout && in_play {
            self.renderer.draw_touch_readout(point)?;
        }

        debug!(?outcome, board = %self.controller.state().board(), "Touch handled");
        Ok(outcome)
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.controller.state()
    }

    /// The renderer (and through it, the display).
    pub fn renderer(&self) -> &BoardRenderer<D> {
        &self.renderer
    }

    /// Blanks the display before the hardware is released.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) -> Result<(), D::Error> {
        info!(status = %self.state().status(), "Clearing display");
        self.renderer.display_mut().clear()
    }
}
