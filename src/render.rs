//! Board rendering: turns game state into display primitives.

use crate::display::{GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::{Color565, Display, Palette};
use tictouch_game::{BoardGeometry, GameStatus, Player, Position, TouchPoint};
use tracing::{debug, instrument};

/// Title shown on the status line of a fresh board.
pub const TITLE: &str = "TICTACTOE";

/// Draws the board, marks, and status line on a [`Display`].
///
/// Holds no game state; every method draws exactly what it is told.
#[derive(Debug)]
pub struct BoardRenderer<D> {
    display: D,
    palette: Palette,
    geometry: BoardGeometry,
}

impl<D: Display> BoardRenderer<D> {
    /// Creates a renderer laid out for the display's full size.
    pub fn new(display: D, palette: Palette) -> Self {
        let geometry = BoardGeometry::new(display.width(), display.height());
        Self {
            display,
            palette,
            geometry,
        }
    }

    /// Board layout on this display.
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Colours in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The underlying display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the underlying display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Releases the display.
    pub fn into_display(self) -> D {
        self.display
    }

    /// Draws a fresh board: blank panel, grid, and title banner.
    #[instrument(skip(self))]
    pub fn draw_board(&mut self) -> Result<(), D::Error> {
        let (width, height) = (self.geometry.width(), self.geometry.height());
        let grid = self.palette.grid;

        self.display.clear()?;
        for y in self.geometry.horizontal_lines() {
            self.display.draw_hline(0, y as i32, width, grid)?;
        }
        for x in self.geometry.vertical_lines() {
            self.display.draw_vline(x as i32, 0, height, grid)?;
        }
        self.draw_status(TITLE, self.palette.text, Some(self.palette.banner))?;
        debug!(width, height, "Board drawn");
        Ok(())
    }

    /// Draws `player`'s mark in the cell at `pos`.
    ///
    /// X is two diagonal strokes, O a circle, both inset from the cell edges.
    #[instrument(skip(self))]
    pub fn draw_mark(&mut self, pos: Position, player: Player) -> Result<(), D::Error> {
        let (cell_w, cell_h) = (
            self.geometry.cell_width() as i32,
            self.geometry.cell_height() as i32,
        );
        let margin = cell_w.min(cell_h) / 5;

        match player {
            Player::X => {
                let (x0, y0) = self.geometry.cell_origin(pos);
                let (left, top) = (x0 as i32 + margin, y0 as i32 + margin);
                let (right, bottom) = (
                    x0 as i32 + cell_w - margin,
                    y0 as i32 + cell_h - margin,
                );
                let color = self.palette.x_mark;
                self.display.draw_line(left, top, right, bottom, color)?;
                self.display.draw_line(right, top, left, bottom, color)
            }
            Player::O => {
                let (cx, cy) = self.geometry.cell_center(pos);
                let radius = (cell_w.min(cell_h) / 2 - margin).max(1) as u32;
                self.display
                    .draw_circle(cx as i32, cy as i32, radius, self.palette.o_mark)
            }
        }
    }

    /// Draws the end-of-game message on the status line.
    ///
    /// Does nothing while the game is still in progress.
    #[instrument(skip(self))]
    pub fn draw_outcome(&mut self, status: GameStatus) -> Result<(), D::Error> {
        match outcome_message(status) {
            Some(message) => {
                self.draw_status(&message, self.palette.text, Some(self.palette.banner))
            }
            None => Ok(()),
        }
    }

    /// Shows the raw coordinates of a press on the status line.
    pub fn draw_touch_readout(&mut self, point: TouchPoint) -> Result<(), D::Error> {
        let text = format!("{:03}, {:03}", point.x, point.y);
        self.draw_status(&text, self.palette.readout, Some(self.palette.banner))
    }

    /// Draws one line of text centred just above the bottom edge.
    fn draw_status(
        &mut self,
        text: &str,
        foreground: Color565,
        background: Option<Color565>,
    ) -> Result<(), D::Error> {
        let text_width = text.chars().count() as u32 * GLYPH_WIDTH;
        let x = (self.geometry.width() / 2).saturating_sub(text_width / 2);
        let y = self.geometry.height().saturating_sub(GLYPH_HEIGHT + 1);
        self.display
            .draw_text(x as i32, y as i32, text, foreground, background)
    }
}

/// Status line text for a finished game.
pub fn outcome_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(format!("{} WINS", player)),
        GameStatus::Draw => Some("DRAW".to_string()),
    }
}
