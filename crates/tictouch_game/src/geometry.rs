//! Touch-coordinate to board-cell mapping.
//!
//! The board fills the whole panel and is split into thirds along each axis
//! using a truncated integer cell size. Panels whose dimensions are not a
//! multiple of 3 leave a few remainder pixels past the last grid line; those
//! are absorbed into the last row/column instead of mapping nowhere.

use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A raw press reported by the touch controller, in panel pixels.
///
/// Signed because controllers report boundary noise slightly outside the
/// panel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new,
)]
pub struct TouchPoint {
    /// Horizontal pixel coordinate (0 = left edge).
    pub x: i32,
    /// Vertical pixel coordinate (0 = top edge).
    pub y: i32,
}

impl std::fmt::Display for TouchPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pixel layout of the board on a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct BoardGeometry {
    width: u32,
    height: u32,
}

impl BoardGeometry {
    /// Panel width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Panel height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width of one cell (truncated third of the panel width).
    pub fn cell_width(&self) -> u32 {
        cell_size(self.width)
    }

    /// Height of one cell (truncated third of the panel height).
    pub fn cell_height(&self) -> u32 {
        cell_size(self.height)
    }

    /// Maps a touch to the cell under it.
    pub fn cell_of(&self, point: TouchPoint) -> Position {
        cell_of(point, self.width, self.height)
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, pos: Position) -> (u32, u32) {
        (
            pos.col() as u32 * self.cell_width(),
            pos.row() as u32 * self.cell_height(),
        )
    }

    /// Center pixel of a cell.
    pub fn cell_center(&self, pos: Position) -> (u32, u32) {
        let (x, y) = self.cell_origin(pos);
        (x + self.cell_width() / 2, y + self.cell_height() / 2)
    }

    /// X coordinates of the two vertical grid lines.
    pub fn vertical_lines(&self) -> [u32; 2] {
        [self.width / 3, self.width / 3 * 2]
    }

    /// Y coordinates of the two horizontal grid lines.
    pub fn horizontal_lines(&self) -> [u32; 2] {
        [self.height / 3, self.height / 3 * 2]
    }
}

/// Maps a touch point to the board cell containing it.
///
/// `row = y / (board_height / 3)` and `col = x / (board_width / 3)` with floor
/// division, so presses exactly on a grid line go to the lower-indexed cell.
/// Coordinates outside `[0, board_width) x [0, board_height)` are clamped to
/// the nearest edge pixel, and remainder pixels past the last grid line fall
/// into row/column 2.
#[instrument(level = "trace")]
pub fn cell_of(point: TouchPoint, board_width: u32, board_height: u32) -> Position {
    let x = clamp_axis(point.x, board_width);
    let y = clamp_axis(point.y, board_height);
    if i64::from(x) != i64::from(point.x) || i64::from(y) != i64::from(point.y) {
        trace!(%point, x, y, "Clamped out-of-range touch");
    }

    let col = (x / cell_size(board_width)).min(2) as usize;
    let row = (y / cell_size(board_height)).min(2) as usize;
    Position::ALL[row * 3 + col]
}

/// Truncated third of an extent, never zero.
fn cell_size(extent: u32) -> u32 {
    (extent / 3).max(1)
}

/// Clamps a raw coordinate into `[0, extent)`.
fn clamp_axis(value: i32, extent: u32) -> u32 {
    let max = i64::from(extent.saturating_sub(1));
    i64::from(value).clamp(0, max) as u32
}
