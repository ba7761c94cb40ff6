//! Geometry resolution - pointer position to target grid cell
//!
//! The UI reports where the pointer was released (viewport pixels) and where the
//! board is drawn. Cells are square: `cell = board_rect.width / columns`. The
//! pointer is made board-local by subtracting the rect origin, and its y is
//! shifted up by the preview offset so the drop lands where the dragged preview
//! was drawn.
//!
//! The piece's anchor kind decides how the local position maps to the top-left
//! cell of its occupancy matrix:
//!
//! | Anchor | Row | Col |
//! |--------|-----|-----|
//! | corner | `floor((y + cell/4) / cell)` | `floor((x + cell/4) / cell)` |
//! | center | `round(y/cell - h/2)` | `round(x/cell - w/2)` |
//! | line, w > h | `floor(y/cell)` | `round(x/cell - w/2)` |
//! | line, w <= h | `round(y/cell - h/2)` | `floor(x/cell)` |
//!
//! `round` sends halves up (`-0.5` becomes `0`). The row is then clamped so the
//! piece's bottom never passes the last row; a negative row or column, or a piece
//! hanging off the right edge, is out of bounds.

use serde::{Deserialize, Serialize};

use glow_grid_core::Piece;

use crate::error::PlacementError;
use crate::types::{AnchorKind, CORNER_SNAP_BIAS};

/// Pointer position in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the board is drawn, in viewport pixels. Cells are square, so only the width matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

impl BoardRect {
    pub fn new(left: f64, top: f64, width: f64) -> Self {
        Self { left, top, width }
    }

    /// Side of one cell for a board with `columns` columns
    pub fn cell_size(&self, columns: u8) -> f64 {
        self.width / columns.max(1) as f64
    }
}

/// Top-left grid cell for a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Halves round toward positive infinity.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Map a pointer drop to the top-left cell of `piece`'s occupancy matrix.
pub fn calculate_position(
    piece: &Piece,
    pointer: Point,
    rect: BoardRect,
    board_width: u8,
    board_height: u8,
    preview_offset_px: f64,
) -> Result<GridPos, PlacementError> {
    let finite = [pointer.x, pointer.y, rect.left, rect.top, rect.width, preview_offset_px]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(PlacementError::MalformedPointer);
    }
    if rect.width <= 0.0 {
        return Err(PlacementError::DegenerateBoardRect);
    }

    let cell = rect.cell_size(board_width);
    let x = pointer.x - rect.left;
    let y = pointer.y - rect.top - preview_offset_px;

    let height = piece.shape.height() as f64;
    let width = piece.shape.width() as f64;

    let (row, col) = match piece.anchor {
        AnchorKind::Corner => (
            ((y + cell * CORNER_SNAP_BIAS) / cell).floor(),
            ((x + cell * CORNER_SNAP_BIAS) / cell).floor(),
        ),
        AnchorKind::Center => (
            round_half_up(y / cell - height / 2.0),
            round_half_up(x / cell - width / 2.0),
        ),
        AnchorKind::Line => {
            if width > height {
                ((y / cell).floor(), round_half_up(x / cell - width / 2.0))
            } else {
                (round_half_up(y / cell - height / 2.0), (x / cell).floor())
            }
        }
    };

    // Float-to-int casts saturate, so far-off pointers pin to i32::MIN/MAX.
    let row = (row as i32).min(board_height as i32 - piece.shape.height() as i32);
    let col = col as i32;

    if row < 0 || col < 0 || col.saturating_add(piece.shape.width() as i32) > board_width as i32 {
        return Err(PlacementError::OutOfBounds { row, col });
    }

    Ok(GridPos::new(row, col))
}
