//! Pieces module - the static piece catalog
//!
//! Every piece is a rectangular occupancy matrix plus an anchor kind. Shapes are
//! stored as fixed 5x5 boolean grids so they are `Copy` and never allocate.
//! Coordinates inside a shape are (row, col) with (0, 0) at the top-left.

use crate::types::{AnchorKind, PieceKind, MAX_SHAPE_DIM};

/// Rectangular occupancy matrix of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    height: u8,
    width: u8,
    filled: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from a grid of 0/1 values. Evaluated at compile time for the catalog.
    const fn from_grid<const H: usize, const W: usize>(grid: [[u8; W]; H]) -> Self {
        assert!(H > 0 && H <= MAX_SHAPE_DIM && W > 0 && W <= MAX_SHAPE_DIM);
        let mut filled = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < H {
            let mut c = 0;
            while c < W {
                filled[r][c] = grid[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            height: H as u8,
            width: W as u8,
            filled,
        }
    }

    /// Number of rows in the matrix
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of columns in the matrix
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Whether matrix cell (row, col) is part of the piece.
    /// Out-of-matrix coordinates are never filled.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.height as usize && col < self.width as usize && self.filled[row][col]
    }

    /// Occupied (row, col) offsets in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> {
        let shape = *self;
        (0..shape.height).flat_map(move |r| {
            (0..shape.width).filter_map(move |c| {
                if shape.filled[r as usize][c as usize] {
                    Some((r, c))
                } else {
                    None
                }
            })
        })
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Matrix as nested rows (for display and tests)
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height as usize)
            .map(|r| self.filled[r][..self.width as usize].to_vec())
            .collect()
    }
}

/// A catalog piece: identifier, occupancy matrix and anchor kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub anchor: AnchorKind,
}

impl Piece {
    /// Look up the catalog entry for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            anchor: get_anchor(kind),
        }
    }
}

/// The fixed catalog, in draw order
pub const CATALOG: [PieceKind; 19] = PieceKind::ALL;

const SQUARE: Shape = Shape::from_grid([[1, 1], [1, 1]]);

const L_0: Shape = Shape::from_grid([[1, 0, 0], [1, 0, 0], [1, 1, 1]]);
const L_90: Shape = Shape::from_grid([[1, 1, 1], [1, 0, 0], [1, 0, 0]]);
const L_180: Shape = Shape::from_grid([[1, 1, 1], [0, 0, 1], [0, 0, 1]]);
const L_270: Shape = Shape::from_grid([[0, 0, 1], [0, 0, 1], [1, 1, 1]]);

const SMALL_L_0: Shape = Shape::from_grid([[1, 0], [1, 1]]);
const SMALL_L_90: Shape = Shape::from_grid([[1, 1], [1, 0]]);
const SMALL_L_180: Shape = Shape::from_grid([[1, 1], [0, 1]]);
const SMALL_L_270: Shape = Shape::from_grid([[0, 1], [1, 1]]);

const BAR5_H: Shape = Shape::from_grid([[1, 1, 1, 1, 1]]);
const BAR5_V: Shape = Shape::from_grid([[1], [1], [1], [1], [1]]);
const BAR4_H: Shape = Shape::from_grid([[1, 1, 1, 1]]);
const BAR4_V: Shape = Shape::from_grid([[1], [1], [1], [1]]);
const BAR3_H: Shape = Shape::from_grid([[1, 1, 1]]);
const BAR3_V: Shape = Shape::from_grid([[1], [1], [1]]);
const BAR2_H: Shape = Shape::from_grid([[1, 1]]);
const BAR2_V: Shape = Shape::from_grid([[1], [1]]);

const SINGLE: Shape = Shape::from_grid([[1]]);
const CUBE3: Shape = Shape::from_grid([[1, 1, 1], [1, 1, 1], [1, 1, 1]]);

/// Get the occupancy matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::Square => SQUARE,
        PieceKind::L => L_0,
        PieceKind::L90 => L_90,
        PieceKind::L180 => L_180,
        PieceKind::L270 => L_270,
        PieceKind::SmallL => SMALL_L_0,
        PieceKind::SmallL90 => SMALL_L_90,
        PieceKind::SmallL180 => SMALL_L_180,
        PieceKind::SmallL270 => SMALL_L_270,
        PieceKind::Bar5H => BAR5_H,
        PieceKind::Bar5V => BAR5_V,
        PieceKind::Bar4H => BAR4_H,
        PieceKind::Bar4V => BAR4_V,
        PieceKind::Bar3H => BAR3_H,
        PieceKind::Bar3V => BAR3_V,
        PieceKind::Bar2H => BAR2_H,
        PieceKind::Bar2V => BAR2_V,
        PieceKind::Single => SINGLE,
        PieceKind::Cube3 => CUBE3,
    }
}

/// Get the anchor kind for a piece kind
///
/// Only the 4- and 2-long bars use line anchoring; everything else snaps by center.
/// No catalog entry currently uses corner anchoring.
pub fn get_anchor(kind: PieceKind) -> AnchorKind {
    match kind {
        PieceKind::Bar4H | PieceKind::Bar4V | PieceKind::Bar2H | PieceKind::Bar2V => {
            AnchorKind::Line
        }
        _ => AnchorKind::Center,
    }
}
