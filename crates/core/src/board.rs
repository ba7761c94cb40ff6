//! Board module - manages the game grid
//!
//! The board is a fixed-size grid (10x10 by default) where each cell is empty or
//! holds the identifier of the piece that filled it. Cells live in a flat
//! row-major vector sized once at construction; dimensions never change.
//! Coordinates: (row, col) where row runs top to bottom and col left to right.
//!
//! Every mutation is all-or-nothing: `occupy` checks the whole footprint before
//! writing, and `clear_lines` clears full rows and columns in a single pass.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::pieces::Shape;
use crate::types::{
    Cell, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_BOARD_DIM, MAX_SHAPE_DIM,
};

/// Line indices, bounded by the largest supported board side
pub type LineIndices = ArrayVec<u8, MAX_BOARD_DIM>;

/// Absolute board cells covered by one piece
pub type Footprint = ArrayVec<(i32, i32), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Full rows and columns removed by one commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearResult {
    /// Cleared row indices, ascending
    pub rows: LineIndices,
    /// Cleared column indices, ascending
    pub cols: LineIndices,
}

impl ClearResult {
    /// Number of full lines (rows + columns). Intersections count toward both.
    pub fn lines(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Each side is clamped into `1..=MAX_BOARD_DIM`.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(1, MAX_BOARD_DIM as u8);
        let height = height.clamp(1, MAX_BOARD_DIM as u8);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_out_of_bounds(row, col) {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, row: i32, col: i32) -> bool {
        row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32
    }

    /// Whether a `shape` with its top-left at (row, col) lies entirely on the board
    pub fn footprint_in_bounds(&self, shape: &Shape, row: i32, col: i32) -> bool {
        row >= 0
            && col >= 0
            && row as i64 + shape.height() as i64 <= self.height as i64
            && col as i64 + shape.width() as i64 <= self.width as i64
    }

    /// Whether `shape` at (row, col) is in bounds and every occupied cell is free
    pub fn can_place(&self, shape: &Shape, row: i32, col: i32) -> bool {
        self.footprint_in_bounds(shape, row, col)
            && shape
                .cells()
                .all(|(dr, dc)| self.is_free(row + dr as i32, col + dc as i32))
    }

    /// Occupy every listed cell with `kind`.
    /// Returns false, leaving the board untouched, if any cell is out of bounds or taken.
    pub fn occupy(&mut self, cells: &[(i32, i32)], kind: PieceKind) -> bool {
        // First check if all positions are free
        if !cells.iter().all(|&(r, c)| self.is_free(r, c)) {
            return false;
        }

        for &(r, c) in cells {
            self.set(r, c, Some(kind));
        }
        true
    }

    /// Absolute cells covered by `shape` placed with its top-left at (row, col)
    pub fn footprint(shape: &Shape, row: i32, col: i32) -> Footprint {
        shape
            .cells()
            .map(|(dr, dc)| (row.saturating_add(dr as i32), col.saturating_add(dc as i32)))
            .collect()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = row * width;
        self.cells[start..start + width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= self.width as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(col)
            .step_by(self.width as usize)
            .all(|cell| cell.is_some())
    }

    /// Indices of all full rows, ascending
    pub fn full_rows(&self) -> LineIndices {
        (0..self.height)
            .filter(|&r| self.is_row_full(r as usize))
            .collect()
    }

    /// Indices of all full columns, ascending
    pub fn full_cols(&self) -> LineIndices {
        (0..self.width)
            .filter(|&c| self.is_col_full(c as usize))
            .collect()
    }

    /// Empty the given rows. Nothing shifts; out-of-range indices are ignored
    pub fn clear_rows(&mut self, rows: &[u8]) {
        self.clear_lines(rows, &[]);
    }

    /// Empty the given columns. Nothing shifts; out-of-range indices are ignored
    pub fn clear_cols(&mut self, cols: &[u8]) {
        self.clear_lines(&[], cols);
    }

    /// Empty the given rows and columns in one pass.
    ///
    /// Each cell is visited once, so a cell on both a cleared row and a cleared
    /// column is reset exactly once.
    pub fn clear_lines(&mut self, rows: &[u8], cols: &[u8]) {
        if rows.is_empty() && cols.is_empty() {
            return;
        }
        let width = self.width as usize;
        for (idx, cell) in self.cells.iter_mut().enumerate() {
            let r = (idx / width) as u8;
            let c = (idx % width) as u8;
            if rows.contains(&r) || cols.contains(&c) {
                *cell = None;
            }
        }
    }

    /// Detect every full row and column from the current state, then clear them together
    pub fn clear_full_lines(&mut self) -> ClearResult {
        let result = ClearResult {
            rows: self.full_rows(),
            cols: self.full_cols(),
        };
        self.clear_lines(&result.rows, &result.cols);
        result
    }

    /// First (row, col) in row-major order where `shape` can be placed
    pub fn first_fit(&self, shape: &Shape) -> Option<(i32, i32)> {
        let max_row = self.height as i32 - shape.height() as i32;
        let max_col = self.width as i32 - shape.width() as i32;
        (0..=max_row)
            .flat_map(|r| (0..=max_col).map(move |c| (r, c)))
            .find(|&(r, c)| self.can_place(shape, r, c))
    }

    /// Whether `shape` fits anywhere on the board
    pub fn fits_anywhere(&self, shape: &Shape) -> bool {
        self.first_fit(shape).is_some()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from rows of cells. Returns None unless the rows form a
    /// non-empty rectangle within `MAX_BOARD_DIM` on each side.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len)?;
        if height == 0 || width == 0 || height > MAX_BOARD_DIM || width > MAX_BOARD_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            width: width as u8,
            height: height as u8,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Convert to rows of cells
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}
