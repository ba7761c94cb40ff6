use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::{Cell, PieceKind};

/// Read-only copy of the board handed to observers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub rows: Vec<Vec<Cell>>,
}

impl BoardSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Cells holding `kind`, as (row, col)
    pub fn cells_of(&self, kind: PieceKind) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if *cell == Some(kind) {
                    out.push((r, c));
                }
            }
        }
        out
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            rows: board.to_rows(),
        }
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self::from(&Board::default())
    }
}

/// `#` for filled cells, `.` for empty ones, one line per row
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row {
                f.write_str(if cell.is_some() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Owned snapshot of the current grid
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from(self)
    }
}
