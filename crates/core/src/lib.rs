//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the grid puzzle: the board, the piece
//! catalog, the slot bank, and the scoring formula.
//! It has **zero dependencies** on UI, event wiring, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical slot sequences
//! - **Testable**: Every rule is a plain method on plain data
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with footprint checks and row+column clearing
//! - [`pieces`]: the 19 catalog shapes and their anchor kinds
//! - [`rng`]: seeded LCG and uniform catalog draws
//! - [`slots`]: pending-piece slots with refill-when-empty
//! - [`scoring`]: points per commit
//! - [`snapshot`]: owned, serializable board copies for observers
//!
//! # Game Rules
//!
//! - Pieces never rotate or fall; a piece is dropped at a grid position and stays.
//! - A row or column is full when every cell in it is occupied.
//! - Full rows and full columns are cleared together after each placement;
//!   nothing shifts, cleared cells simply become empty.
//!
//! # Example
//!
//! ```
//! use glow_grid_core::{get_shape, Board};
//! use glow_grid_types::PieceKind;
//!
//! let mut board = Board::default();
//! let bar = get_shape(PieceKind::Bar5H);
//! assert!(board.occupy(&Board::footprint(&bar, 9, 0), PieceKind::Bar5H));
//! assert!(board.occupy(&Board::footprint(&bar, 9, 5), PieceKind::Bar5H));
//!
//! let cleared = board.clear_full_lines();
//! assert_eq!(cleared.lines(), 1);
//! assert_eq!(board.occupied_count(), 0);
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod slots;
pub mod snapshot;

pub use glow_grid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearResult, Footprint, LineIndices};
pub use pieces::{get_anchor, get_shape, Piece, Shape, CATALOG};
pub use rng::{PieceDrawer, SimpleRng};
pub use scoring::calculate_line_score;
pub use slots::SlotBank;
pub use snapshot::BoardSnapshot;
