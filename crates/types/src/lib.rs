//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain value data with no behavior beyond parsing and printing,
//! making them usable in any context (rules, reactive engine, drivers).
//!
//! # Board Dimensions
//!
//! The default board is a 10x10 square grid:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 10 rows (indexed 0-9, top to bottom)
//! - **Slots**: 3 pending pieces offered at a time
//!
//! Dimensions are configuration, not compile-time constants. Any width or
//! height in `1..=MAX_BOARD_DIM` is accepted so that fixed-capacity buffers
//! (full-line lists) never allocate.
//!
//! # Geometry Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PREVIEW_OFFSET_PX` | 70.0 | Vertical pointer offset for the drag preview above the finger/cursor |
//! | `CORNER_SNAP_BIAS` | 0.25 | Fraction of a cell added before flooring corner-anchored drops |
//!
//! # Examples
//!
//! ```
//! use glow_grid_types::{AnchorKind, PieceKind, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("bar5_h"), Some(PieceKind::Bar5H));
//! assert_eq!(PieceKind::Bar5H.as_str(), "bar5_h");
//! assert_eq!(AnchorKind::from_str("line"), Some(AnchorKind::Line));
//! assert_eq!(AnchorKind::from_str("edge"), None);
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: u8 = 10;

/// Default board height in cells (10 rows)
pub const DEFAULT_BOARD_HEIGHT: u8 = 10;

/// Default number of pending-piece slots
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// Largest supported board side. Bounds the fixed-capacity line buffers.
pub const MAX_BOARD_DIM: usize = 32;

/// Largest supported slot bank.
pub const MAX_SLOTS: usize = 8;

/// Largest side of any catalog shape (bars are 5 long).
pub const MAX_SHAPE_DIM: usize = 5;

/// Vertical pixel offset subtracted from the pointer before snapping.
///
/// The drag preview is drawn above the pointer so the finger does not hide it;
/// this lines the drop up with what the player sees. Presentation detail only.
pub const PREVIEW_OFFSET_PX: f64 = 70.0;

/// Quarter-cell bias used by corner-anchored snapping.
pub const CORNER_SNAP_BIAS: f64 = 0.25;

/// Base points per line; a clear of `n` lines scores `LINE_SCORE_BASE * n(n+1)/2`.
pub const LINE_SCORE_BASE: u64 = 10;

/// The nineteen catalog pieces
///
/// Rotations are suffixed by degrees:
/// - **Square**: 2x2 block
/// - **L / L90 / L180 / L270**: 3x3 corner, four rotations
/// - **SmallL...**: 2x2 corner, four rotations
/// - **Bar5 / Bar4 / Bar3 / Bar2**: straight bars, horizontal and vertical
/// - **Single**: one cell
/// - **Cube3**: solid 3x3 block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "square")]
    Square,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "L_90")]
    L90,
    #[serde(rename = "L_180")]
    L180,
    #[serde(rename = "L_270")]
    L270,
    #[serde(rename = "smallL")]
    SmallL,
    #[serde(rename = "smallL_90")]
    SmallL90,
    #[serde(rename = "smallL_180")]
    SmallL180,
    #[serde(rename = "smallL_270")]
    SmallL270,
    #[serde(rename = "bar5_h")]
    Bar5H,
    #[serde(rename = "bar5_v")]
    Bar5V,
    #[serde(rename = "bar4_h")]
    Bar4H,
    #[serde(rename = "bar4_v")]
    Bar4V,
    #[serde(rename = "bar3_h")]
    Bar3H,
    #[serde(rename = "bar3_v")]
    Bar3V,
    #[serde(rename = "bar2_h")]
    Bar2H,
    #[serde(rename = "bar2_v")]
    Bar2V,
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "cube3")]
    Cube3,
}

impl PieceKind {
    /// Every catalog entry, in catalog order.
    pub const ALL: [PieceKind; 19] = [
        PieceKind::Square,
        PieceKind::L,
        PieceKind::L90,
        PieceKind::L180,
        PieceKind::L270,
        PieceKind::SmallL,
        PieceKind::SmallL90,
        PieceKind::SmallL180,
        PieceKind::SmallL270,
        PieceKind::Bar5H,
        PieceKind::Bar5V,
        PieceKind::Bar4H,
        PieceKind::Bar4V,
        PieceKind::Bar3H,
        PieceKind::Bar3V,
        PieceKind::Bar2H,
        PieceKind::Bar2V,
        PieceKind::Single,
        PieceKind::Cube3,
    ];

    /// Parse a piece identifier (case-sensitive, catalog spelling)
    ///
    /// # Examples
    ///
    /// ```
    /// use glow_grid_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("L_90"), Some(PieceKind::L90));
    /// assert_eq!(PieceKind::from_str("single"), Some(PieceKind::Single));
    /// assert_eq!(PieceKind::from_str("T"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Catalog identifier, as stored in board cells and snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Square => "square",
            PieceKind::L => "L",
            PieceKind::L90 => "L_90",
            PieceKind::L180 => "L_180",
            PieceKind::L270 => "L_270",
            PieceKind::SmallL => "smallL",
            PieceKind::SmallL90 => "smallL_90",
            PieceKind::SmallL180 => "smallL_180",
            PieceKind::SmallL270 => "smallL_270",
            PieceKind::Bar5H => "bar5_h",
            PieceKind::Bar5V => "bar5_v",
            PieceKind::Bar4H => "bar4_h",
            PieceKind::Bar4V => "bar4_v",
            PieceKind::Bar3H => "bar3_h",
            PieceKind::Bar3V => "bar3_v",
            PieceKind::Bar2H => "bar2_h",
            PieceKind::Bar2V => "bar2_v",
            PieceKind::Single => "single",
            PieceKind::Cube3 => "cube3",
        }
    }
}

/// How a piece's occupancy matrix is positioned relative to the pointer
///
/// - **Corner**: top-left snaps to the nearest grid line, biased by a quarter cell
/// - **Center**: piece center snaps to the pointer
/// - **Line**: long axis follows the pointer, short axis snaps to the containing cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorKind {
    Corner,
    Center,
    Line,
}

impl AnchorKind {
    /// Parse anchor kind from string
    ///
    /// Only `corner`, `center` and `line` are anchors; anything else is `None`,
    /// so a piece can never carry an anchor the snapping rules do not know.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "corner" => Some(AnchorKind::Corner),
            "center" => Some(AnchorKind::Center),
            "line" => Some(AnchorKind::Line),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorKind::Corner => "corner",
            AnchorKind::Center => "center",
            AnchorKind::Line => "line",
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell occupied by the identified piece
pub type Cell = Option<PieceKind>;
