use thiserror::Error;

/// Why a placement attempt was cancelled.
///
/// Every variant is recoverable: the board and slots are left exactly as they
/// were, and the pipeline is ready for the next drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Another drop is still being resolved; this one is discarded, not queued.
    #[error("another placement is still being processed")]
    Busy,
    #[error("slot {slot} holds no piece")]
    MissingPiece { slot: usize },
    #[error("pointer or board rectangle is not a finite coordinate")]
    MalformedPointer,
    #[error("board rectangle width must be positive")]
    DegenerateBoardRect,
    #[error("target ({row}, {col}) puts the piece out of bounds")]
    OutOfBounds { row: i32, col: i32 },
    #[error("target ({row}, {col}) overlaps an occupied cell")]
    Overlap { row: i32, col: i32 },
}

impl PlacementError {
    /// Stable machine-readable code
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::Busy => "busy",
            PlacementError::MissingPiece { .. }
            | PlacementError::MalformedPointer
            | PlacementError::DegenerateBoardRect => "invalid_input",
            PlacementError::OutOfBounds { .. } | PlacementError::Overlap { .. } => {
                "invalid_place"
            }
        }
    }
}

/// Rejected game configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board {axis} must be in 1..={max}, got {value}")]
    BoardDimension {
        axis: &'static str,
        value: u32,
        max: usize,
    },
    #[error("slot count must be in 1..={max}, got {value}")]
    SlotCount { value: usize, max: usize },
    #[error("preview offset must be finite, got {0}")]
    PreviewOffset(f64),
}
