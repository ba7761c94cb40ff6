//! Engine module - the reactive placement-and-clear chain
//!
//! The rules in `glow-grid-core` are plain methods on plain data. This crate
//! wires them into the event-driven flow a UI drives:
//!
//! 1. A drop reaches the [`PlacementPipeline`] (pointer or explicit cell)
//! 2. The pipeline resolves the target cell, validates it, writes the piece and pops its slot
//! 3. `Commit` is published; the [`LineClearer`] clears full rows and columns
//! 4. The clear result feeds the [`ScoreAccumulator`]
//! 5. `Applied` is published for renderers
//!
//! All of it is single-threaded and synchronous: every callback runs to
//! completion before `publish` returns, and the pipeline accepts one drop at a
//! time.
//!
//! # Module Structure
//!
//! - [`observer`]: ordered synchronous publisher with a current value
//! - [`geometry`]: pointer coordinates to grid cell, per anchor kind
//! - [`placement`]: the pipeline state machine and its events
//! - [`line_clear`]: full-line detection and clearing on commit
//! - [`score`]: running score
//! - [`session`]: owns the board and slots and wires the chain together
//! - [`config`]: `GameConfig`, with environment overrides
//! - [`error`]: `PlacementError` and `ConfigError`
//!
//! # Example
//!
//! ```
//! use glow_grid_engine::{GameConfig, Session};
//! use glow_grid_engine::types::PieceKind;
//!
//! let session = Session::new(GameConfig::default()).unwrap();
//! session.set_slots(&[Some(PieceKind::Bar5H), Some(PieceKind::Bar5H), Some(PieceKind::Single)]);
//!
//! session.place_at(0, 9, 0).unwrap();
//! session.place_at(1, 9, 5).unwrap();
//!
//! assert_eq!(session.lines(), 1);
//! assert_eq!(session.score(), 10);
//! assert_eq!(session.board().occupied_count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod line_clear;
pub mod observer;
pub mod placement;
pub mod score;
pub mod session;

pub use glow_grid_types as types;

pub use config::GameConfig;
pub use error::{ConfigError, PlacementError};
pub use geometry::{calculate_position, BoardRect, GridPos, Point};
pub use line_clear::{clear_lines, LineClearer};
pub use observer::{Publisher, SubscriptionId};
pub use placement::{
    apply_placement, validate_placement, DropRequest, DropTarget, PipelineState, Placement,
    PlacementEvent, PlacementPipeline,
};
pub use score::ScoreAccumulator;
pub use session::{Session, SessionSnapshot};
