//! Glow Grid (workspace facade crate).
//!
//! Exposes `glow_grid::{types,core,engine}` while the implementation lives in
//! dedicated crates under `crates/`.

pub use glow_grid_core as core;
pub use glow_grid_engine as engine;
pub use glow_grid_types as types;
