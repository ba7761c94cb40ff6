//! Game configuration.
//!
//! Defaults are a 10x10 board with 3 slots. Every value can
//! be overridden through the environment:
//!
//! - `GLOW_GRID_BOARD_WIDTH`: Board columns (default: 10)
//! - `GLOW_GRID_BOARD_HEIGHT`: Board rows (default: 10)
//! - `GLOW_GRID_SLOTS`: Pending-piece slots (default: 3)
//! - `GLOW_GRID_PREVIEW_OFFSET`: Vertical pointer offset in pixels (default: 70)
//! - `GLOW_GRID_SEED`: Piece RNG seed (default: 1)
//!
//! Missing or unparsable variables fall back to the default.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_SLOT_COUNT, MAX_BOARD_DIM, MAX_SLOTS,
    PREVIEW_OFFSET_PX,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_width: u32,
    pub board_height: u32,
    pub slot_count: usize,
    /// Pixels subtracted from the pointer's y before snapping (drag preview sits above the pointer).
    pub preview_offset_px: f64,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: DEFAULT_BOARD_WIDTH as u32,
            board_height: DEFAULT_BOARD_HEIGHT as u32,
            slot_count: DEFAULT_SLOT_COUNT,
            preview_offset_px: PREVIEW_OFFSET_PX,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            board_width: env_parse("GLOW_GRID_BOARD_WIDTH").unwrap_or(defaults.board_width),
            board_height: env_parse("GLOW_GRID_BOARD_HEIGHT").unwrap_or(defaults.board_height),
            slot_count: env_parse("GLOW_GRID_SLOTS").unwrap_or(defaults.slot_count),
            preview_offset_px: env_parse("GLOW_GRID_PREVIEW_OFFSET")
                .unwrap_or(defaults.preview_offset_px),
            seed: env_parse("GLOW_GRID_SEED").unwrap_or(defaults.seed),
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_preview_offset(mut self, offset_px: f64) -> Self {
        self.preview_offset_px = offset_px;
        self
    }

    pub fn with_board(mut self, width: u32, height: u32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [("width", self.board_width), ("height", self.board_height)] {
            if value == 0 || value as usize > MAX_BOARD_DIM {
                return Err(ConfigError::BoardDimension {
                    axis,
                    value,
                    max: MAX_BOARD_DIM,
                });
            }
        }
        if self.slot_count == 0 || self.slot_count > MAX_SLOTS {
            return Err(ConfigError::SlotCount {
                value: self.slot_count,
                max: MAX_SLOTS,
            });
        }
        if !self.preview_offset_px.is_finite() {
            return Err(ConfigError::PreviewOffset(self.preview_offset_px));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_ten_by_ten_with_three_slots() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 10);
        assert_eq!(config.board_height, 10);
        assert_eq!(config.slot_count, 3);
        assert_eq!(config.preview_offset_px, 70.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_parse_trims_and_rejects_garbage() {
        // Keys are unique to this test so parallel tests never see them.
        std::env::set_var("GLOW_GRID_TEST_SEED_TRIMMED", " 42 ");
        std::env::set_var("GLOW_GRID_TEST_SLOTS_GARBAGE", "many");

        assert_eq!(env_parse::<u32>("GLOW_GRID_TEST_SEED_TRIMMED"), Some(42));
        assert_eq!(env_parse::<usize>("GLOW_GRID_TEST_SLOTS_GARBAGE"), None);
        assert_eq!(env_parse::<u8>("GLOW_GRID_TEST_NEVER_SET"), None);

        let slots = env_parse("GLOW_GRID_TEST_SLOTS_GARBAGE")
            .unwrap_or(GameConfig::default().slot_count);
        assert_eq!(slots, 3);

        std::env::remove_var("GLOW_GRID_TEST_SEED_TRIMMED");
        std::env::remove_var("GLOW_GRID_TEST_SLOTS_GARBAGE");
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let err = GameConfig::default().with_board(0, 10).validate().unwrap_err();
        assert!(matches!(err, ConfigError::BoardDimension { axis: "width", .. }));

        let err = GameConfig::default().with_board(10, 33).validate().unwrap_err();
        assert!(matches!(err, ConfigError::BoardDimension { axis: "height", .. }));

        let config = GameConfig {
            slot_count: 9,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::SlotCount { .. })));

        let config = GameConfig::default().with_preview_offset(f64::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::PreviewOffset(_))));
    }

    #[test]
    fn config_serializes_to_json() {
        let json = serde_json::to_string(&GameConfig::default()).unwrap();
        assert!(json.contains("\"board_width\":10"));
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameConfig::default());
    }
}
