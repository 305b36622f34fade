//! Tunable match configuration, loaded from ~/.battle-snake/config.json when present.

use crate::arena::Arena;
use crate::constants::*;
use crate::error::GameError;
use crate::hunter::CommitmentPolicy;
use crate::utils::persistence::{load_json_or_default, save_path};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Every fixed constant a match recognizes. Missing fields in the JSON file
/// fall back to the compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub block_size: i32,
    pub arena_width: i32,
    pub arena_height: i32,
    pub ticks_per_second: u32,
    pub target_refresh_ticks: u32,
    pub commitment_ticks: u32,
    pub commitment_hysteresis: f64,
    pub hunter_trail_len: usize,
    pub standalone_obstacles: usize,
    pub composite_shapes: usize,
    pub brick_unit: i32,
    pub spawn_buffer: i32,
    pub max_spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ticks_per_second: TICKS_PER_SECOND,
            target_refresh_ticks: TARGET_REFRESH_TICKS,
            commitment_ticks: COMMITMENT_TICKS,
            commitment_hysteresis: COMMITMENT_HYSTERESIS,
            hunter_trail_len: HUNTER_TRAIL_LEN,
            standalone_obstacles: STANDALONE_OBSTACLES,
            composite_shapes: COMPOSITE_SHAPES,
            brick_unit: BRICK_UNIT,
            spawn_buffer: SPAWN_BUFFER,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Read the user's config file (defaults if missing or unreadable) and validate it.
    pub fn load() -> Result<Self, GameError> {
        let path = save_path(CONFIG_FILE)?;
        let config: GameConfig = load_json_or_default(&path);
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| -> Result<(), GameError> { Err(GameError::InvalidConfig(msg)) };

        if self.block_size <= 0 {
            return invalid(format!("block_size must be positive, got {}", self.block_size));
        }
        if self.arena_width <= 0 || self.arena_height <= 0 {
            return invalid(format!(
                "arena must be non-empty, got {}x{}",
                self.arena_width, self.arena_height
            ));
        }
        if self.arena_width % self.block_size != 0 || self.arena_height % self.block_size != 0 {
            return invalid(format!(
                "arena {}x{} is not a multiple of block_size {}",
                self.arena_width, self.arena_height, self.block_size
            ));
        }
        if self.brick_unit <= 0 || self.brick_unit % self.block_size != 0 {
            return invalid(format!(
                "brick_unit {} must be a positive multiple of block_size {}",
                self.brick_unit, self.block_size
            ));
        }
        // Longest generated wall is 8 bricks.
        if self.arena_width < 8 * self.brick_unit || self.arena_height < 8 * self.brick_unit {
            return invalid(format!(
                "arena {}x{} too small for brick_unit {}",
                self.arena_width, self.arena_height, self.brick_unit
            ));
        }
        if self.ticks_per_second == 0 {
            return invalid("ticks_per_second must be positive".to_string());
        }
        if self.commitment_ticks == 0 || self.target_refresh_ticks == 0 {
            return invalid("commitment and refresh intervals must be positive".to_string());
        }
        if self.max_spawn_attempts == 0 {
            return invalid("max_spawn_attempts must be positive".to_string());
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena {
            block: self.block_size,
            width: self.arena_width,
            height: self.arena_height,
        }
    }

    /// Wall-clock time between simulation steps.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.ticks_per_second.max(1)))
    }

    pub fn commitment_policy(&self) -> CommitmentPolicy {
        CommitmentPolicy {
            window_ticks: self.commitment_ticks,
            refresh_ticks: self.target_refresh_ticks,
            hysteresis: self.commitment_hysteresis,
        }
    }
}
