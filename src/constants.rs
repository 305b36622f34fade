// Arena geometry (pixels)
pub const BLOCK_SIZE: i32 = 10;
pub const ARENA_WIDTH: i32 = 800;
pub const ARENA_HEIGHT: i32 = 600;

// Timing
pub const TICKS_PER_SECOND: u32 = 15;

// Hunter targeting
pub const TARGET_REFRESH_TICKS: u32 = 15;
pub const COMMITMENT_TICKS: u32 = 60;
pub const COMMITMENT_HYSTERESIS: f64 = 50.0;
/// Recent hunter head positions kept for cycle detection.
pub const HUNTER_TRAIL_LEN: usize = 40;

// Obstacle generation
pub const STANDALONE_OBSTACLES: usize = 5;
pub const COMPOSITE_SHAPES: usize = 2;
pub const BRICK_UNIT: i32 = 20;
/// Half-size of the square kept clear around the arena center.
pub const SPAWN_BUFFER: i32 = 100;

// Placement
pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

// Save files (inside ~/.battle-snake/)
pub const GAME_DIR_NAME: &str = ".battle-snake";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "battle-snake.log";
