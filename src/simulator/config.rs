//! Batch settings for headless matches.

use crate::config::GameConfig;

/// How many matches to play and under which rules.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Matches in the batch
    pub num_runs: u32,

    /// Batch seed; each match derives its own RNG from it. `None` draws from entropy
    pub seed: Option<u64>,

    /// Tick cap per match before it counts as timed out
    pub max_ticks_per_run: u64,

    /// Arena and hunter tuning used for every match
    pub game: GameConfig,

    /// 0 prints nothing, 1 the summary, 2 one line per match
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            max_ticks_per_run: 5_000,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for smoke checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 20,
            seed: Some(seed),
            max_ticks_per_run: 1_000,
            ..Default::default()
        }
    }
}
