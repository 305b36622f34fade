//! The single integer that outlives a match.

use crate::constants::HIGH_SCORE_FILE;
use crate::utils::persistence::{load_json_or_default, save_json, save_path};
use std::io;
use std::path::PathBuf;

/// Where the best score is kept between runs.
pub trait HighScoreStore {
    /// Stored best, or 0 when nothing usable is stored.
    fn load(&self) -> u32;

    /// Store `max(previous, score)` and return it.
    fn record(&mut self, score: u32) -> io::Result<u32>;
}

/// JSON file holding a bare integer, normally ~/.battle-snake/highscore.json.
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the default save directory.
    pub fn open_default() -> io::Result<Self> {
        Ok(Self::new(save_path(HIGH_SCORE_FILE)?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u32 {
        load_json_or_default(&self.path)
    }

    fn record(&mut self, score: u32) -> io::Result<u32> {
        let best = self.load().max(score);
        save_json(&self.path, &best)?;
        tracing::info!(best, path = %self.path.display(), "high score saved");
        Ok(best)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryHighScoreStore {
    best: u32,
}

impl MemoryHighScoreStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u32 {
        self.best
    }

    fn record(&mut self, score: u32) -> io::Result<u32> {
        self.best = self.best.max(score);
        Ok(self.best)
    }
}
