//! Error type shared by the engine, persistence and the binaries.

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Random placement gave up; the arena is too small or too obstructed.
    #[error("no free cell found after {attempts} attempts")]
    NoFreeCell { attempts: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<GameError> for io::Error {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other),
        }
    }
}
