//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so the game logs to a file under
//! ~/.battle-snake/. The simulator logs to stderr.

use crate::constants::LOG_FILE;
use crate::error::GameError;
use crate::utils::persistence::save_path;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sink {
    Stderr,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct TracingSubscriber {
    rust_log_fallback: String,
    sink: Sink,
}

impl Default for TracingSubscriber {
    fn default() -> Self {
        Self {
            rust_log_fallback: "info".into(),
            sink: Sink::Stderr,
        }
    }
}

impl TracingSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn rust_log_fallback(mut self, value: impl AsRef<str>) -> Self {
        self.rust_log_fallback = value.as_ref().into();
        self
    }

    /// Append to `path`, creating it and its directory if needed.
    pub fn to_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = Sink::File(path.into());
        self
    }

    pub fn to_stderr(mut self) -> Self {
        self.sink = Sink::Stderr;
        self
    }

    fn env_filter(&self) -> Result<EnvFilter, GameError> {
        // depends on RUST_LOG env var
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.rust_log_fallback))
            .map_err(|e| GameError::Logging(e.to_string()))
    }

    /// Install as the global default. Fails if one is already set.
    pub fn try_init(self) -> Result<(), GameError> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.env_filter()?)
            .with_target(false);

        let installed = match self.sink {
            Sink::Stderr => builder.with_writer(io::stderr).try_init(),
            Sink::File(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                let file = OpenOptions::new().create(true).append(true).open(&path)?;
                builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init()
            }
        };
        installed.map_err(|e| GameError::Logging(e.to_string()))
    }
}

/// ~/.battle-snake/battle-snake.log
pub fn default_log_path() -> io::Result<PathBuf> {
    save_path(LOG_FILE)
}
