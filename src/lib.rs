//! Battle Snake - terminal snake duel against a pursuing AI snake.
//!
//! This crate exposes the match engine for the terminal binary, the
//! simulator and integration tests.

pub mod arena;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod high_score;
pub mod hunter;
pub mod logging;
pub mod simulator;
pub mod utils;

// The terminal UI lives in the binary; it is tightly coupled to crossterm.
