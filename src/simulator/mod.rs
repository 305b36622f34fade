//! Headless match simulator for Monte Carlo analysis.
//!
//! Plays many matches with an autopilot player to measure:
//! - How long players survive against the hunter
//! - How often the hunter gets stuck and resets
//! - Which collision ends most matches
//!
//! Matches go through the same tick engine as the terminal game.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{CauseCounts, SimReport};
pub use runner::{run_simulation, simulate_match, MatchStats};
