//! Match state machine: the per-tick engine and the screen flow around it.

pub mod logic;
pub mod session;
pub mod types;

pub use logic::{queue_intent, random_free_cell, tick};
pub use session::{ControlInput, FinalScore, Phase, Session, SessionFlow, TickOutcome};
pub use types::*;
