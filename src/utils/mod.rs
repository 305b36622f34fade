//! Utility modules: JSON save files under ~/.battle-snake/.

pub mod persistence;
