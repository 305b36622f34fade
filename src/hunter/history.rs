//! Where the hunter has been, and whether it is going round in circles.

use crate::arena::{Body, Cell};
use std::collections::HashMap;

/// Bounded record of the hunter's recent head positions, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunterTrail {
    cells: Vec<Cell>,
    capacity: usize,
}

impl HunterTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
        if self.cells.len() > self.capacity {
            let excess = self.cells.len() - self.capacity;
            self.cells.drain(..excess);
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Visit counts over the trail plus the three repetition signals.
#[derive(Debug, Clone, Default)]
pub struct VisitHistory {
    counts: HashMap<Cell, u32>,
    /// Some cell was visited more than once.
    pub basic: bool,
    /// Some cell was visited more than twice.
    pub extreme: bool,
    /// The last five positions hold at most two distinct cells.
    pub recent: bool,
}

impl VisitHistory {
    /// Read the trail, or the body when no trail has been recorded yet.
    pub fn observe(trail: &[Cell], body: &Body) -> Self {
        if trail.is_empty() {
            let cells: Vec<Cell> = body.iter().copied().collect();
            Self::from_cells(&cells)
        } else {
            Self::from_cells(trail)
        }
    }

    pub fn from_cells(cells: &[Cell]) -> Self {
        let mut counts: HashMap<Cell, u32> = HashMap::new();
        for &cell in cells {
            *counts.entry(cell).or_insert(0) += 1;
        }

        let basic = counts.values().any(|&n| n > 1);
        let extreme = counts.values().any(|&n| n > 2);
        let recent = cells.len() > 5 && {
            let mut last_five = cells[cells.len() - 5..].to_vec();
            last_five.sort_by_key(|c| (c.x, c.y));
            last_five.dedup();
            last_five.len() <= 2
        };

        Self {
            counts,
            basic,
            extreme,
            recent,
        }
    }

    /// Times `cell` appears in the history.
    pub fn count(&self, cell: Cell) -> u32 {
        self.counts.get(&cell).copied().unwrap_or(0)
    }

    pub fn visited(&self, cell: Cell) -> bool {
        self.counts.contains_key(&cell)
    }

    pub fn is_cycling(&self) -> bool {
        self.basic || self.extreme || self.recent
    }
}
