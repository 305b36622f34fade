//! Snake bodies: an ordered run of cells, oldest first, head last.

use super::geometry::{Arena, Cell, Direction};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    cells: VecDeque<Cell>,
}

impl Body {
    /// A one-cell body.
    pub fn new(head: Cell) -> Self {
        Self {
            cells: VecDeque::from([head]),
        }
    }

    /// Build from cells ordered oldest first. Panics on an empty list.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!cells.is_empty(), "a body needs at least a head");
        Self { cells }
    }

    pub fn head(&self) -> Cell {
        // Never empty: constructors require a head and advance only pushes before truncating.
        self.cells[self.cells.len() - 1]
    }

    /// The segment right behind the head, if any.
    pub fn neck(&self) -> Option<Cell> {
        let len = self.cells.len();
        (len >= 2).then(|| self.cells[len - 2])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells oldest first; the head comes last.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Does `cell` land on any segment other than the head?
    pub fn hits_segment(&self, cell: Cell) -> bool {
        self.cells
            .iter()
            .take(self.cells.len() - 1)
            .any(|&segment| segment == cell)
    }

    /// Where the head ends up after one step along `heading`. A stationary
    /// body stays put.
    pub fn next_head(&self, heading: Option<Direction>, arena: &Arena) -> Cell {
        match heading {
            Some(direction) => arena.step(self.head(), direction),
            None => self.head(),
        }
    }

    /// Direction of travel read off the last two cells, seeing through wraps.
    pub fn implied_heading(&self, arena: &Arena) -> Option<Direction> {
        let neck = self.neck()?;
        let head = self.head();
        Direction::ALL
            .into_iter()
            .find(|&d| arena.step(neck, d) == head)
    }

    /// On a 180 degree turn, cut the body back to the head plus one cell
    /// behind it along the new heading. Returns whether the cut happened.
    pub fn repair_reversal(&mut self, new_heading: Option<Direction>, arena: &Arena) -> bool {
        let (Some(new_heading), Some(current)) = (new_heading, self.implied_heading(arena)) else {
            return false;
        };
        if new_heading != current.opposite() {
            return false;
        }

        let head = self.head();
        let tail = arena.step(head, current);
        self.cells = VecDeque::from([tail, head]);
        true
    }

    /// Push the new head, then drop the oldest cells beyond `target_len`.
    pub fn advance(&mut self, new_head: Cell, target_len: usize) {
        self.cells.push_back(new_head);
        while self.cells.len() > target_len.max(1) {
            self.cells.pop_front();
        }
    }

    /// Throw away everything and start over as a single cell.
    pub fn reset(&mut self, head: Cell) {
        self.cells.clear();
        self.cells.push_back(head);
    }
}
