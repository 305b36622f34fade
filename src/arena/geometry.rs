//! Grid cells, headings and the rectangle math the rest of the arena uses.

use crate::constants::{ARENA_HEIGHT, ARENA_WIDTH, BLOCK_SIZE};
use rand::Rng;

/// A grid-aligned position in pixels. Head cells are always multiples of
/// the block size and inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Cardinal direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Enumeration order; the planner breaks ties in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns the unit (dx, dy) delta for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// Position in [`Direction::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Up => 2,
            Self::Down => 3,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict AABB intersection. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Wider than tall.
    pub fn is_horizontal(&self) -> bool {
        self.w > self.h
    }

    /// Taller than wide.
    pub fn is_vertical(&self) -> bool {
        self.h > self.w
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// Euclidean distance between two cells. Only used for ranking.
pub fn distance(a: Cell, b: Cell) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}

/// Arena dimensions and grid pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub block: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            block: BLOCK_SIZE,
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn columns(&self) -> i32 {
        self.width / self.block
    }

    pub fn rows(&self) -> i32 {
        self.height / self.block
    }

    /// The `block x block` square a cell occupies.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        Rect::new(cell.x, cell.y, self.block, self.block)
    }

    /// Wrap each axis independently: leaving one edge re-enters at the opposite one.
    pub fn wrap(&self, x: i32, y: i32) -> Cell {
        let x = if x >= self.width {
            0
        } else if x < 0 {
            self.width - self.block
        } else {
            x
        };
        let y = if y >= self.height {
            0
        } else if y < 0 {
            self.height - self.block
        } else {
            y
        };
        Cell::new(x, y)
    }

    /// One block from `cell` toward `direction`, wrapped.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.x + dx * self.block, cell.y + dy * self.block)
    }

    /// Grid-aligned and inside the arena.
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.block == 0
            && cell.y % self.block == 0
    }

    /// Grid cell nearest the arena center.
    pub fn center(&self) -> Cell {
        self.snap(self.width / 2, self.height / 2)
    }

    /// Round a pixel position down onto the grid.
    pub fn snap(&self, x: i32, y: i32) -> Cell {
        Cell::new(x / self.block * self.block, y / self.block * self.block)
    }

    /// Uniformly random grid cell.
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Cell {
        let col = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        Cell::new(col * self.block, row * self.block)
    }
}
