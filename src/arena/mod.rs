//! The playing field: grid geometry, obstacle walls and snake bodies.

pub mod body;
pub mod geometry;
pub mod obstacles;

pub use body::Body;
pub use geometry::{distance, Arena, Cell, Direction, Rect};
pub use obstacles::{CompositeShape, LOrientation, ObstacleField, ShapeKind};
