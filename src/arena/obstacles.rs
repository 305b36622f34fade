//! Static brick walls and the composite shapes the hunter reasons about.
//!
//! Walls are generated once per match and never mutated. Overlapping walls
//! are allowed; the overlap test treats them as one occluded region.

use super::geometry::{Arena, Cell, Rect};
use crate::config::GameConfig;
use rand::Rng;

/// Which way an L-shaped junction opens, seen from its vertical stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LOrientation {
    /// Bar starts at the stem and runs right (`┌`); the pocket is right of the stem.
    Right,
    /// Bar ends at the stem (`┐`); the pocket is left of the stem.
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Stem hangs below the bar, somewhere within its width.
    T { stem_center: f64 },
    L(LOrientation),
}

/// A horizontal/vertical wall pair forming a trap-prone junction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeShape {
    pub kind: ShapeKind,
    pub horizontal: Rect,
    pub vertical: Rect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleField {
    walls: Vec<Rect>,
}

impl ObstacleField {
    pub fn new(walls: Vec<Rect>) -> Self {
        Self { walls }
    }

    /// Brick walls in the style of tank-battle arenas: standalone walls plus
    /// hand-composed L/T shapes, all kept clear of the spawn area.
    pub fn generate<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let arena = config.arena();
        let mut walls =
            Vec::with_capacity(config.standalone_obstacles + 2 * config.composite_shapes);

        for _ in 0..config.standalone_obstacles {
            let wall = random_wall(config, rng);
            let (dx, dy) = spawn_buffer_shift(&wall, &arena, config.spawn_buffer);
            walls.push(wall.translated(dx, dy));
        }

        for _ in 0..config.composite_shapes {
            let (bar, stem) = random_composite(config, rng);
            let (dx, dy) = spawn_buffer_shift(&bar.union(&stem), &arena, config.spawn_buffer);
            walls.push(bar.translated(dx, dy));
            walls.push(stem.translated(dx, dy));
        }

        Self { walls }
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Does the cell's square intersect any wall?
    pub fn blocks(&self, arena: &Arena, cell: Cell) -> bool {
        let square = arena.cell_rect(cell);
        self.walls.iter().any(|wall| wall.overlaps(&square))
    }

    /// Derived pass pairing horizontal and vertical walls into T and L shapes.
    /// `tolerance` is how far apart (in pixels) two edges may be and still
    /// count as joined; the planner passes one block.
    pub fn composite_shapes(&self, tolerance: i32) -> Vec<CompositeShape> {
        let horizontals: Vec<Rect> = self
            .walls
            .iter()
            .copied()
            .filter(Rect::is_horizontal)
            .collect();
        let verticals: Vec<Rect> = self
            .walls
            .iter()
            .copied()
            .filter(Rect::is_vertical)
            .collect();

        let mut shapes = Vec::new();

        for h in &horizontals {
            for v in &verticals {
                let within_bar = v.x >= h.x && v.right() <= h.right();
                let hangs_below = (v.y - h.bottom()).abs() <= tolerance;
                if within_bar && hangs_below {
                    shapes.push(CompositeShape {
                        kind: ShapeKind::T {
                            stem_center: f64::from(v.x) + f64::from(v.w) / 2.0,
                        },
                        horizontal: *h,
                        vertical: *v,
                    });
                }
            }
        }

        for v in &verticals {
            for h in &horizontals {
                let at_stem_top =
                    (h.y - v.y).abs() <= tolerance || (v.y - h.bottom()).abs() <= tolerance;
                if !at_stem_top {
                    continue;
                }
                let orientation = if (h.x - v.x).abs() <= tolerance {
                    Some(LOrientation::Right)
                } else if (h.right() - v.right()).abs() <= tolerance {
                    Some(LOrientation::Left)
                } else {
                    None
                };
                if let Some(orientation) = orientation {
                    shapes.push(CompositeShape {
                        kind: ShapeKind::L(orientation),
                        horizontal: *h,
                        vertical: *v,
                    });
                }
            }
        }

        shapes
    }
}

/// Random horizontal or vertical wall, 3-8 bricks long and 1-2 bricks thick.
fn random_wall<R: Rng>(config: &GameConfig, rng: &mut R) -> Rect {
    let unit = config.brick_unit;
    let long = rng.gen_range(3..=8) * unit;
    let thick = rng.gen_range(1..=2) * unit;
    let (w, h) = if rng.gen_bool(0.5) {
        (long, thick)
    } else {
        (thick, long)
    };
    place_on_brick_grid(config, w, h, rng)
}

/// One-brick-thick bar with a stem hanging below it, either at one end (L)
/// or centered (T).
fn random_composite<R: Rng>(config: &GameConfig, rng: &mut R) -> (Rect, Rect) {
    let unit = config.brick_unit;
    let bar_w = rng.gen_range(3..=5) * unit;
    let stem_h = rng.gen_range(2..=4) * unit;
    let anchor = place_on_brick_grid(config, bar_w, unit + stem_h, rng);

    let bar = Rect::new(anchor.x, anchor.y, bar_w, unit);
    let stem_x = if rng.gen_bool(0.5) {
        if rng.gen_bool(0.5) {
            anchor.x
        } else {
            anchor.x + bar_w - unit
        }
    } else {
        anchor.x + (bar_w - unit) / 2
    };
    (bar, Rect::new(stem_x, anchor.y + unit, unit, stem_h))
}

/// A `w x h` rectangle at a random brick-aligned spot fully inside the arena.
fn place_on_brick_grid<R: Rng>(config: &GameConfig, w: i32, h: i32, rng: &mut R) -> Rect {
    let unit = config.brick_unit;
    let max_col = (config.arena_width - w) / unit;
    let max_row = (config.arena_height - h) / unit;
    Rect::new(
        rng.gen_range(0..=max_col) * unit,
        rng.gen_range(0..=max_row) * unit,
        w,
        h,
    )
}

/// Offset that moves `bounds` out of the square reserved around the arena
/// center, along whichever axis needs the smaller push.
fn spawn_buffer_shift(bounds: &Rect, arena: &Arena, buffer: i32) -> (i32, i32) {
    let center = arena.center();
    let zone = Rect::new(center.x - buffer, center.y - buffer, 2 * buffer, 2 * buffer);
    if !bounds.overlaps(&zone) {
        return (0, 0);
    }

    let new_x = escape_axis(bounds.x, bounds.w, zone.x, zone.right(), arena.width);
    let new_y = escape_axis(bounds.y, bounds.h, zone.y, zone.bottom(), arena.height);

    match (new_x, new_y) {
        (Some(x), Some(y)) if (x - bounds.x).abs() <= (y - bounds.y).abs() => (x - bounds.x, 0),
        (_, Some(y)) => (0, y - bounds.y),
        (Some(x), None) => (x - bounds.x, 0),
        (None, None) => {
            tracing::warn!(?bounds, "obstacle cannot clear the spawn buffer");
            (0, 0)
        }
    }
}

/// Nearest start position that puts `[start, start + len)` entirely before
/// or after the zone while staying within `[0, limit)`.
fn escape_axis(start: i32, len: i32, zone_start: i32, zone_end: i32, limit: i32) -> Option<i32> {
    [zone_start - len, zone_end]
        .into_iter()
        .filter(|&pos| pos >= 0 && pos + len <= limit)
        .min_by_key(|&pos| (pos - start).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn spawn_zone(arena: &Arena, buffer: i32) -> Rect {
        let c = arena.center();
        Rect::new(c.x - buffer, c.y - buffer, 2 * buffer, 2 * buffer)
    }

    #[test]
    fn test_generate_counts() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let field = ObstacleField::generate(&config, &mut rng);
        // 5 standalone walls + 2 shapes of 2 pieces each
        assert_eq!(field.len(), 9);
    }

    #[test]
    fn test_generated_walls_inside_arena_and_clear_of_spawn() {
        let config = GameConfig::default();
        let arena = config.arena();
        let zone = spawn_zone(&arena, config.spawn_buffer);

        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let field = ObstacleField::generate(&config, &mut rng);
            for wall in field.walls() {
                assert!(wall.x >= 0 && wall.y >= 0, "seed {}: {:?}", seed, wall);
                assert!(
                    wall.right() <= arena.width && wall.bottom() <= arena.height,
                    "seed {}: {:?} leaves the arena",
                    seed,
                    wall
                );
                assert!(
                    !wall.overlaps(&zone),
                    "seed {}: {:?} intrudes on the spawn buffer",
                    seed,
                    wall
                );
            }
            assert!(!field.blocks(&arena, arena.center()));
        }
    }

    #[test]
    fn test_generated_walls_are_long_and_thin() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let field = ObstacleField::generate(&config, &mut rng);
        for wall in &field.walls()[..config.standalone_obstacles] {
            assert!(wall.is_horizontal() || wall.is_vertical(), "{:?}", wall);
            assert_eq!(wall.w % config.brick_unit, 0);
            assert_eq!(wall.h % config.brick_unit, 0);
        }
    }

    #[test]
    fn test_generated_composites_are_detected() {
        let config = GameConfig {
            standalone_obstacles: 0,
            ..GameConfig::default()
        };
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let field = ObstacleField::generate(&config, &mut rng);
            assert!(
                !field.composite_shapes(config.block_size).is_empty(),
                "seed {}: no shape detected in {:?}",
                seed,
                field.walls()
            );
        }
    }

    #[test]
    fn test_blocks_uses_cell_square() {
        let arena = Arena::default();
        let field = ObstacleField::new(vec![Rect::new(100, 100, 20, 20)]);
        assert!(field.blocks(&arena, Cell::new(105, 105)));
        assert!(field.blocks(&arena, Cell::new(110, 110)));
        assert!(!field.blocks(&arena, Cell::new(50, 50)));
        assert!(!field.blocks(&arena, Cell::new(120, 100)));
    }

    #[test]
    fn test_detects_t_shape() {
        let bar = Rect::new(300, 300, 80, 20);
        let stem = Rect::new(330, 320, 20, 60);
        let field = ObstacleField::new(vec![bar, stem]);

        let shapes = field.composite_shapes(10);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].kind, ShapeKind::T { stem_center: 340.0 });
        assert_eq!(shapes[0].horizontal, bar);
        assert_eq!(shapes[0].vertical, stem);
    }

    #[test]
    fn test_detects_l_shape_orientations() {
        let bar = Rect::new(300, 300, 80, 20);
        let left_stem = Rect::new(300, 320, 20, 60);
        let right_stem = Rect::new(360, 320, 20, 60);

        let shapes = ObstacleField::new(vec![bar, left_stem]).composite_shapes(10);
        assert!(shapes
            .iter()
            .any(|s| s.kind == ShapeKind::L(LOrientation::Right)));

        let shapes = ObstacleField::new(vec![bar, right_stem]).composite_shapes(10);
        assert!(shapes
            .iter()
            .any(|s| s.kind == ShapeKind::L(LOrientation::Left)));
    }

    #[test]
    fn test_l_with_bar_level_with_stem_top() {
        // Bar sits beside the top of the stem rather than above it
        let bar = Rect::new(310, 300, 80, 20);
        let stem = Rect::new(300, 300, 20, 80);
        let shapes = ObstacleField::new(vec![bar, stem]).composite_shapes(10);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].kind, ShapeKind::L(LOrientation::Right));
    }

    #[test]
    fn test_detached_walls_form_no_shape() {
        let bar = Rect::new(100, 100, 80, 20);
        let stem = Rect::new(400, 400, 20, 60);
        assert!(ObstacleField::new(vec![bar, stem])
            .composite_shapes(10)
            .is_empty());
    }

    #[test]
    fn test_square_walls_are_ignored() {
        let square = Rect::new(300, 300, 40, 40);
        let stem = Rect::new(300, 340, 20, 60);
        assert!(ObstacleField::new(vec![square, stem])
            .composite_shapes(10)
            .is_empty());
    }

    #[test]
    fn test_spawn_shift_prefers_smaller_push() {
        let arena = Arena::default();
        // Zone is x 300..500, y 200..400; wall pokes 20px into its left side
        let wall = Rect::new(240, 260, 80, 20);
        let (dx, dy) = spawn_buffer_shift(&wall, &arena, 100);
        assert_eq!((dx, dy), (-20, 0));
        assert!(!wall.translated(dx, dy).overlaps(&Rect::new(300, 200, 200, 200)));
    }

    #[test]
    fn test_spawn_shift_leaves_clear_walls_alone() {
        let arena = Arena::default();
        let wall = Rect::new(0, 0, 60, 20);
        assert_eq!(spawn_buffer_shift(&wall, &arena, 100), (0, 0));
    }
}
