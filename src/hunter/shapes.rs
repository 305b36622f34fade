//! Steering biases for T and L wall junctions.
//!
//! A greedy hunter chasing a target on the far side of a junction walks
//! into the pocket and stays there. These terms push it back out and
//! around the stem. Negative values make a direction more attractive.

use crate::arena::{Cell, CompositeShape, Direction, LOrientation, ShapeKind};

const T_CYCLE_DOWN: f64 = -1000.0;
const T_CYCLE_SIDEWAYS: f64 = 500.0;
const T_TOWARD_TARGET: f64 = -200.0;

const L_ESCAPE_AWAY: f64 = -1200.0;
const L_ESCAPE_UP: f64 = -800.0;
const L_PAST_STEM: f64 = -700.0;
const L_CYCLE_UP_EXTRA: f64 = -200.0;
const L_CORNER_AWAY: f64 = -800.0;
const L_CORNER_DOWN: f64 = -600.0;

/// Per-direction bias, indexed by [`Direction::index`]. Shapes are applied
/// in order and a later shape overwrites what an earlier one set for the
/// same direction.
pub fn shape_bias(
    shapes: &[CompositeShape],
    head: Cell,
    target: Cell,
    cycling: bool,
    block: i32,
) -> [f64; 4] {
    let mut bias = [0.0; 4];
    for shape in shapes {
        match shape.kind {
            ShapeKind::T { stem_center } => {
                t_bias(&mut bias, shape, stem_center, head, target, cycling, block)
            }
            ShapeKind::L(orientation) => {
                l_bias(&mut bias, shape, orientation, head, target, cycling, block)
            }
        }
    }
    bias
}

fn set(bias: &mut [f64; 4], direction: Direction, value: f64) {
    bias[direction.index()] = value;
}

fn t_bias(
    bias: &mut [f64; 4],
    shape: &CompositeShape,
    stem_center: f64,
    head: Cell,
    target: Cell,
    cycling: bool,
    block: i32,
) {
    let (h, v) = (shape.horizontal, shape.vertical);
    let hx = f64::from(head.x);
    let tx = f64::from(target.x);
    let block_f = f64::from(block);

    let head_left = hx < stem_center;
    let head_right = hx > stem_center;
    let target_left = tx < stem_center;
    let target_right = tx > stem_center;
    let stem_between = (head_left && target_right) || (head_right && target_left);
    let below_bar = head.y > h.bottom();
    let near_stem = (hx - stem_center).abs() < 2.0 * block_f;

    if cycling && near_stem && stem_between && below_bar {
        set(bias, Direction::Down, T_CYCLE_DOWN);
        set(bias, Direction::Left, T_CYCLE_SIDEWAYS);
        set(bias, Direction::Right, T_CYCLE_SIDEWAYS);
    } else if below_bar && stem_between && head.y > v.y + 2 * block {
        if head_left && target_right {
            set(bias, Direction::Right, T_TOWARD_TARGET);
        } else {
            set(bias, Direction::Left, T_TOWARD_TARGET);
        }
    }
}

fn l_bias(
    bias: &mut [f64; 4],
    shape: &CompositeShape,
    orientation: LOrientation,
    head: Cell,
    target: Cell,
    cycling: bool,
    block: i32,
) {
    let v = shape.vertical;
    let (corner_x, away) = match orientation {
        LOrientation::Right => (v.x, Direction::Left),
        LOrientation::Left => (v.right(), Direction::Right),
    };
    let corner_y = v.y;

    let in_pocket = |cell: Cell| match orientation {
        LOrientation::Right => cell.x > corner_x && cell.y > corner_y,
        LOrientation::Left => cell.x < corner_x && cell.y > corner_y,
    };
    let head_inside = in_pocket(head);
    let target_outside = !in_pocket(target);

    if cycling || (head_inside && target_outside) {
        let clear_of_stem = match orientation {
            LOrientation::Right => head.x < v.x - 2 * block,
            LOrientation::Left => head.x > v.right() + 2 * block,
        };
        for direction in Direction::ALL {
            if direction == away {
                set(bias, direction, L_ESCAPE_AWAY);
            } else if direction == Direction::Up && head.y > v.y + block {
                set(bias, direction, L_ESCAPE_UP);
            } else if clear_of_stem {
                let toward_target = (direction == Direction::Up && target.y < head.y)
                    || (direction == Direction::Down && target.y > head.y);
                if toward_target {
                    set(bias, direction, L_PAST_STEM);
                }
            }
        }
        if cycling && target.y < head.y {
            bias[Direction::Up.index()] += L_CYCLE_UP_EXTRA;
        }
    } else if head_inside
        && (head.x - corner_x).abs() < 3 * block
        && (head.y - corner_y).abs() < 3 * block
    {
        set(bias, away, L_CORNER_AWAY);
        set(bias, Direction::Down, L_CORNER_DOWN);
    }
}
