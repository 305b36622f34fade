//! The full planner against the greedy baseline in T and L shaped traps.
//!
//! A one-cell hunter starts inside the trap with the target on the far side
//! of the stem. The greedy planner rocks back and forth between two or three
//! cells; the full planner has to find its way out.

use battle_snake::arena::{Arena, Body, Cell, ObstacleField, Rect};
use battle_snake::hunter::{HunterTrail, PursuitInput, PursuitPlanner};
use std::collections::HashSet;

const TICKS: usize = 60;

struct Walk {
    reached: bool,
    visited: HashSet<Cell>,
}

fn walk(planner: PursuitPlanner, walls: &[Rect], start: Cell, target: Cell) -> Walk {
    let arena = Arena::default();
    let obstacles = ObstacleField::new(walls.to_vec());
    let mut body = Body::new(start);
    let mut trail = HunterTrail::new(40);
    trail.push(start);
    let mut heading = None;
    let mut visited = HashSet::from([start]);
    let mut reached = false;

    for _ in 0..TICKS {
        let input = PursuitInput {
            head: body.head(),
            target: Some(target),
            candidates: None,
            obstacles: &obstacles,
            heading,
            body: &body,
            trail: trail.cells(),
            arena: &arena,
        };
        heading = planner.choose(&input);
        let next = body.next_head(heading, &arena);
        assert!(
            !obstacles.blocks(&arena, next),
            "planner walked into a wall at {:?}",
            next
        );
        body.advance(next, 1);
        trail.push(next);
        visited.insert(next);
        reached |= next == target;
    }

    Walk { reached, visited }
}

/// Did the walk leave the bounding box of the trap?
fn escaped(walk: &Walk, walls: &[Rect]) -> bool {
    let bounds = walls[1..].iter().fold(walls[0], |acc, w| acc.union(w));
    walk.visited.iter().any(|c| {
        c.x < bounds.x || c.x >= bounds.right() || c.y < bounds.y || c.y >= bounds.bottom()
    })
}

#[test]
fn test_t_trap() {
    let walls = [Rect::new(300, 300, 80, 20), Rect::new(330, 320, 20, 60)];
    let start = Cell::new(320, 340);
    let target = Cell::new(360, 340);

    let greedy = walk(PursuitPlanner::greedy(), &walls, start, target);
    let full = walk(PursuitPlanner::full(), &walls, start, target);

    assert!(!greedy.reached);
    assert!(greedy.visited.len() <= 3, "greedy visited {}", greedy.visited.len());
    assert!(full.reached, "full planner never got around the stem");
    assert!(full.visited.len() > greedy.visited.len());
}

#[test]
fn test_l_trap_opening_right() {
    let walls = [Rect::new(300, 300, 80, 20), Rect::new(300, 320, 20, 60)];
    let start = Cell::new(330, 340);
    let target = Cell::new(250, 340);

    let greedy = walk(PursuitPlanner::greedy(), &walls, start, target);
    let full = walk(PursuitPlanner::full(), &walls, start, target);

    assert!(greedy.visited.len() <= 3, "greedy visited {}", greedy.visited.len());
    assert!(!escaped(&greedy, &walls));
    assert!(escaped(&full, &walls));
    assert!(full.visited.len() > 10 * greedy.visited.len());
}

#[test]
fn test_l_trap_opening_left() {
    let walls = [Rect::new(300, 300, 80, 20), Rect::new(360, 320, 20, 60)];
    let start = Cell::new(340, 340);
    let target = Cell::new(420, 340);

    let greedy = walk(PursuitPlanner::greedy(), &walls, start, target);
    let full = walk(PursuitPlanner::full(), &walls, start, target);

    assert!(greedy.visited.len() <= 3, "greedy visited {}", greedy.visited.len());
    assert!(!escaped(&greedy, &walls));
    assert!(escaped(&full, &walls));
    assert!(full.visited.len() > 10 * greedy.visited.len());
}
