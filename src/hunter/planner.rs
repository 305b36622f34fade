//! One-step pursuit planner: score the four neighbouring cells and take the
//! cheapest legal one.

use super::history::VisitHistory;
use super::shapes::shape_bias;
use crate::arena::{distance, Arena, Body, Cell, Direction, ObstacleField};

const TURN_PENALTY: f64 = 10.0;
const REVERSE_PENALTY: f64 = 50.0;
const REPEAT_PENALTY: f64 = 80.0;
const CYCLING_REPEAT_PENALTY: f64 = 300.0;
const EXTREME_REPEAT_PENALTY: f64 = 500.0;
const EXPLORATION_BONUS: f64 = -300.0;
const PROGRESS_BONUS: f64 = -30.0;

/// Fallback targets when nothing is committed: both foods, then the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCandidates {
    pub foods: [Cell; 2],
    pub player: Cell,
}

impl TargetCandidates {
    /// Closer food; the first one on a tie.
    pub fn nearest_food(&self, from: Cell) -> Cell {
        let [first, second] = self.foods;
        if distance(from, second) < distance(from, first) {
            second
        } else {
            first
        }
    }

    /// Closest of food 1, food 2 and the player, earlier ones winning ties.
    pub fn nearest(&self, from: Cell) -> Cell {
        let food = self.nearest_food(from);
        if distance(from, self.player) < distance(from, food) {
            self.player
        } else {
            food
        }
    }
}

/// Everything the planner looks at for one decision.
#[derive(Debug, Clone, Copy)]
pub struct PursuitInput<'a> {
    pub head: Cell,
    pub target: Option<Cell>,
    pub candidates: Option<TargetCandidates>,
    pub obstacles: &'a ObstacleField,
    pub heading: Option<Direction>,
    pub body: &'a Body,
    pub trail: &'a [Cell],
    pub arena: &'a Arena,
}

impl PursuitInput<'_> {
    /// Committed target, else the nearest fallback candidate.
    pub fn resolve_target(&self) -> Option<Cell> {
        self.target
            .or_else(|| self.candidates.map(|c| c.nearest(self.head)))
    }
}

/// One candidate direction after scoring. `cost` is `None` when the move
/// runs into a wall or the hunter's own body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub direction: Direction,
    pub cell: Cell,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlannerMode {
    /// Distance plus turn, repetition, progress and junction terms.
    #[default]
    Full,
    /// Distance to target only; the naive baseline.
    Greedy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PursuitPlanner {
    pub mode: PlannerMode,
}

impl PursuitPlanner {
    pub fn full() -> Self {
        Self {
            mode: PlannerMode::Full,
        }
    }

    pub fn greedy() -> Self {
        Self {
            mode: PlannerMode::Greedy,
        }
    }

    /// Score all four directions in [`Direction::ALL`] order. `None` when
    /// there is no target to chase.
    pub fn evaluate(&self, input: &PursuitInput) -> Option<[ScoredMove; 4]> {
        let target = input.resolve_target()?;
        let head = input.head;
        let arena = input.arena;

        let (history, bias) = match self.mode {
            PlannerMode::Greedy => (VisitHistory::default(), [0.0; 4]),
            PlannerMode::Full => {
                let history = VisitHistory::observe(input.trail, input.body);
                let cycling = history.is_cycling();
                let shapes = input.obstacles.composite_shapes(arena.block);
                let mut bias = shape_bias(&shapes, head, target, cycling, arena.block);
                if cycling {
                    for direction in Direction::ALL {
                        if !history.visited(arena.step(head, direction)) {
                            bias[direction.index()] += EXPLORATION_BONUS;
                        }
                    }
                }
                (history, bias)
            }
        };

        let current_distance = distance(head, target);
        Some(Direction::ALL.map(|direction| {
            let cell = arena.step(head, direction);
            let legal = !input.obstacles.blocks(arena, cell) && !input.body.hits_segment(cell);
            let cost = legal.then(|| {
                let to_target = distance(cell, target);
                match self.mode {
                    PlannerMode::Greedy => to_target,
                    PlannerMode::Full => {
                        to_target
                            + turn_penalty(input.heading, direction)
                            + repeat_penalty(&history, cell)
                            + bias[direction.index()]
                            + if to_target < current_distance {
                                PROGRESS_BONUS
                            } else {
                                0.0
                            }
                    }
                }
            });
            ScoredMove {
                direction,
                cell,
                cost,
            }
        }))
    }

    /// Cheapest legal direction; ties keep enumeration order. With no target
    /// or no legal move the current heading is kept.
    pub fn choose(&self, input: &PursuitInput) -> Option<Direction> {
        let Some(moves) = self.evaluate(input) else {
            return input.heading;
        };

        let mut best: Option<(f64, Direction)> = None;
        for scored in moves {
            if let Some(cost) = scored.cost {
                if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                    best = Some((cost, scored.direction));
                }
            }
        }

        match best {
            Some((cost, direction)) => {
                tracing::trace!(?direction, cost, "hunter move chosen");
                Some(direction)
            }
            None => {
                tracing::trace!("hunter boxed in, keeping heading");
                input.heading
            }
        }
    }
}

fn turn_penalty(heading: Option<Direction>, candidate: Direction) -> f64 {
    match heading {
        Some(current) if current == candidate => 0.0,
        Some(current) if current.opposite() == candidate => REVERSE_PENALTY,
        _ => TURN_PENALTY,
    }
}

fn repeat_penalty(history: &VisitHistory, cell: Cell) -> f64 {
    let count = history.count(cell);
    if count == 0 {
        return 0.0;
    }
    let per_visit = if history.is_cycling() {
        CYCLING_REPEAT_PENALTY
    } else {
        REPEAT_PENALTY
    };
    let extreme = if history.extreme {
        EXTREME_REPEAT_PENALTY
    } else {
        0.0
    };
    per_visit * f64::from(count + 1) + extreme
}
