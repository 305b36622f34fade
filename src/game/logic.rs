//! Per-tick match update: movement, hunter planning, collisions, food and growth.

use super::types::*;
use crate::arena::{Arena, Cell, Direction, ObstacleField};
use crate::error::GameError;
use crate::hunter::{CommitmentUpdate, PursuitInput, TargetCandidates};
use rand::Rng;

/// Queue a movement intent for the next tick. The last one before the tick wins.
pub fn queue_intent(state: &mut MatchState, direction: Direction) {
    state.pending_intent = Some(direction);
}

/// Uniform random grid cell that is not inside a wall and not `taken`.
pub fn random_free_cell<R: Rng>(
    arena: &Arena,
    obstacles: &ObstacleField,
    taken: impl Fn(Cell) -> bool,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Cell, GameError> {
    for _ in 0..max_attempts {
        let cell = arena.random_cell(rng);
        if !obstacles.blocks(arena, cell) && !taken(cell) {
            return Ok(cell);
        }
    }
    Err(GameError::NoFreeCell {
        attempts: max_attempts,
    })
}

/// Advance the match by one step. Does nothing while paused or after game over.
pub fn tick<R: Rng>(state: &mut MatchState, rng: &mut R) -> Result<Vec<TickEvent>, GameError> {
    let mut events = Vec::new();
    if state.paused || state.game_over.is_some() {
        return Ok(events);
    }
    state.tick_count += 1;
    let arena = state.arena;

    // 1. Player intent
    if let Some(intent) = state.pending_intent.take() {
        state.player.heading = Some(intent);
    }
    if !state.hunter_active && state.player.heading.is_some() {
        state.hunter_active = true;
        tracing::debug!(tick = state.tick_count, "hunter activated");
        events.push(TickEvent::HunterActivated);
    }
    let player_head = state.player.body.head();
    let player_next = state.player.body.next_head(state.player.heading, &arena);

    // 2. Hunter planning
    let hunter_head = state.hunter.body.head();
    let hunter_next = if state.hunter_active {
        plan_hunter_move(state, player_head, &mut events)
    } else {
        hunter_head
    };

    // 3. Reversal repair
    if state.player.body.repair_reversal(state.player.heading, &arena) {
        events.push(TickEvent::PlayerReversed);
    }

    // 4. Collisions
    if let Some(cause) = fatal_player_collision(state, player_next, hunter_next) {
        finish(state, cause, &mut events);
        return Ok(events);
    }

    let hunter_reset = if !state.hunter_active {
        None
    } else if state.hunter.body.hits_segment(hunter_next) {
        Some(HunterResetCause::BitSelf)
    } else if state.obstacles.blocks(&arena, hunter_next) {
        Some(HunterResetCause::HitObstacle)
    } else {
        None
    };

    if let Some(cause) = hunter_reset {
        reset_hunter(state, cause, player_next, rng, &mut events)?;
    } else if state.hunter_active
        && (hunter_next == player_next || state.player.body.contains(hunter_next))
    {
        finish(state, GameOverCause::HunterAtePlayer, &mut events);
        return Ok(events);
    }

    // 5. Food, from the heads as they were at the start of the tick
    let player_food = state.foods.iter().position(|&food| food == player_head);
    let hunter_food = if hunter_reset.is_some() {
        None
    } else {
        state
            .foods
            .iter()
            .position(|&food| food == hunter_head)
            .filter(|&food| Some(food) != player_food)
    };

    // 6. Score, then grow
    if let Some(food) = player_food {
        state.player.score += 1;
        events.push(TickEvent::FoodEaten {
            eater: Eater::Player,
            food,
        });
    }
    if let Some(food) = hunter_food {
        state.hunter.score += 1;
        events.push(TickEvent::FoodEaten {
            eater: Eater::Hunter,
            food,
        });
    }

    if state.player.heading.is_some() {
        let len = state.player.score as usize;
        state.player.body.advance(player_next, len);
    }
    if hunter_reset.is_none() && state.hunter.heading.is_some() {
        let len = state.hunter.score as usize;
        state.hunter.body.advance(hunter_next, len);
        state.hunter_trail.push(hunter_next);
    }

    // 7. Respawn eaten food
    for food in [player_food, hunter_food].into_iter().flatten() {
        respawn_food(state, food, rng, &mut events)?;
    }

    // 8. High score; only a meal this tick announces a new best
    if state.player.score > state.high_score {
        state.high_score = state.player.score;
        if player_food.is_some() {
            events.push(TickEvent::NewHighScore(state.high_score));
        }
    }

    // 9. Length invariant
    assert!(
        state.player.body.len() <= state.player.score as usize,
        "player body {} longer than score {}",
        state.player.body.len(),
        state.player.score
    );
    assert!(
        state.hunter.body.len() <= state.hunter.score as usize,
        "hunter body {} longer than score {}",
        state.hunter.body.len(),
        state.hunter.score
    );

    Ok(events)
}

/// Advance the commitment, ask the planner for a heading and return the
/// hunter's next head.
fn plan_hunter_move(state: &mut MatchState, player_head: Cell, events: &mut Vec<TickEvent>) -> Cell {
    let hunter_head = state.hunter.body.head();
    let candidates = TargetCandidates {
        foods: state.foods,
        player: player_head,
    };

    match state.commitment.advance(hunter_head, &candidates) {
        CommitmentUpdate::Acquired(kind) => {
            tracing::debug!(?kind, "hunter acquired target");
        }
        CommitmentUpdate::Switched { from, to } => {
            tracing::debug!(?from, ?to, "hunter switched target");
            events.push(TickEvent::TargetSwitched { from, to });
        }
        CommitmentUpdate::Kept | CommitmentUpdate::Refreshed | CommitmentUpdate::Renewed => {}
    }

    let input = PursuitInput {
        head: hunter_head,
        target: state.commitment.target(),
        candidates: Some(candidates),
        obstacles: &state.obstacles,
        heading: state.hunter.heading,
        body: &state.hunter.body,
        trail: state.hunter_trail.cells(),
        arena: &state.arena,
    };
    let heading = state.planner.choose(&input);
    state.hunter.heading = heading;
    state.hunter.body.next_head(heading, &state.arena)
}

/// First fatal collision for the player's move, if any.
fn fatal_player_collision(
    state: &MatchState,
    player_next: Cell,
    hunter_next: Cell,
) -> Option<GameOverCause> {
    if state.player.heading.is_none() {
        return None;
    }
    if state.player.body.hits_segment(player_next) {
        return Some(GameOverCause::PlayerBitSelf);
    }
    if state.hunter.body.contains(player_next) || player_next == hunter_next {
        return Some(GameOverCause::PlayerHitHunter);
    }
    if state.obstacles.blocks(&state.arena, player_next) {
        return Some(GameOverCause::PlayerHitObstacle);
    }
    None
}

fn finish(state: &mut MatchState, cause: GameOverCause, events: &mut Vec<TickEvent>) {
    state.game_over = Some(cause);
    state.high_score = state.high_score.max(state.player.score);
    tracing::info!(
        ?cause,
        score = state.player.score,
        hunter_score = state.hunter.score,
        ticks = state.tick_count,
        "game over"
    );
    events.push(TickEvent::GameOver { cause });
}

/// Drop the hunter onto a fresh random cell as a stationary single segment.
fn reset_hunter<R: Rng>(
    state: &mut MatchState,
    cause: HunterResetCause,
    player_next: Cell,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> Result<(), GameError> {
    let at = random_free_cell(
        &state.arena,
        &state.obstacles,
        |cell| cell == player_next || state.player.body.contains(cell) || state.foods.contains(&cell),
        state.config.max_spawn_attempts,
        rng,
    )?;
    state.hunter.reset(at);
    state.hunter_trail.clear();
    state.commitment.reset();
    tracing::debug!(?cause, ?at, "hunter reset");
    events.push(TickEvent::HunterReset { cause, at });
    Ok(())
}

fn respawn_food<R: Rng>(
    state: &mut MatchState,
    food: usize,
    rng: &mut R,
    events: &mut Vec<TickEvent>,
) -> Result<(), GameError> {
    let other = state.foods[1 - food];
    let at = random_free_cell(
        &state.arena,
        &state.obstacles,
        |cell| cell == other || state.occupied(cell),
        state.config.max_spawn_attempts,
        rng,
    )?;
    state.foods[food] = at;
    events.push(TickEvent::FoodRespawned { food, at });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Rect;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn open_layout(player: Cell, hunter: Cell, foods: [Cell; 2]) -> MatchState {
        MatchState::with_layout(
            GameConfig::default(),
            MatchLayout {
                obstacles: ObstacleField::default(),
                player,
                hunter,
                foods,
            },
            0,
        )
    }

    fn far_foods() -> [Cell; 2] {
        [Cell::new(700, 500), Cell::new(750, 550)]
    }

    #[test]
    fn test_hunter_waits_for_first_move() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = open_layout(Cell::new(400, 300), Cell::new(100, 100), far_foods());

        for _ in 0..5 {
            let events = tick(&mut state, &mut rng).unwrap();
            assert!(events.is_empty());
        }
        assert_eq!(state.hunter.body.head(), Cell::new(100, 100));
        assert!(!state.hunter_active);

        queue_intent(&mut state, Direction::Up);
        let events = tick(&mut state, &mut rng).unwrap();
        assert!(events.contains(&TickEvent::HunterActivated));
        assert!(state.hunter_active);
        assert_eq!(state.player.body.head(), Cell::new(400, 290));
        assert_ne!(state.hunter.body.head(), Cell::new(100, 100));
    }

    #[test]
    fn test_paused_match_does_not_move() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = open_layout(Cell::new(400, 300), Cell::new(100, 100), far_foods());
        queue_intent(&mut state, Direction::Left);
        state.paused = true;
        tick(&mut state, &mut rng).unwrap();
        assert_eq!(state.player.body.head(), Cell::new(400, 300));
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn test_player_wraps_around() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = open_layout(Cell::new(790, 300), Cell::new(100, 100), far_foods());
        queue_intent(&mut state, Direction::Right);
        tick(&mut state, &mut rng).unwrap();
        assert_eq!(state.player.body.head(), Cell::new(0, 300));
    }

    #[test]
    fn test_player_hits_obstacle() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = MatchState::with_layout(
            GameConfig::default(),
            MatchLayout {
                obstacles: ObstacleField::new(vec![Rect::new(410, 280, 20, 60)]),
                player: Cell::new(400, 300),
                hunter: Cell::new(100, 100),
                foods: far_foods(),
            },
            0,
        );
        queue_intent(&mut state, Direction::Right);
        let events = tick(&mut state, &mut rng).unwrap();
        assert_eq!(state.game_over, Some(GameOverCause::PlayerHitObstacle));
        assert!(events.contains(&TickEvent::GameOver {
            cause: GameOverCause::PlayerHitObstacle
        }));

        // Finished matches ignore further ticks
        assert!(tick(&mut state, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_player_runs_into_hunter() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = open_layout(Cell::new(400, 300), Cell::new(410, 300), far_foods());
        queue_intent(&mut state, Direction::Right);
        tick(&mut state, &mut rng).unwrap();
        assert_eq!(state.game_over, Some(GameOverCause::PlayerHitHunter));
    }

    #[test]
    fn test_player_eats_and_grows() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let food = Cell::new(390, 300);
        let mut state = open_layout(Cell::new(400, 300), Cell::new(100, 100), [food, Cell::new(700, 500)]);

        queue_intent(&mut state, Direction::Left);
        tick(&mut state, &mut rng).unwrap();
        assert_eq!(state.player.body.head(), food);
        assert_eq!(state.player.score, 1);

        // Eaten from the head position reached last tick
        let events = tick(&mut state, &mut rng).unwrap();
        assert!(events.contains(&TickEvent::FoodEaten {
            eater: Eater::Player,
            food: 0
        }));
        assert_eq!(state.player.score, 2);
        assert_eq!(state.player.body.len(), 2);
        assert_ne!(state.foods[0], food);
        assert!(!state.occupied(state.foods[0]));
        assert_eq!(state.high_score, 2);
    }

    #[test]
    fn test_random_free_cell_gives_up() {
        let arena = Arena {
            block: 10,
            width: 20,
            height: 20,
        };
        let walls = ObstacleField::new(vec![Rect::new(0, 0, 20, 20)]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = random_free_cell(&arena, &walls, |_| false, 25, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::NoFreeCell { attempts: 25 }));
    }

    #[test]
    fn test_last_intent_wins() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = open_layout(Cell::new(400, 300), Cell::new(100, 100), far_foods());
        queue_intent(&mut state, Direction::Left);
        queue_intent(&mut state, Direction::Down);
        tick(&mut state, &mut rng).unwrap();
        assert_eq!(state.player.body.head(), Cell::new(400, 310));
    }
}
