//! Plays whole matches with an autopilot player.
//!
//! The autopilot steers with the same pursuit planner as the hunter, aimed
//! at the nearest food, so results reflect the real tick engine.

use super::config::SimConfig;
use super::report::SimReport;
use crate::arena::{Cell, Direction};
use crate::error::GameError;
use crate::game::{queue_intent, tick, Eater, GameOverCause, MatchState, TickEvent};
use crate::hunter::{HunterTrail, PursuitInput, PursuitPlanner, TargetCandidates};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of one simulated match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub ticks: u64,
    pub player_score: u32,
    pub hunter_score: u32,
    /// `None` when the tick cap was hit first.
    pub cause: Option<GameOverCause>,
    pub hunter_resets: u32,
    pub hunter_meals: u32,
    pub player_reversals: u32,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, GameError> {
    let mut runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_match(config, &mut rng)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} ticks, score {}, hunter {}, {:?}",
                run_idx + 1,
                config.num_runs,
                stats.ticks,
                stats.player_score,
                stats.hunter_score,
                stats.cause
            );
        }
        runs.push(stats);
    }

    Ok(SimReport::from_runs(runs, config.max_ticks_per_run))
}

/// Play one match to game over or the tick cap.
pub fn simulate_match<R: Rng>(config: &SimConfig, rng: &mut R) -> Result<MatchStats, GameError> {
    let mut state = MatchState::new(config.game.clone(), 0, rng)?;
    let mut trail = HunterTrail::new(config.game.hunter_trail_len);
    let planner = PursuitPlanner::full();
    let mut stats = MatchStats::default();

    while stats.ticks < config.max_ticks_per_run && state.game_over.is_none() {
        if let Some(direction) = autopilot_move(&state, &planner, trail.cells()) {
            queue_intent(&mut state, direction);
        }

        for event in tick(&mut state, rng)? {
            match event {
                TickEvent::HunterReset { .. } => stats.hunter_resets += 1,
                TickEvent::PlayerReversed => stats.player_reversals += 1,
                TickEvent::FoodEaten {
                    eater: Eater::Hunter,
                    ..
                } => stats.hunter_meals += 1,
                _ => {}
            }
        }
        trail.push(state.player.body.head());
        stats.ticks += 1;
    }

    stats.player_score = state.player.score;
    stats.hunter_score = state.hunter.score;
    stats.cause = state.game_over;
    tracing::debug!(?stats, "simulated match finished");
    Ok(stats)
}

/// Player heading chosen by the planner toward the closer food.
fn autopilot_move(
    state: &MatchState,
    planner: &PursuitPlanner,
    trail: &[Cell],
) -> Option<Direction> {
    let head = state.player.body.head();
    let candidates = TargetCandidates {
        foods: state.foods,
        player: head,
    };
    let input = PursuitInput {
        head,
        target: Some(candidates.nearest_food(head)),
        candidates: None,
        obstacles: &state.obstacles,
        heading: state.player.heading,
        body: &state.player.body,
        trail,
        arena: &state.arena,
    };
    planner.choose(&input)
}
