//! Match data structures.
//!
//! A single [`MatchState`] holds everything one match needs. It is created
//! when the title screen is dismissed and thrown away on restart.

use super::logic::random_free_cell;
use crate::arena::{Arena, Body, Cell, Direction, ObstacleField, Rect};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::hunter::{HunterTrail, PursuitPlanner, TargetCommitment, TargetKind};
use rand::Rng;

/// Why the match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    PlayerBitSelf,
    PlayerHitHunter,
    PlayerHitObstacle,
    HunterAtePlayer,
}

impl GameOverCause {
    pub fn message(&self) -> &'static str {
        match self {
            Self::PlayerBitSelf => "You ran into yourself",
            Self::PlayerHitHunter => "You ran into the hunter",
            Self::PlayerHitObstacle => "You hit a wall",
            Self::HunterAtePlayer => "The hunter got you",
        }
    }
}

/// Why the hunter was sent back to a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HunterResetCause {
    BitSelf,
    HitObstacle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eater {
    Player,
    Hunter,
}

/// Things that happened during one tick, for the front-end and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickEvent {
    HunterActivated,
    TargetSwitched { from: TargetKind, to: TargetKind },
    PlayerReversed,
    HunterReset { cause: HunterResetCause, at: Cell },
    FoodEaten { eater: Eater, food: usize },
    FoodRespawned { food: usize, at: Cell },
    /// The player ate and passed the previous best.
    NewHighScore(u32),
    GameOver { cause: GameOverCause },
}

/// One snake: its body, where it is heading and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub body: Body,
    /// `None` until the snake first moves.
    pub heading: Option<Direction>,
    pub score: u32,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        Self {
            body: Body::new(head),
            heading: None,
            score: 1,
        }
    }

    /// Back to a stationary single cell with score 1.
    pub fn reset(&mut self, head: Cell) {
        self.body.reset(head);
        self.heading = None;
        self.score = 1;
    }
}

/// Explicit starting positions, for scripted matches and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchLayout {
    pub obstacles: ObstacleField,
    pub player: Cell,
    pub hunter: Cell,
    pub foods: [Cell; 2],
}

#[derive(Debug, Clone)]
pub struct MatchState {
    pub config: GameConfig,
    pub arena: Arena,
    pub obstacles: ObstacleField,

    pub player: Snake,
    /// Last movement intent received since the previous tick.
    pub pending_intent: Option<Direction>,

    pub hunter: Snake,
    /// The hunter stays put until the player first moves.
    pub hunter_active: bool,
    pub hunter_trail: HunterTrail,
    pub commitment: TargetCommitment,
    pub planner: PursuitPlanner,

    pub foods: [Cell; 2],
    pub high_score: u32,
    pub paused: bool,
    pub game_over: Option<GameOverCause>,
    pub tick_count: u64,
}

impl MatchState {
    /// Fresh match: random walls, player at the center, hunter in the
    /// top-left quadrant when that spot is free, two foods on free cells.
    pub fn new<R: Rng>(config: GameConfig, high_score: u32, rng: &mut R) -> Result<Self, GameError> {
        let arena = config.arena();
        let obstacles = ObstacleField::generate(&config, rng);
        let player = arena.center();

        let preferred = arena.snap(arena.width / 4, arena.height / 4);
        let hunter = if !obstacles.blocks(&arena, preferred) && preferred != player {
            preferred
        } else {
            random_free_cell(
                &arena,
                &obstacles,
                |cell| cell == player,
                config.max_spawn_attempts,
                rng,
            )?
        };

        let first = random_free_cell(
            &arena,
            &obstacles,
            |cell| cell == player || cell == hunter,
            config.max_spawn_attempts,
            rng,
        )?;
        let second = random_free_cell(
            &arena,
            &obstacles,
            |cell| cell == player || cell == hunter || cell == first,
            config.max_spawn_attempts,
            rng,
        )?;

        tracing::info!(
            walls = obstacles.len(),
            ?player,
            ?hunter,
            "match started"
        );

        Ok(Self::with_layout(
            config,
            MatchLayout {
                obstacles,
                player,
                hunter,
                foods: [first, second],
            },
            high_score,
        ))
    }

    pub fn with_layout(config: GameConfig, layout: MatchLayout, high_score: u32) -> Self {
        Self {
            arena: config.arena(),
            obstacles: layout.obstacles,
            player: Snake::new(layout.player),
            pending_intent: None,
            hunter: Snake::new(layout.hunter),
            hunter_active: false,
            hunter_trail: HunterTrail::new(config.hunter_trail_len),
            commitment: TargetCommitment::new(config.commitment_policy()),
            planner: PursuitPlanner::default(),
            foods: layout.foods,
            high_score,
            paused: false,
            game_over: None,
            tick_count: 0,
            config,
        }
    }

    /// Is `cell` on either snake?
    pub fn occupied(&self, cell: Cell) -> bool {
        self.player.body.contains(cell) || self.hunter.body.contains(cell)
    }

    pub fn render_feed(&self) -> RenderFeed<'_> {
        RenderFeed {
            arena: &self.arena,
            obstacles: self.obstacles.walls(),
            player: &self.player.body,
            hunter: &self.hunter.body,
            foods: self.foods,
            player_score: self.player.score,
            hunter_score: self.hunter.score,
            high_score: self.high_score,
            hunter_target: self.commitment.kind().zip(self.commitment.target()),
            paused: self.paused,
            game_over: self.game_over,
        }
    }
}

/// Read-only view handed to whatever draws the match.
#[derive(Debug, Clone, Copy)]
pub struct RenderFeed<'a> {
    pub arena: &'a Arena,
    pub obstacles: &'a [Rect],
    pub player: &'a Body,
    pub hunter: &'a Body,
    pub foods: [Cell; 2],
    pub player_score: u32,
    pub hunter_score: u32,
    pub high_score: u32,
    pub hunter_target: Option<(TargetKind, Cell)>,
    pub paused: bool,
    pub game_over: Option<GameOverCause>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_match_layout_is_valid() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let state = MatchState::new(GameConfig::default(), 7, &mut rng).unwrap();

            assert_eq!(state.player.body.head(), Cell::new(400, 300));
            assert_eq!(state.player.score, 1);
            assert_eq!(state.hunter.score, 1);
            assert!(!state.hunter_active);
            assert_eq!(state.high_score, 7);

            for food in state.foods {
                assert!(state.arena.contains(food));
                assert!(!state.obstacles.blocks(&state.arena, food));
                assert!(!state.occupied(food));
            }
            assert_ne!(state.foods[0], state.foods[1]);
            assert!(!state
                .obstacles
                .blocks(&state.arena, state.hunter.body.head()));
        }
    }

    #[test]
    fn test_hunter_prefers_quarter_spot() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let config = GameConfig {
            standalone_obstacles: 0,
            composite_shapes: 0,
            ..GameConfig::default()
        };
        let state = MatchState::new(config, 0, &mut rng).unwrap();
        assert_eq!(state.hunter.body.head(), Cell::new(200, 150));
    }

    #[test]
    fn test_render_feed_reflects_state() {
        let layout = MatchLayout {
            obstacles: ObstacleField::new(vec![Rect::new(0, 0, 40, 20)]),
            player: Cell::new(400, 300),
            hunter: Cell::new(100, 100),
            foods: [Cell::new(500, 500), Cell::new(600, 100)],
        };
        let state = MatchState::with_layout(GameConfig::default(), layout, 3);
        let feed = state.render_feed();
        assert_eq!(feed.obstacles.len(), 1);
        assert_eq!(feed.player.head(), Cell::new(400, 300));
        assert_eq!(feed.hunter.head(), Cell::new(100, 100));
        assert_eq!(feed.high_score, 3);
        assert_eq!(feed.hunter_target, None);
        assert!(!feed.paused);
        assert!(feed.game_over.is_none());
    }

    #[test]
    fn test_snake_reset() {
        let mut snake = Snake::new(Cell::new(0, 0));
        snake.score = 5;
        snake.heading = Some(Direction::Up);
        snake.reset(Cell::new(50, 50));
        assert_eq!(snake.body.len(), 1);
        assert_eq!(snake.score, 1);
        assert_eq!(snake.heading, None);
    }
}
