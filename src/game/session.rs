//! Screen flow around matches: title, playing, paused, game over.
//!
//! The session owns the current match and the high score for the process
//! lifetime. Key mapping lives in the binary; this only sees intents.

use super::logic::{queue_intent, tick};
use super::types::{GameOverCause, MatchState, TickEvent};
use crate::arena::Direction;
use crate::config::GameConfig;
use crate::error::GameError;
use rand::Rng;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    Move(Direction),
    Pause,
    Resume,
    Restart,
    Quit,
    /// Any other key. Dismisses the title screen.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Title,
    Playing,
    Paused,
    GameOver,
}

/// Final numbers of a finished match, for the high-score store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalScore {
    pub score: u32,
    pub high_score: u32,
    pub cause: GameOverCause,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<TickEvent>,
    /// Set on the tick the match ended.
    pub finished: Option<FinalScore>,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    phase: Phase,
    current: Option<MatchState>,
    high_score: u32,
}

impl Session {
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self {
            config,
            phase: Phase::Title,
            current: None,
            high_score,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// The match being played, paused or just lost.
    pub fn current(&self) -> Option<&MatchState> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut MatchState> {
        self.current.as_mut()
    }

    /// The transition function. Starting a match needs the RNG for layout.
    pub fn handle_input<R: Rng>(
        &mut self,
        input: ControlInput,
        rng: &mut R,
    ) -> Result<SessionFlow, GameError> {
        if input == ControlInput::Quit {
            return Ok(SessionFlow::Exit);
        }

        match self.phase {
            Phase::Title => {
                self.current = Some(MatchState::new(self.config.clone(), self.high_score, rng)?);
                self.phase = Phase::Playing;
            }
            Phase::Playing => match input {
                ControlInput::Move(direction) => {
                    if let Some(state) = self.current.as_mut() {
                        queue_intent(state, direction);
                    }
                }
                ControlInput::Pause => self.set_paused(true),
                _ => {}
            },
            Phase::Paused => {
                if matches!(input, ControlInput::Resume | ControlInput::Pause) {
                    self.set_paused(false);
                }
            }
            Phase::GameOver => {
                if input == ControlInput::Restart {
                    self.current = None;
                    self.phase = Phase::Title;
                }
            }
        }
        Ok(SessionFlow::Continue)
    }

    /// Step the match if one is being played.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Result<TickOutcome, GameError> {
        if self.phase != Phase::Playing {
            return Ok(TickOutcome::default());
        }
        let Some(state) = self.current.as_mut() else {
            return Ok(TickOutcome::default());
        };

        let events = tick(state, rng)?;
        self.high_score = self.high_score.max(state.high_score);

        let finished = state.game_over.map(|cause| FinalScore {
            score: state.player.score,
            high_score: self.high_score,
            cause,
        });
        if finished.is_some() {
            self.phase = Phase::GameOver;
        }
        Ok(TickOutcome { events, finished })
    }

    fn set_paused(&mut self, paused: bool) {
        if let Some(state) = self.current.as_mut() {
            state.paused = paused;
        }
        self.phase = if paused { Phase::Paused } else { Phase::Playing };
    }
}
