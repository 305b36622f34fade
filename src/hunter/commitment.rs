//! Target commitment: the hunter locks onto the player or a food for a
//! fixed window so it does not flip-flop between equally close targets.

use super::planner::TargetCandidates;
use crate::arena::{distance, Cell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Player,
    Food,
}

/// Window lengths and the distance margin needed to change targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitmentPolicy {
    pub window_ticks: u32,
    pub refresh_ticks: u32,
    pub hysteresis: f64,
}

/// What [`TargetCommitment::advance`] did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentUpdate {
    /// First target picked after a reset.
    Acquired(TargetKind),
    Kept,
    /// Same kind, coordinates updated.
    Refreshed,
    /// Window ended and the other kind won by more than the margin.
    Switched { from: TargetKind, to: TargetKind },
    /// Window ended and the kind stayed.
    Renewed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetCommitment {
    policy: CommitmentPolicy,
    committed: Option<(TargetKind, Cell)>,
    ticks_in_window: u32,
}

impl TargetCommitment {
    pub fn new(policy: CommitmentPolicy) -> Self {
        Self {
            policy,
            committed: None,
            ticks_in_window: 0,
        }
    }

    pub fn target(&self) -> Option<Cell> {
        self.committed.map(|(_, point)| point)
    }

    pub fn kind(&self) -> Option<TargetKind> {
        self.committed.map(|(kind, _)| kind)
    }

    /// Forget the current target; the next advance picks afresh.
    pub fn reset(&mut self) {
        self.committed = None;
        self.ticks_in_window = 0;
    }

    /// Step the commitment by one tick given where everything is now.
    pub fn advance(&mut self, head: Cell, candidates: &TargetCandidates) -> CommitmentUpdate {
        let food = candidates.nearest_food(head);
        let food_distance = distance(head, food);
        let player_distance = distance(head, candidates.player);
        // Ties go to food
        let preferred = if player_distance < food_distance {
            TargetKind::Player
        } else {
            TargetKind::Food
        };

        let Some((kind, point)) = self.committed else {
            self.commit(preferred, candidates, head);
            return CommitmentUpdate::Acquired(preferred);
        };

        self.ticks_in_window += 1;
        if self.ticks_in_window >= self.policy.window_ticks {
            self.ticks_in_window = 0;
            let gap = (player_distance - food_distance).abs();
            if preferred != kind && gap > self.policy.hysteresis {
                self.commit(preferred, candidates, head);
                return CommitmentUpdate::Switched {
                    from: kind,
                    to: preferred,
                };
            }
            self.commit(kind, candidates, head);
            return CommitmentUpdate::Renewed;
        }

        let food_gone = kind == TargetKind::Food && !candidates.foods.contains(&point);
        if food_gone || self.ticks_in_window % self.policy.refresh_ticks.max(1) == 0 {
            self.commit(kind, candidates, head);
            return CommitmentUpdate::Refreshed;
        }

        CommitmentUpdate::Kept
    }

    fn commit(&mut self, kind: TargetKind, candidates: &TargetCandidates, head: Cell) {
        let point = match kind {
            TargetKind::Player => candidates.player,
            TargetKind::Food => candidates.nearest_food(head),
        };
        self.committed = Some((kind, point));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> CommitmentPolicy {
        CommitmentPolicy {
            window_ticks: 60,
            refresh_ticks: 15,
            hysteresis: 50.0,
        }
    }

    fn candidates(food: Cell, player: Cell) -> TargetCandidates {
        TargetCandidates {
            foods: [food, Cell::new(790, 590)],
            player,
        }
    }

    #[test]
    fn test_first_advance_picks_nearest_kind() {
        let head = Cell::new(100, 100);
        let mut commitment = TargetCommitment::new(policy());
        let update = commitment.advance(head, &candidates(Cell::new(400, 100), Cell::new(130, 100)));
        assert_eq!(update, CommitmentUpdate::Acquired(TargetKind::Player));
        assert_eq!(commitment.target(), Some(Cell::new(130, 100)));
    }

    #[test]
    fn test_tie_prefers_food() {
        let head = Cell::new(100, 100);
        let mut commitment = TargetCommitment::new(policy());
        commitment.advance(head, &candidates(Cell::new(150, 100), Cell::new(50, 100)));
        assert_eq!(commitment.kind(), Some(TargetKind::Food));
    }

    #[test]
    fn test_never_switches_inside_window() {
        let head = Cell::new(100, 100);
        let mut commitment = TargetCommitment::new(policy());
        commitment.advance(head, &candidates(Cell::new(110, 100), Cell::new(700, 500)));
        assert_eq!(commitment.kind(), Some(TargetKind::Food));

        // Player now much closer, but the window is still open
        let now = candidates(Cell::new(700, 100), Cell::new(110, 100));
        for tick in 1..60 {
            let update = commitment.advance(head, &now);
            assert!(
                !matches!(update, CommitmentUpdate::Switched { .. }),
                "switched at tick {}",
                tick
            );
            assert_eq!(commitment.kind(), Some(TargetKind::Food));
        }
        assert_eq!(
            commitment.advance(head, &now),
            CommitmentUpdate::Switched {
                from: TargetKind::Food,
                to: TargetKind::Player
            }
        );
        assert_eq!(commitment.target(), Some(Cell::new(110, 100)));
    }

    #[test]
    fn test_small_gap_does_not_switch_at_boundary() {
        let head = Cell::new(100, 100);
        let mut commitment = TargetCommitment::new(policy());
        commitment.advance(head, &candidates(Cell::new(130, 100), Cell::new(400, 100)));

        // Player 20 closer than food: below the margin
        let now = candidates(Cell::new(160, 100), Cell::new(140, 100));
        let mut last = CommitmentUpdate::Kept;
        for _ in 0..60 {
            last = commitment.advance(head, &now);
        }
        assert_eq!(last, CommitmentUpdate::Renewed);
        assert_eq!(commitment.kind(), Some(TargetKind::Food));
    }

    #[test]
    fn test_refreshes_on_interval() {
        let head = Cell::new(100, 100);
        let mut commitment = TargetCommitment::new(policy());
        commitment.advance(head, &candidates(Cell::new(700, 100), Cell::new(120, 100)));

        let moved = candidates(Cell::new(700, 100), Cell::new(150, 100));
        for _ in 1..15 {
            assert_eq!(commitment.advance(head, &moved), CommitmentUpdate::Kept);
            assert_eq!(commitment.target(), Some(Cell::new(120, 100)));
        }
        assert_eq!(commitment.advance(head, &moved), CommitmentUpdate::Refreshed);
        assert_eq!(commitment.target(), Some(Cell::new(150, 100)));
    }

    #[test]
    fn test_eaten_food_refreshes_immediately() {
        let head = Cell::new(100, 100);
        let mut commitment = TargetCommitment::new(policy());
        commitment.advance(head, &candidates(Cell::new(120, 100), Cell::new(700, 500)));
        assert_eq!(commitment.target(), Some(Cell::new(120, 100)));

        let respawned = candidates(Cell::new(300, 300), Cell::new(700, 500));
        assert_eq!(
            commitment.advance(head, &respawned),
            CommitmentUpdate::Refreshed
        );
        assert_eq!(commitment.target(), Some(Cell::new(300, 300)));
    }

    #[test]
    fn test_reset_forgets_target() {
        let mut commitment = TargetCommitment::new(policy());
        commitment.advance(
            Cell::new(0, 0),
            &candidates(Cell::new(10, 0), Cell::new(500, 0)),
        );
        commitment.reset();
        assert_eq!(commitment.target(), None);
        assert_eq!(commitment.kind(), None);
    }
}
