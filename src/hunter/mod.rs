//! The hunter snake's brain: target commitment, trail memory and the
//! one-step pursuit planner with junction-aware steering.

pub mod commitment;
pub mod history;
pub mod planner;
pub mod shapes;

pub use commitment::{CommitmentPolicy, CommitmentUpdate, TargetCommitment, TargetKind};
pub use history::{HunterTrail, VisitHistory};
pub use planner::{PlannerMode, PursuitInput, PursuitPlanner, ScoredMove, TargetCandidates};
