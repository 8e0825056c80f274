//! # Local Search
//!
//! Local search refines individual candidates between generations. The solver
//! ships one algorithm, [`ConflictRepair`], which rewrites a few conflicting
//! cells with values their row, column and relations still allow. The
//! [`LocalSearchManager`] decides how the repaired candidates are used,
//! according to the run's [`OptimizationMode`].

use std::fmt::Debug;

use crate::candidate::Candidate;
use crate::puzzle::Puzzle;
use crate::rng::RandomNumberGenerator;

pub mod application;
pub mod manager;
pub mod repair;

/// A trait for local search algorithms over candidates.
pub trait LocalSearch: Debug + Send + Sync {
    /// Proposes a refined version of `candidate`.
    ///
    /// Returns `None` when the algorithm finds nothing to change. A returned
    /// candidate is freshly scored and may be worse than the input; the caller
    /// decides whether to keep it.
    fn search(
        &self,
        candidate: &Candidate,
        puzzle: &Puzzle,
        rng: &mut RandomNumberGenerator,
    ) -> Option<Candidate>;
}

// Re-export key types for convenience
pub use application::OptimizationMode;
pub use manager::{LocalSearchManager, LocalSearchReport};
pub use repair::ConflictRepair;
