//! A genetic-algorithm solver for Futoshiki puzzles.
//!
//! A [`Puzzle`] is evolved by an [`EvolutionLauncher`]: a population of
//! candidate assignments is scored, optionally refined by local search, and
//! bred through elitism, fitness-biased crossover and mutation until a
//! candidate satisfies every constraint or the generation limit is reached.
//!
//! ```rust
//! use futoshiki_ga::{EvolutionLauncher, EvolutionOptions, Puzzle, RandomNumberGenerator};
//!
//! let puzzle: Puzzle = "3\n1\n1 1 2\n1\n2 1 2 2\n".parse().unwrap();
//! let options = EvolutionOptions::builder()
//!     .num_generations(100)
//!     .population_size(40)
//!     .build();
//! let mut rng = RandomNumberGenerator::from_seed(7);
//!
//! let result = EvolutionLauncher::new(puzzle).evolve(&options, &mut rng).unwrap();
//! if let Some(stats) = result.statistics() {
//!     println!("{}", stats);
//! }
//! ```

pub mod breeding;
pub mod candidate;
pub mod error;
pub mod evolution;
pub mod local_search;
pub mod puzzle;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use candidate::Candidate;
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    CancellationToken, EvolutionLauncher, EvolutionOptions, EvolutionResult, LogLevel,
    RunStatistics, RunStatus,
};
pub use local_search::OptimizationMode;
pub use puzzle::{Grid, Puzzle};
pub use rng::RandomNumberGenerator;
