pub mod cancel;
pub mod launcher;
pub mod options;
pub mod statistics;

pub use cancel::CancellationToken;
pub use launcher::{EvolutionLauncher, EvolutionResult, RunStatus};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use statistics::{FitnessHistory, RunStatistics};
