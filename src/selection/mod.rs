//! # Selection
//!
//! Selection decides which candidates shape the next generation. Elites are
//! carried over unchanged; parents for crossover and survivors for replication
//! are drawn from a fitness-weighted [`BiasedPool`].
pub mod biased_pool;
pub mod elitist;

pub use biased_pool::BiasedPool;
pub use elitist::{sort_by_fitness, ElitistSelection};
