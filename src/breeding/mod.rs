//! # Breeding Operators
//!
//! Operators that derive new assignment vectors from existing ones. They work
//! on plain vectors and only ever touch vector positions, so given cells can
//! never be altered. Scoring the resulting vectors is left to the caller,
//! which lets the evolution loop score whole batches at once.
pub mod crossover;
pub mod mutation;

pub use crossover::single_point_crossover;
pub use mutation::{mutate, MutationTactic};
