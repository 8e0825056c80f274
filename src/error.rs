//! # Error Types
//!
//! This module defines the error type shared by every part of the solver.
//! Configuration problems are reported before an evolution run starts, while
//! malformed puzzles are rejected when the puzzle is built. Inside the
//! evolution loop only contract violations (an empty population, a vector of
//! the wrong length) can surface, and those are propagated rather than hidden.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use futoshiki_ga::error::{GeneticError, Result};
//!
//! fn check_dimension(dim: usize) -> Result<usize> {
//!     if dim == 0 {
//!         return Err(GeneticError::InvalidPuzzle("dimension must be positive".to_string()));
//!     }
//!     Ok(dim)
//! }
//!
//! assert!(check_dimension(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use futoshiki_ga::error::{GeneticError, OptionExt};
//!
//! fn best_fitness(scores: &[usize]) -> futoshiki_ga::error::Result<usize> {
//!     scores.iter().max().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert!(best_fitness(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building puzzles or evolving solutions.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a puzzle description is malformed or out of range.
    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a candidate vector does not cover the free cells exactly.
    #[error("Vector length mismatch: expected {expected} values, got {actual}")]
    VectorLength { expected: usize, actual: usize },

    /// Error that occurs when a candidate holds a value outside `1..=dimension`.
    #[error("Value {value} at position {position} is outside of 1..={dimension}")]
    ValueOutOfRange {
        position: usize,
        value: usize,
        dimension: usize,
    },
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
