//! # Candidate
//!
//! A `Candidate` is one proposed assignment to a puzzle's free cells together
//! with its fitness, the number of constraints it satisfies. The fitness is
//! computed once, when the candidate is built, and a candidate never changes
//! afterwards: mutation, crossover and repair all produce new candidates.
//!
//! ## Example
//!
//! ```rust
//! use futoshiki_ga::candidate::Candidate;
//! use futoshiki_ga::puzzle::Puzzle;
//! use futoshiki_ga::rng::RandomNumberGenerator;
//!
//! let puzzle = Puzzle::new(3, &[], &[]).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(3);
//!
//! let candidate = Candidate::random(&puzzle, &mut rng);
//! assert_eq!(candidate.vector().len(), 9);
//! assert!(candidate.fitness() <= puzzle.constraint_count());
//!
//! let latin = Candidate::try_new(&puzzle, vec![1, 2, 3, 2, 3, 1, 3, 1, 2]).unwrap();
//! assert_eq!(latin.fitness(), 18);
//! ```

use rayon::prelude::*;

use crate::error::Result;
use crate::puzzle::Puzzle;
use crate::rng::RandomNumberGenerator;

/// An assignment to the free cells of a puzzle, with its cached fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    vector: Vec<usize>,
    fitness: usize,
}

impl Candidate {
    /// Scores `vector` against `puzzle`.
    ///
    /// The vector is assumed to fit the puzzle; use [`Candidate::try_new`] for
    /// vectors coming from outside the solver.
    pub fn new(puzzle: &Puzzle, vector: Vec<usize>) -> Self {
        let fitness = puzzle.score(&vector);
        Self { vector, fitness }
    }

    /// Checks `vector` against the puzzle before scoring it.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::VectorLength` if the vector does not have one
    /// entry per free cell, or `GeneticError::ValueOutOfRange` if an entry lies
    /// outside `1..=N`.
    pub fn try_new(puzzle: &Puzzle, vector: Vec<usize>) -> Result<Self> {
        puzzle.check_vector(&vector)?;
        Ok(Self::new(puzzle, vector))
    }

    /// Samples every entry uniformly from `1..=N`.
    pub fn random(puzzle: &Puzzle, rng: &mut RandomNumberGenerator) -> Self {
        let vector = rng.random_vector(puzzle.dimension(), puzzle.solution_size());
        Self::new(puzzle, vector)
    }

    /// Scores a batch of vectors, keeping their order.
    ///
    /// Batches of at least `parallel_threshold` vectors are scored on the rayon
    /// thread pool. Scoring is a pure function of the puzzle and the vector, so
    /// the result is the same either way.
    pub fn evaluate_all(
        puzzle: &Puzzle,
        vectors: Vec<Vec<usize>>,
        parallel_threshold: usize,
    ) -> Vec<Self> {
        if vectors.len() >= parallel_threshold {
            vectors
                .into_par_iter()
                .map(|vector| Self::new(puzzle, vector))
                .collect()
        } else {
            vectors
                .into_iter()
                .map(|vector| Self::new(puzzle, vector))
                .collect()
        }
    }

    /// Samples `size` random vectors and scores them as one batch.
    pub fn random_population(
        puzzle: &Puzzle,
        size: usize,
        rng: &mut RandomNumberGenerator,
        parallel_threshold: usize,
    ) -> Vec<Self> {
        let vectors = (0..size)
            .map(|_| rng.random_vector(puzzle.dimension(), puzzle.solution_size()))
            .collect();
        Self::evaluate_all(puzzle, vectors, parallel_threshold)
    }

    pub fn vector(&self) -> &[usize] {
        &self.vector
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn into_vector(self) -> Vec<usize> {
        self.vector
    }
}
