use std::fmt;
use std::time::Duration;

use crate::candidate::Candidate;
use crate::puzzle::Grid;

/// Per-generation minimum, maximum and average fitness since the last restart.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessHistory {
    pub min: Vec<usize>,
    pub max: Vec<usize>,
    pub avg: Vec<f64>,
}

impl FitnessHistory {
    /// Computes the `(min, max, avg)` fitness of a population, or `None` if it is empty.
    pub fn summarize(population: &[Candidate]) -> Option<(usize, usize, f64)> {
        let min = population.iter().map(Candidate::fitness).min()?;
        let max = population.iter().map(Candidate::fitness).max()?;
        let total: usize = population.iter().map(Candidate::fitness).sum();
        Some((min, max, total as f64 / population.len() as f64))
    }

    pub fn push(&mut self, min: usize, max: usize, avg: f64) {
        self.min.push(min);
        self.max.push(max);
        self.avg.push(avg);
    }

    pub fn clear(&mut self) {
        self.min.clear();
        self.max.clear();
        self.avg.clear();
    }

    pub fn len(&self) -> usize {
        self.max.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max.is_empty()
    }
}

/// Everything reported about a finished run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct RunStatistics {
    /// Best assignment vector seen during the run.
    pub best: Vec<usize>,
    pub best_fitness: usize,
    /// The highest reachable fitness.
    pub constraint_count: usize,
    /// Whether `best` satisfies every constraint.
    pub correct: bool,
    /// `best` written into the puzzle's board.
    pub solution: Grid,
    pub generations: usize,
    pub restarts: usize,
    pub fitness_calls: usize,
    pub mutation_calls: usize,
    pub crossover_calls: usize,
    pub runtime: Duration,
    /// Fitness series of the attempt that produced `best`, up to the
    /// generation it was found, if the series was recorded.
    pub history: Option<FitnessHistory>,
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.solution)?;
        writeln!(
            f,
            "correct: {}, fitness: {}/{}",
            self.correct, self.best_fitness, self.constraint_count
        )?;
        writeln!(
            f,
            "generations: {}, restarts: {}, runtime: {:.3}s",
            self.generations,
            self.restarts,
            self.runtime.as_secs_f64()
        )?;
        write!(
            f,
            "fitness calls: {}, mutations: {}, crossovers: {}",
            self.fitness_calls, self.mutation_calls, self.crossover_calls
        )
    }
}
