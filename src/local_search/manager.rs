//! # Local Search Manager
//!
//! This module coordinates the application of a local search algorithm during
//! the evolutionary process. The manager decides which candidates are refined
//! and whether the refined versions enter the population, according to the
//! configured [`OptimizationMode`].

use crate::candidate::Candidate;
use crate::error::{GeneticError, Result};
use crate::local_search::application::OptimizationMode;
use crate::local_search::LocalSearch;
use crate::puzzle::Puzzle;
use crate::rng::RandomNumberGenerator;

/// Share of the population refined in Lamarckian mode, as a fraction `num / den`.
const LAMARCK_SHARE: (usize, usize) = (4, 5);

/// Outcome of one local search pass over a population.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalSearchReport {
    /// Number of refined candidates that were scored.
    pub evaluations: usize,
    /// The fittest refined candidate of a Darwinian pass.
    pub champion: Option<Candidate>,
}

/// A manager for coordinating the application of local search during evolution.
#[derive(Debug, Clone)]
pub struct LocalSearchManager<L>
where
    L: LocalSearch,
{
    /// The local search algorithm to apply.
    algorithm: L,
    /// How refined candidates are used.
    mode: OptimizationMode,
}

impl<L> LocalSearchManager<L>
where
    L: LocalSearch,
{
    /// Creates a new local search manager.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - The local search algorithm to apply.
    /// * `mode` - How refined candidates feed back into the population.
    pub fn new(algorithm: L, mode: OptimizationMode) -> Self {
        Self { algorithm, mode }
    }

    /// Applies local search to the population.
    ///
    /// * `Lamarck` refines a random 80% of the population (rounded down) and
    ///   writes each refined candidate back in place of its original.
    /// * `Darwin` refines every candidate into a scratch copy and reports the
    ///   fittest one as the champion; the population is not modified.
    /// * `None` does nothing.
    ///
    /// Candidates the algorithm leaves alone are kept as they are.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if a Lamarckian or Darwinian
    /// pass is requested over an empty population.
    pub fn apply(
        &self,
        population: &mut [Candidate],
        puzzle: &Puzzle,
        rng: &mut RandomNumberGenerator,
    ) -> Result<LocalSearchReport> {
        if self.mode != OptimizationMode::None && population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        match self.mode {
            OptimizationMode::None => Ok(LocalSearchReport::default()),
            OptimizationMode::Lamarck => Ok(self.apply_lamarck(population, puzzle, rng)),
            OptimizationMode::Darwin => Ok(self.apply_darwin(population, puzzle, rng)),
        }
    }

    fn apply_lamarck(
        &self,
        population: &mut [Candidate],
        puzzle: &Puzzle,
        rng: &mut RandomNumberGenerator,
    ) -> LocalSearchReport {
        let mut indices: Vec<usize> = (0..population.len()).collect();
        rng.shuffle(&mut indices);
        let count = population.len() * LAMARCK_SHARE.0 / LAMARCK_SHARE.1;

        let mut evaluations = 0;
        for &idx in indices.iter().take(count) {
            if let Some(refined) = self.algorithm.search(&population[idx], puzzle, rng) {
                evaluations += 1;
                population[idx] = refined;
            }
        }

        LocalSearchReport {
            evaluations,
            champion: None,
        }
    }

    fn apply_darwin(
        &self,
        population: &[Candidate],
        puzzle: &Puzzle,
        rng: &mut RandomNumberGenerator,
    ) -> LocalSearchReport {
        let mut evaluations = 0;
        let mut champion: Option<Candidate> = None;

        for candidate in population {
            let refined = match self.algorithm.search(candidate, puzzle, rng) {
                Some(refined) => {
                    evaluations += 1;
                    refined
                }
                None => candidate.clone(),
            };
            let better = champion
                .as_ref()
                .map_or(true, |best| refined.fitness() > best.fitness());
            if better {
                champion = Some(refined);
            }
        }

        LocalSearchReport {
            evaluations,
            champion,
        }
    }

    pub fn mode(&self) -> OptimizationMode {
        self.mode
    }
}
