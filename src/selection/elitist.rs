use crate::candidate::Candidate;
use crate::error::{GeneticError, Result};

/// Sorts a population by fitness, best first.
///
/// The sort is stable, so candidates with equal fitness keep their relative order.
pub fn sort_by_fitness(population: &mut [Candidate]) {
    population.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
}

/// A selection strategy that carries the fittest candidates over unchanged.
///
/// # Examples
///
/// ```
/// use futoshiki_ga::candidate::Candidate;
/// use futoshiki_ga::puzzle::Puzzle;
/// use futoshiki_ga::selection::ElitistSelection;
///
/// let puzzle = Puzzle::new(2, &[], &[]).unwrap();
/// let population = vec![
///     Candidate::new(&puzzle, vec![1, 1, 1, 1]),
///     Candidate::new(&puzzle, vec![1, 2, 2, 1]),
///     Candidate::new(&puzzle, vec![1, 2, 1, 1]),
/// ];
///
/// let elites = ElitistSelection.select(&population, 2).unwrap();
/// assert_eq!(elites[0].vector(), &[1, 2, 2, 1]);
/// assert_eq!(elites[1].vector(), &[1, 2, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    /// Returns clones of the `count` fittest candidates, best first.
    ///
    /// Asking for more candidates than the population holds returns the whole
    /// population, sorted.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if candidates are requested from
    /// an empty population.
    pub fn select(&self, population: &[Candidate], count: usize) -> Result<Vec<Candidate>> {
        if population.is_empty() && count > 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut ranked: Vec<&Candidate> = population.iter().collect();
        ranked.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
        Ok(ranked.into_iter().take(count).cloned().collect())
    }
}
