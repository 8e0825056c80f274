use crate::candidate::Candidate;
use crate::rng::RandomNumberGenerator;

/// A fitness-weighted multiset of population indices.
///
/// Candidate `i` appears `fitness(i)` times, so drawing a uniform entry selects
/// candidates with probability proportional to their fitness, without any
/// cumulative-probability bookkeeping. Candidates with zero fitness never
/// appear. The entries are shuffled once at construction.
///
/// When the pool cannot serve a draw (it is empty, or holds fewer than two
/// entries for a pair) selection falls back to uniform sampling over the whole
/// population, so a generation is never left short.
///
/// # Examples
///
/// ```
/// use futoshiki_ga::candidate::Candidate;
/// use futoshiki_ga::puzzle::Puzzle;
/// use futoshiki_ga::rng::RandomNumberGenerator;
/// use futoshiki_ga::selection::BiasedPool;
///
/// let puzzle = Puzzle::new(2, &[], &[]).unwrap();
/// let population = vec![
///     Candidate::new(&puzzle, vec![1, 1, 1, 1]), // fitness 0
///     Candidate::new(&puzzle, vec![1, 2, 2, 1]), // fitness 8
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(0);
///
/// let mut pool = BiasedPool::new(&population, &mut rng);
/// assert_eq!(pool.len(), 8);
/// assert_eq!(pool.take(&mut rng), 1);
/// assert!(pool.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct BiasedPool {
    entries: Vec<usize>,
    population_size: usize,
}

impl BiasedPool {
    /// Builds the pool for `population`, which must not be empty.
    pub fn new(population: &[Candidate], rng: &mut RandomNumberGenerator) -> Self {
        debug_assert!(!population.is_empty());
        let mut entries: Vec<usize> = population
            .iter()
            .enumerate()
            .flat_map(|(idx, candidate)| std::iter::repeat(idx).take(candidate.fitness()))
            .collect();
        rng.shuffle(&mut entries);

        Self {
            entries,
            population_size: population.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Draws two parents from two distinct pool entries.
    ///
    /// Both entries may point at the same candidate when it dominates the pool.
    pub fn sample_pair(&self, rng: &mut RandomNumberGenerator) -> (usize, usize) {
        match rng.distinct_pair(self.entries.len()) {
            Some((i, j)) => (self.entries[i], self.entries[j]),
            None => rng
                .distinct_pair(self.population_size)
                .unwrap_or((0, 0)),
        }
    }

    /// Draws one candidate and removes every entry pointing at it.
    pub fn take(&mut self, rng: &mut RandomNumberGenerator) -> usize {
        match rng.choose(&self.entries).copied() {
            Some(picked) => {
                self.entries.retain(|&idx| idx != picked);
                picked
            }
            None => rng.gen_index(self.population_size),
        }
    }
}
