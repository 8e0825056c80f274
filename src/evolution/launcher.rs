use std::time::Instant;

use tracing::{debug, info};

use super::{
    cancel::CancellationToken,
    options::{EvolutionOptions, LogLevel, PROGRESS_INTERVAL},
    statistics::{FitnessHistory, RunStatistics},
};
use crate::{
    breeding::{mutate, single_point_crossover},
    candidate::Candidate,
    error::{GeneticError, OptionExt, Result},
    local_search::{ConflictRepair, LocalSearchManager},
    puzzle::Puzzle,
    rng::RandomNumberGenerator,
    selection::{sort_by_fitness, BiasedPool, ElitistSelection},
};

/// How a run ended.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Solved,
    Exhausted,
    Cancelled,
}

/// The outcome of an evolution run.
///
/// A cancelled run reports no statistics.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionResult {
    /// A candidate satisfying every constraint was found.
    Solved(RunStatistics),
    /// The generation limit was reached first.
    Exhausted(RunStatistics),
    Cancelled,
}

impl EvolutionResult {
    pub fn status(&self) -> RunStatus {
        match self {
            EvolutionResult::Solved(_) => RunStatus::Solved,
            EvolutionResult::Exhausted(_) => RunStatus::Exhausted,
            EvolutionResult::Cancelled => RunStatus::Cancelled,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, EvolutionResult::Solved(_))
    }

    pub fn statistics(&self) -> Option<&RunStatistics> {
        match self {
            EvolutionResult::Solved(stats) | EvolutionResult::Exhausted(stats) => Some(stats),
            EvolutionResult::Cancelled => None,
        }
    }

    pub fn into_statistics(self) -> Option<RunStatistics> {
        match self {
            EvolutionResult::Solved(stats) | EvolutionResult::Exhausted(stats) => Some(stats),
            EvolutionResult::Cancelled => None,
        }
    }
}

/// Operator call counts of one run.
#[derive(Debug, Default)]
struct Counters {
    fitness: usize,
    mutation: usize,
    crossover: usize,
}

/// Mutable state of one run.
struct Run {
    population: Vec<Candidate>,
    best: Option<Candidate>,
    /// Series since the last restart.
    history: FitnessHistory,
    /// Copy of `history` taken when `best` last improved.
    best_history: FitnessHistory,
    record_history: bool,
    counters: Counters,
    generation: usize,
    restarts: usize,
}

impl Run {
    /// Keeps `candidate` as the best-ever record if it is strictly fitter.
    fn offer(&mut self, candidate: &Candidate) {
        let better = self
            .best
            .as_ref()
            .map_or(true, |best| candidate.fitness() > best.fitness());
        if better {
            self.best = Some(candidate.clone());
            if self.record_history {
                self.best_history = self.history.clone();
            }
        }
    }

    fn best_fitness(&self) -> usize {
        self.best.as_ref().map_or(0, Candidate::fitness)
    }
}

/// Evolves candidate solutions for a single puzzle.
///
/// # Example
///
/// ```rust
/// use futoshiki_ga::evolution::{EvolutionLauncher, EvolutionOptions};
/// use futoshiki_ga::puzzle::Puzzle;
/// use futoshiki_ga::rng::RandomNumberGenerator;
///
/// let puzzle = Puzzle::new(3, &[(1, 1, 1)], &[(2, 1, 3, 1)]).unwrap();
/// let options = EvolutionOptions::builder()
///     .num_generations(50)
///     .population_size(30)
///     .build();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let result = EvolutionLauncher::new(puzzle).evolve(&options, &mut rng).unwrap();
/// let stats = result.statistics().unwrap();
/// assert!(stats.best_fitness <= stats.constraint_count);
/// assert_eq!(stats.correct, result.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionLauncher {
    puzzle: Puzzle,
}

impl EvolutionLauncher {
    pub fn new(puzzle: Puzzle) -> Self {
        Self { puzzle }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Runs the genetic algorithm until the puzzle is solved or the generation
    /// limit is reached.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options do not validate.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_with_cancel(options, rng, &CancellationToken::new())
    }

    /// Like [`EvolutionLauncher::evolve`], but stops with
    /// [`EvolutionResult::Cancelled`] once `token` is cancelled.
    ///
    /// Each generation:
    ///
    /// 1. records the min, max and average fitness,
    /// 2. applies the local optimization mode,
    /// 3. sorts the population and updates the best-ever candidate,
    /// 4. stops if the best candidate satisfies every constraint,
    /// 5. restarts from a fresh random population if every candidate had the
    ///    same fitness,
    /// 6. otherwise breeds the next generation from elites, crossover children
    ///    and replicated survivors, all non-elites going through mutation.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options do not validate.
    pub fn evolve_with_cancel(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        token: &CancellationToken,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let start = Instant::now();
        let puzzle = &self.puzzle;
        let log_level = options.get_log_level();
        let manager = LocalSearchManager::new(ConflictRepair, options.get_optimization());

        let mut run = Run {
            population: self.random_population(options, rng),
            best: None,
            history: FitnessHistory::default(),
            best_history: FitnessHistory::default(),
            record_history: options.get_record_history(),
            counters: Counters::default(),
            generation: 0,
            restarts: 0,
        };
        run.counters.fitness += options.get_population_size();

        let mut solved = false;
        while run.generation < options.get_num_generations() {
            if token.is_cancelled() {
                if log_level != LogLevel::None {
                    info!(generation = run.generation, "Evolution cancelled");
                }
                return Ok(EvolutionResult::Cancelled);
            }

            run.generation += 1;
            let (min, max, avg) = FitnessHistory::summarize(&run.population)
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            if run.record_history {
                run.history.push(min, max, avg);
            }

            let report = manager.apply(&mut run.population, puzzle, rng)?;
            run.counters.fitness += report.evaluations;
            if let Some(champion) = &report.champion {
                run.offer(champion);
            }

            sort_by_fitness(&mut run.population);
            if let Some(top) = run.population.first().cloned() {
                run.offer(&top);
            }

            if log_level == LogLevel::Verbose {
                debug!(
                    generation = run.generation,
                    min,
                    max,
                    avg,
                    best = run.best_fitness(),
                    "Generation evaluated"
                );
            }
            if log_level != LogLevel::None && run.generation % PROGRESS_INTERVAL == 0 {
                info!(
                    generation = run.generation,
                    worst = min,
                    average = avg,
                    best = max,
                    best_ever = run.best_fitness(),
                    fitness_calls = run.counters.fitness,
                    "Progress"
                );
            }

            if run.best_fitness() == puzzle.constraint_count() {
                if log_level != LogLevel::None {
                    info!(generation = run.generation, "A legal solution has been found");
                }
                solved = true;
                break;
            }

            if max == min {
                if log_level != LogLevel::None {
                    info!(
                        generation = run.generation,
                        restarts = run.restarts + 1,
                        "Population converged, restarting"
                    );
                }
                run.restarts += 1;
                run.history.clear();
                run.population = self.random_population(options, rng);
                run.counters.fitness += options.get_population_size();
                continue;
            }

            let population = std::mem::take(&mut run.population);
            run.population = self.next_generation(population, options, rng, &mut run.counters)?;
        }

        let stats = self.statistics(run, options, start)?;
        Ok(if solved {
            EvolutionResult::Solved(stats)
        } else {
            EvolutionResult::Exhausted(stats)
        })
    }

    fn random_population(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<Candidate> {
        Candidate::random_population(
            &self.puzzle,
            options.get_population_size(),
            rng,
            options.get_parallel_threshold(),
        )
    }

    /// Breeds the next generation from a population sorted best first.
    fn next_generation(
        &self,
        population: Vec<Candidate>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        counters: &mut Counters,
    ) -> Result<Vec<Candidate>> {
        let puzzle = &self.puzzle;
        let threshold = options.get_parallel_threshold();

        let elites = ElitistSelection.select(&population, options.elite_count())?;
        let mut pool = BiasedPool::new(&population, rng);

        let children: Vec<Vec<usize>> = (0..options.newborn_count())
            .map(|_| {
                let (i, j) = pool.sample_pair(rng);
                single_point_crossover(population[i].vector(), population[j].vector(), rng)
            })
            .collect();
        counters.crossover += children.len();
        counters.fitness += children.len();
        let newborns = Candidate::evaluate_all(puzzle, children, threshold);

        let survivors: Vec<Candidate> = (0..options.survivor_count())
            .map(|_| population[pool.take(rng)].clone())
            .collect();

        let non_elites: Vec<Candidate> = survivors.into_iter().chain(newborns).collect();
        let mutant_vectors: Vec<Vec<usize>> = non_elites
            .iter()
            .map(|candidate| mutate(candidate.vector(), puzzle.dimension(), rng))
            .collect();
        counters.mutation += mutant_vectors.len();
        counters.fitness += mutant_vectors.len();
        let mutants = Candidate::evaluate_all(puzzle, mutant_vectors, threshold);

        let mut next = elites;
        next.extend(
            non_elites
                .into_iter()
                .zip(mutants)
                .map(|(original, mutant)| {
                    if mutant.fitness() > original.fitness() {
                        mutant
                    } else {
                        original
                    }
                }),
        );
        Ok(next)
    }

    fn statistics(
        &self,
        run: Run,
        options: &EvolutionOptions,
        start: Instant,
    ) -> Result<RunStatistics> {
        let best = run
            .best
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        let best_fitness = best.fitness();
        let best = best.into_vector();

        Ok(RunStatistics {
            correct: self.puzzle.is_valid(&best),
            solution: self.puzzle.materialize(&best),
            best,
            best_fitness,
            constraint_count: self.puzzle.constraint_count(),
            generations: run.generation,
            restarts: run.restarts,
            fitness_calls: run.counters.fitness,
            mutation_calls: run.counters.mutation,
            crossover_calls: run.counters.crossover,
            runtime: start.elapsed(),
            history: options.get_record_history().then_some(run.best_history),
        })
    }
}
