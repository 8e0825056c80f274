//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one evolution
//! run: the generation limit, the population size, the elitism and crossover
//! rates, the local optimization mode, whether the fitness series is recorded,
//! the logging level and the batch size from which scoring runs in parallel.
//!
//! ## Example
//!
//! ```rust
//! use futoshiki_ga::evolution::options::{EvolutionOptions, LogLevel};
//! use futoshiki_ga::local_search::OptimizationMode;
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 50, 0.1, 0.6, OptimizationMode::Lamarck);
//! assert!(custom_options.validate().is_ok());
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_num_generations(), 5000);
//! assert_eq!(default_options.get_population_size(), 100);
//! ```
//!
//! ## Population layout
//!
//! Every generation holds exactly `population_size` candidates:
//!
//! - `elite_count = floor(elitism * population_size)` carried over unchanged,
//! - `newborn_count = min(floor(crossover * population_size), population_size - elite_count)`
//!   children produced by crossover,
//! - `survivor_count`, the remainder, replicated from the biased pool.
//!
//! ### `LogLevel`
//!
//! - `Verbose`: a `debug` event every generation on top of `Minimal`.
//! - `Minimal`: an `info` progress event every 10 generations, plus restarts
//!   and the final outcome.
//! - `None`: no events.

use crate::error::{GeneticError, Result};
use crate::local_search::OptimizationMode;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

/// Generations between two progress events.
pub const PROGRESS_INTERVAL: usize = 10;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    population_size: usize,
    /// Fraction of the population carried over unchanged.
    elitism: f64,
    /// Fraction of the population produced by crossover.
    crossover: f64,
    optimization: OptimizationMode,
    /// Whether the per-generation min/max/average series is kept.
    record_history: bool,
    log_level: LogLevel,
    /// Minimum number of candidates to score in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        population_size: usize,
        elitism: f64,
        crossover: f64,
        optimization: OptimizationMode,
    ) -> Self {
        Self {
            num_generations,
            population_size,
            elitism,
            crossover,
            optimization,
            ..Self::default()
        }
    }

    /// Checks the options before a run starts.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the generation limit or the
    /// population size is zero, or if the elitism or crossover rate is not a
    /// number in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.num_generations == 0 {
            return Err(GeneticError::Configuration(
                "Number of generations cannot be zero".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        for (name, rate) in [("Elitism", self.elitism), ("Crossover", self.crossover)] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} rate must lie in [0, 1], got {}",
                    name, rate
                )));
            }
        }
        Ok(())
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        (self.elitism * self.population_size as f64).floor() as usize
    }

    /// Number of children bred by crossover each generation.
    pub fn newborn_count(&self) -> usize {
        let wanted = (self.crossover * self.population_size as f64).floor() as usize;
        wanted.min(self.population_size - self.elite_count().min(self.population_size))
    }

    /// Number of candidates replicated from the biased pool each generation.
    pub fn survivor_count(&self) -> usize {
        self.population_size
            .saturating_sub(self.elite_count())
            .saturating_sub(self.newborn_count())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_elitism(&self) -> f64 {
        self.elitism
    }

    pub fn get_crossover(&self) -> f64 {
        self.crossover
    }

    pub fn get_optimization(&self) -> OptimizationMode {
        self.optimization
    }

    pub fn get_record_history(&self) -> bool {
        self.record_history
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Returns the minimum number of candidates to score in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_elitism(&mut self, elitism: f64) {
        self.elitism = elitism;
    }

    pub fn set_crossover(&mut self, crossover: f64) {
        self.crossover = crossover;
    }

    pub fn set_optimization(&mut self, optimization: OptimizationMode) {
        self.optimization = optimization;
    }

    pub fn set_record_history(&mut self, record_history: bool) {
        self.record_history = record_history;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Fields left unset keep their default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use futoshiki_ga::evolution::options::{EvolutionOptions, LogLevel};
    /// use futoshiki_ga::local_search::OptimizationMode;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .population_size(50)
    ///     .elitism(0.1)
    ///     .crossover(0.6)
    ///     .optimization(OptimizationMode::Darwin)
    ///     .record_history(true)
    ///     .log_level(LogLevel::Minimal)
    ///     .parallel_threshold(500)
    ///     .build();
    ///
    /// assert_eq!(options.elite_count(), 5);
    /// assert_eq!(options.newborn_count(), 30);
    /// assert_eq!(options.survivor_count(), 15);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 5000,
            population_size: 100,
            elitism: 0.01,
            crossover: 0.8,
            optimization: OptimizationMode::None,
            record_history: false,
            log_level: LogLevel::None,
            parallel_threshold: 1000, // Default parallel threshold
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    population_size: Option<usize>,
    elitism: Option<f64>,
    crossover: Option<f64>,
    optimization: Option<OptimizationMode>,
    record_history: Option<bool>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the elitism rate.
    pub fn elitism(mut self, value: f64) -> Self {
        self.elitism = Some(value);
        self
    }

    /// Sets the crossover rate.
    pub fn crossover(mut self, value: f64) -> Self {
        self.crossover = Some(value);
        self
    }

    /// Sets the local optimization mode.
    pub fn optimization(mut self, value: OptimizationMode) -> Self {
        self.optimization = Some(value);
        self
    }

    /// Sets whether the fitness series is recorded.
    pub fn record_history(mut self, value: bool) -> Self {
        self.record_history = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            elitism: self.elitism.unwrap_or(defaults.elitism),
            crossover: self.crossover.unwrap_or(defaults.crossover),
            optimization: self.optimization.unwrap_or(defaults.optimization),
            record_history: self.record_history.unwrap_or(defaults.record_history),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EvolutionOptions::default();
        assert_eq!(options.get_num_generations(), 5000);
        assert_eq!(options.get_population_size(), 100);
        assert_eq!(options.get_elitism(), 0.01);
        assert_eq!(options.get_crossover(), 0.8);
        assert_eq!(options.get_optimization(), OptimizationMode::None);
        assert!(!options.get_record_history());
        assert_eq!(options.get_log_level(), LogLevel::None);
        assert_eq!(options.get_parallel_threshold(), 1000);
        assert_eq!(EvolutionOptions::builder().build(), options);
    }

    #[test]
    fn test_population_layout() {
        let options = EvolutionOptions::default();
        assert_eq!(options.elite_count(), 1);
        assert_eq!(options.newborn_count(), 80);
        assert_eq!(options.survivor_count(), 19);

        // Elites and newborns never outgrow the population.
        let crowded = EvolutionOptions::new(10, 10, 0.5, 0.9, OptimizationMode::None);
        assert_eq!(crowded.elite_count(), 5);
        assert_eq!(crowded.newborn_count(), 5);
        assert_eq!(crowded.survivor_count(), 0);

        let single = EvolutionOptions::new(10, 1, 0.01, 0.8, OptimizationMode::None);
        assert_eq!(single.elite_count(), 0);
        assert_eq!(single.newborn_count(), 0);
        assert_eq!(single.survivor_count(), 1);
    }

    #[test]
    fn test_validate() {
        assert!(EvolutionOptions::default().validate().is_ok());

        let mut options = EvolutionOptions::default();
        options.set_population_size(0);
        match options.validate() {
            Err(GeneticError::Configuration(msg)) => {
                assert_eq!(msg, "Population size cannot be zero")
            }
            other => panic!("Expected a configuration error, got {:?}", other),
        }

        let mut options = EvolutionOptions::default();
        options.set_num_generations(0);
        assert!(options.validate().is_err());

        for rate in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let mut options = EvolutionOptions::default();
            options.set_elitism(rate);
            assert!(options.validate().is_err());

            let mut options = EvolutionOptions::default();
            options.set_crossover(rate);
            assert!(options.validate().is_err());
        }
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::default();
        options.set_optimization(OptimizationMode::Lamarck);
        options.set_record_history(true);
        options.set_log_level(LogLevel::Verbose);
        options.set_parallel_threshold(8);
        assert_eq!(options.get_optimization(), OptimizationMode::Lamarck);
        assert!(options.get_record_history());
        assert_eq!(options.get_log_level(), LogLevel::Verbose);
        assert_eq!(options.get_parallel_threshold(), 8);
    }
}
