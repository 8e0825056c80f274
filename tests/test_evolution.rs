use std::thread;
use std::time::Duration;

use futoshiki_ga::{
    error::GeneticError,
    evolution::{CancellationToken, EvolutionLauncher, EvolutionOptions, LogLevel, RunStatus},
    local_search::OptimizationMode,
    puzzle::{Grid, Puzzle},
    rng::RandomNumberGenerator,
    RunStatistics,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// (1,1) holds 1, (1,2) holds 3, yet (1,1) must exceed (1,2).
fn contradictory_puzzle() -> Puzzle {
    Puzzle::new(3, &[(1, 1, 1), (1, 2, 3)], &[(1, 1, 1, 2)]).unwrap()
}

fn is_latin_square(grid: &Grid) -> bool {
    let n = grid.dimension();
    let full = |values: Vec<usize>| {
        let mut values = values;
        values.sort_unstable();
        values == (1..=n).collect::<Vec<_>>()
    };
    (0..n).all(|r| full((0..n).map(|c| grid.get(r, c)).collect()))
        && (0..n).all(|c| full((0..n).map(|r| grid.get(r, c)).collect()))
}

fn run(puzzle: &Puzzle, options: &EvolutionOptions, seed: u64) -> (RunStatus, Option<RunStatistics>) {
    let mut rng = RandomNumberGenerator::from_seed(seed);
    let result = EvolutionLauncher::new(puzzle.clone())
        .evolve(options, &mut rng)
        .unwrap();
    (result.status(), result.into_statistics())
}

#[test]
fn test_empty_four_by_four_solved() {
    let puzzle = Puzzle::new(4, &[], &[]).unwrap();
    assert_eq!(puzzle.constraint_count(), 32);

    let options = EvolutionOptions::new(200, 50, 0.1, 0.6, OptimizationMode::None);
    let (status, stats) = run(&puzzle, &options, 0);
    let stats = stats.unwrap();

    assert_eq!(status, RunStatus::Solved);
    assert!(stats.correct);
    assert_eq!(stats.best_fitness, 32);
    assert!(stats.generations <= 200);
    assert!(is_latin_square(&stats.solution));
}

#[test]
fn test_lamarck_solves_with_givens_and_relations() {
    let puzzle: Puzzle = "5
3
1 1 3
3 3 1
5 2 4
3
1 2 1 3
2 4 2 5
4 1 5 1
"
    .parse()
    .unwrap();

    let options = EvolutionOptions::builder()
        .num_generations(500)
        .population_size(60)
        .elitism(0.05)
        .crossover(0.7)
        .optimization(OptimizationMode::Lamarck)
        .build();

    let solved = (0..10).any(|seed| {
        let (status, stats) = run(&puzzle, &options, seed);
        let stats = stats.unwrap();
        if status == RunStatus::Solved {
            assert!(puzzle.is_valid(&stats.best));
            assert_eq!(stats.solution.get(0, 0), 3);
            assert_eq!(stats.solution.get(2, 2), 1);
            assert_eq!(stats.solution.get(4, 1), 4);
        }
        status == RunStatus::Solved
    });
    assert!(solved);
}

#[test]
fn test_contradictory_puzzle_never_solved() {
    let puzzle = contradictory_puzzle();
    for mode in [
        OptimizationMode::None,
        OptimizationMode::Lamarck,
        OptimizationMode::Darwin,
    ] {
        let options = EvolutionOptions::new(40, 20, 0.1, 0.6, mode);
        let (status, stats) = run(&puzzle, &options, 11);
        let stats = stats.unwrap();

        assert_eq!(status, RunStatus::Exhausted);
        assert!(stats.best_fitness < stats.constraint_count);
        assert!(!stats.correct);
        assert_eq!(stats.generations, 40);
        assert_eq!(stats.solution.get(0, 0), 1);
        assert_eq!(stats.solution.get(0, 1), 3);
    }
}

#[test]
fn test_population_of_one_restarts_every_generation() {
    let options = EvolutionOptions::builder()
        .num_generations(25)
        .population_size(1)
        .record_history(true)
        .build();
    let (status, stats) = run(&contradictory_puzzle(), &options, 3);
    let stats = stats.unwrap();

    assert_eq!(status, RunStatus::Exhausted);
    assert_eq!(stats.generations, 25);
    assert_eq!(stats.restarts, 25);
    assert_eq!(stats.crossover_calls, 0);
    assert_eq!(stats.mutation_calls, 0);
    assert_eq!(stats.fitness_calls, 26);
    // The live series is cleared by every restart, but the attempt that set
    // the best record keeps its one generation.
    let history = stats.history.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history.min[0], history.max[0]);
    assert_eq!(history.max[0], stats.best_fitness);
}

#[test]
fn test_elites_take_whole_population() {
    for size in [1, 2] {
        let options = EvolutionOptions::builder()
            .num_generations(30)
            .population_size(size)
            .elitism(1.0)
            .build();
        let (status, stats) = run(&contradictory_puzzle(), &options, 5);
        let stats = stats.unwrap();

        assert_eq!(status, RunStatus::Exhausted);
        assert_eq!(stats.generations, 30);
        assert_eq!(stats.crossover_calls, 0);
        assert_eq!(stats.mutation_calls, 0);
        assert_eq!(stats.fitness_calls, size * (1 + stats.restarts));
    }
}

#[test]
fn test_call_counters_consistent() {
    let options = EvolutionOptions::new(60, 30, 0.1, 0.6, OptimizationMode::None);
    let (_, stats) = run(&contradictory_puzzle(), &options, 8);
    let stats = stats.unwrap();

    let bred = stats.generations - stats.restarts;
    assert_eq!(stats.crossover_calls, bred * options.newborn_count());
    assert_eq!(
        stats.mutation_calls,
        bred * (options.get_population_size() - options.elite_count())
    );
    assert_eq!(
        stats.fitness_calls,
        options.get_population_size() * (1 + stats.restarts)
            + stats.crossover_calls
            + stats.mutation_calls
    );
}

#[test]
fn test_history_recorded_only_on_request() {
    let puzzle = Puzzle::new(5, &[(1, 1, 1)], &[(2, 2, 3, 3)]).unwrap();
    let mut options = EvolutionOptions::new(30, 40, 0.05, 0.8, OptimizationMode::None);

    let (_, stats) = run(&puzzle, &options, 4);
    assert!(stats.unwrap().history.is_none());

    options.set_record_history(true);
    let (_, stats) = run(&puzzle, &options, 4);
    let stats = stats.unwrap();
    let history = stats.history.unwrap();
    assert!(!history.is_empty());
    assert!(history.len() <= stats.generations);
    assert!(history.max.iter().all(|&max| max <= stats.best_fitness));
    for i in 0..history.len() {
        assert!(history.min[i] <= history.max[i]);
        assert!(history.avg[i] >= history.min[i] as f64);
        assert!(history.avg[i] <= history.max[i] as f64);
    }
}

#[test]
fn test_same_seed_same_run() {
    let puzzle = Puzzle::new(4, &[(2, 2, 3)], &[(1, 1, 1, 2), (4, 3, 4, 4)]).unwrap();
    let mut options = EvolutionOptions::new(80, 30, 0.1, 0.6, OptimizationMode::Darwin);

    let (status_a, a) = run(&puzzle, &options, 99);
    options.set_parallel_threshold(1);
    let (status_b, b) = run(&puzzle, &options, 99);
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(status_a, status_b);
    assert_eq!(a.best, b.best);
    assert_eq!(a.generations, b.generations);
    assert_eq!(a.restarts, b.restarts);
    assert_eq!(a.fitness_calls, b.fitness_calls);
    assert_eq!(a.mutation_calls, b.mutation_calls);
    assert_eq!(a.crossover_calls, b.crossover_calls);
}

#[test]
fn test_cancel_from_another_thread() {
    let launcher = EvolutionLauncher::new(contradictory_puzzle());
    let options = EvolutionOptions::builder()
        .num_generations(usize::MAX)
        .population_size(20)
        .build();
    let token = CancellationToken::new();

    let remote = token.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        remote.cancel();
    });

    let mut rng = RandomNumberGenerator::from_seed(1);
    let result = launcher.evolve_with_cancel(&options, &mut rng, &token).unwrap();
    canceller.join().unwrap();

    assert_eq!(result.status(), RunStatus::Cancelled);
    assert!(result.statistics().is_none());
}

#[test]
fn test_invalid_options() {
    let launcher = EvolutionLauncher::new(contradictory_puzzle());
    let mut rng = RandomNumberGenerator::from_seed(1);

    let options = EvolutionOptions::builder().elitism(1.5).build();
    match launcher.evolve(&options, &mut rng) {
        Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Elitism")),
        other => panic!("Expected a configuration error, got {:?}", other),
    }

    let options = EvolutionOptions::builder().num_generations(0).build();
    assert!(matches!(
        launcher.evolve(&options, &mut rng),
        Err(GeneticError::Configuration(_))
    ));
}

#[test]
fn test_logging_levels_do_not_change_the_run() {
    init_tracing();
    let puzzle = Puzzle::new(4, &[], &[(1, 1, 2, 1)]).unwrap();
    let mut options = EvolutionOptions::new(30, 20, 0.1, 0.6, OptimizationMode::Lamarck);

    let (_, quiet) = run(&puzzle, &options, 21);
    options.set_log_level(LogLevel::Verbose);
    let (_, verbose) = run(&puzzle, &options, 21);
    options.set_log_level(LogLevel::Minimal);
    let (_, minimal) = run(&puzzle, &options, 21);

    let (quiet, verbose, minimal) = (quiet.unwrap(), verbose.unwrap(), minimal.unwrap());
    assert_eq!(quiet.best, verbose.best);
    assert_eq!(quiet.best, minimal.best);
    assert_eq!(quiet.generations, minimal.generations);
}

#[cfg(feature = "serde")]
#[test]
fn test_statistics_serde_round_trip() {
    let options = EvolutionOptions::new(10, 10, 0.1, 0.6, OptimizationMode::None);
    let (_, stats) = run(&contradictory_puzzle(), &options, 2);
    let stats = stats.unwrap();

    let json = serde_json::to_string(&stats).unwrap();
    let restored: RunStatistics = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, stats);

    let json = serde_json::to_string(&options).unwrap();
    let restored: EvolutionOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, options);
}
