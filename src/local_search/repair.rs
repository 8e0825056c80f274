use crate::candidate::Candidate;
use crate::puzzle::{Grid, Puzzle};
use crate::rng::RandomNumberGenerator;

use super::LocalSearch;

/// A free cell that breaks at least one constraint, with the values that would fit it.
#[derive(Debug, Clone)]
struct Repair {
    position: usize,
    severity: usize,
    allowed: Vec<usize>,
}

/// Targeted repair of conflicting cells.
///
/// The algorithm materializes the candidate, counts the constraints each free
/// cell breaks, and collects for every conflicting cell the values that appear
/// nowhere else in its row or column and that exceed every cell the cell must
/// dominate. The most severe conflicts come first; a random number of them,
/// between 2 and `N`, receive a random allowed value.
///
/// # Example
///
/// ```rust
/// use futoshiki_ga::candidate::Candidate;
/// use futoshiki_ga::local_search::{ConflictRepair, LocalSearch};
/// use futoshiki_ga::puzzle::Puzzle;
/// use futoshiki_ga::rng::RandomNumberGenerator;
///
/// let puzzle = Puzzle::new(2, &[(1, 1, 1)], &[]).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(0);
///
/// // Board [1, 1], [2, 1]: cells (1,2) and (2,2) are the free conflicts.
/// let broken = Candidate::new(&puzzle, vec![1, 2, 1]);
/// let repaired = ConflictRepair.search(&broken, &puzzle, &mut rng).unwrap();
/// assert_eq!(repaired.vector(), &[2, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictRepair;

impl ConflictRepair {
    /// Values for `(row, col)` that clash with nothing in its row or column and
    /// satisfy every relation in which the cell is the greater side.
    fn allowed_values(puzzle: &Puzzle, grid: &Grid, row: usize, col: usize) -> Vec<usize> {
        (1..=puzzle.dimension())
            .filter(|&value| !grid.seen_by(row, col, value))
            .filter(|&value| {
                puzzle
                    .outgoing(row, col)
                    .all(|relation| value > grid.get(relation.lesser.0, relation.lesser.1))
            })
            .collect()
    }

    fn find_repairs(puzzle: &Puzzle, grid: &Grid) -> Vec<Repair> {
        let dimension = puzzle.dimension();
        let violations = puzzle.cell_violations(grid);

        let mut repairs: Vec<Repair> = puzzle
            .free_cells()
            .iter()
            .enumerate()
            .filter_map(|(position, &(row, col))| {
                let severity = violations[row * dimension + col];
                if severity == 0 {
                    return None;
                }
                let allowed = Self::allowed_values(puzzle, grid, row, col);
                (!allowed.is_empty()).then_some(Repair {
                    position,
                    severity,
                    allowed,
                })
            })
            .collect();

        repairs.sort_by(|a, b| b.severity.cmp(&a.severity));
        repairs
    }
}

impl LocalSearch for ConflictRepair {
    fn search(
        &self,
        candidate: &Candidate,
        puzzle: &Puzzle,
        rng: &mut RandomNumberGenerator,
    ) -> Option<Candidate> {
        let grid = puzzle.materialize(candidate.vector());
        let repairs = Self::find_repairs(puzzle, &grid);
        if repairs.is_empty() {
            return None;
        }

        let limit = rng.gen_inclusive(2, puzzle.dimension().max(2));
        let mut vector = candidate.vector().to_vec();
        for repair in repairs.iter().take(limit) {
            if let Some(&value) = rng.choose(&repair.allowed) {
                vector[repair.position] = value;
            }
        }

        Some(Candidate::new(puzzle, vector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidate_left_alone() {
        let puzzle = Puzzle::new(3, &[], &[(1, 1, 1, 2)]).unwrap();
        let solved = Candidate::new(&puzzle, vec![3, 1, 2, 1, 2, 3, 2, 3, 1]);
        let mut rng = RandomNumberGenerator::from_seed(1);
        assert!(ConflictRepair.search(&solved, &puzzle, &mut rng).is_none());
    }

    #[test]
    fn test_allowed_values_respect_relations() {
        // (1,1) must exceed (1,2), which holds 3.
        let puzzle = Puzzle::new(4, &[(1, 2, 3)], &[(1, 1, 1, 2)]).unwrap();
        let grid = puzzle.materialize(&[1; 15]);
        assert_eq!(ConflictRepair::allowed_values(&puzzle, &grid, 0, 0), vec![4]);
    }

    #[test]
    fn test_most_severe_conflict_first() {
        let puzzle = Puzzle::new(3, &[], &[(1, 1, 2, 2)]).unwrap();
        // Board [1,3,1],[3,1,2],[1,2,3]
        let grid = puzzle.materialize(&[1, 3, 1, 3, 1, 2, 1, 2, 3]);
        let repairs = ConflictRepair::find_repairs(&puzzle, &grid);
        // (1,1) clashes in its row and column and breaks its relation: 1 > 1 is false.
        assert_eq!(repairs[0].position, 0);
        assert_eq!(repairs[0].severity, 3);
        assert_eq!(repairs[0].allowed, vec![2]);
        // (1,3) and (3,1) conflict too, but every value is already taken in their lines.
        assert_eq!(repairs.len(), 1);
    }

    #[test]
    fn test_repairs_sorted_by_severity() {
        let puzzle = Puzzle::new(5, &[(1, 1, 1)], &[(2, 2, 2, 3), (4, 4, 5, 4)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(2);
        for _ in 0..30 {
            let candidate = Candidate::random(&puzzle, &mut rng);
            let grid = puzzle.materialize(candidate.vector());
            let repairs = ConflictRepair::find_repairs(&puzzle, &grid);
            assert!(repairs.windows(2).all(|w| w[0].severity >= w[1].severity));
            assert!(repairs
                .iter()
                .all(|r| r.severity > 0 && !r.allowed.is_empty()));
        }
    }

    #[test]
    fn test_repair_never_touches_given_or_reuses_row_values() {
        let puzzle = Puzzle::new(4, &[(1, 1, 4), (2, 3, 1), (4, 4, 2)], &[(3, 1, 3, 2)]).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(17);

        for _ in 0..50 {
            let candidate = Candidate::random(&puzzle, &mut rng);
            let before = puzzle.materialize(candidate.vector());
            if let Some(repaired) = ConflictRepair.search(&candidate, &puzzle, &mut rng) {
                let after = puzzle.materialize(repaired.vector());
                assert_eq!(after.get(0, 0), 4);
                assert_eq!(after.get(1, 2), 1);
                assert_eq!(after.get(3, 3), 2);

                for (position, &(row, col)) in puzzle.free_cells().iter().enumerate() {
                    if candidate.vector()[position] != repaired.vector()[position] {
                        assert!(!before.seen_by(row, col, after.get(row, col)));
                    }
                }
                assert_eq!(repaired.fitness(), puzzle.score(repaired.vector()));
            }
        }
    }
}
