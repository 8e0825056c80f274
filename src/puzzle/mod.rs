//! # Puzzle Model
//!
//! A `Puzzle` describes a Futoshiki board: its dimension `N`, the cells that
//! are given in advance, and the inequality relations between pairs of cells.
//! Candidates only assign values to the free cells, in row-major order, so a
//! candidate vector always has `N * N - given` entries.
//!
//! Scoring counts satisfied constraints. Every cell contributes one row
//! constraint and one column constraint (its value must be unique along that
//! axis), and every relation contributes one more, for a total of
//! `2 * N * N + relations` constraints.
//!
//! ## Example
//!
//! ```rust
//! use futoshiki_ga::puzzle::Puzzle;
//!
//! // A 2x2 board with the top-left cell given as 1 and cell (1,2) > cell (2,2).
//! let puzzle = Puzzle::new(2, &[(1, 1, 1)], &[(1, 2, 2, 2)]).unwrap();
//! assert_eq!(puzzle.constraint_count(), 9);
//! assert_eq!(puzzle.solution_size(), 3);
//!
//! // Free cells in row-major order: (1,2), (2,1), (2,2).
//! assert!(puzzle.is_valid(&[2, 2, 1]));
//! assert_eq!(puzzle.score(&[2, 1, 2]), 4);
//! ```

mod grid;
pub mod parser;

pub use grid::Grid;

use crate::error::{GeneticError, Result};

/// Largest accepted side length.
pub const MAX_DIMENSION: usize = 1024;

/// A relation requiring the value in `greater` to exceed the value in `lesser`.
///
/// Coordinates are 0-indexed `(row, col)` pairs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub greater: (usize, usize),
    pub lesser: (usize, usize),
}

impl Relation {
    /// Whether the relation holds on `grid`.
    pub fn holds(&self, grid: &Grid) -> bool {
        grid.get(self.greater.0, self.greater.1) > grid.get(self.lesser.0, self.lesser.1)
    }
}

/// An immutable Futoshiki puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    dimension: usize,
    /// Board with given values filled in and zero everywhere else.
    base: Vec<usize>,
    relations: Vec<Relation>,
    free_cells: Vec<(usize, usize)>,
    /// Maps a board cell to its position in a candidate vector.
    slots: Vec<Option<usize>>,
}

impl Puzzle {
    /// Builds a puzzle from 1-indexed descriptions.
    ///
    /// # Arguments
    ///
    /// * `dimension` - The side length `N` of the board.
    /// * `given` - `(row, col, value)` triples of pre-filled cells.
    /// * `relations` - `(row1, col1, row2, col2)` quadruples meaning cell 1 > cell 2.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidPuzzle` if the dimension is zero or larger
    /// than [`MAX_DIMENSION`], any coordinate or value lies outside `1..=N`,
    /// or a cell is given twice.
    pub fn new(
        dimension: usize,
        given: &[(usize, usize, usize)],
        relations: &[(usize, usize, usize, usize)],
    ) -> Result<Self> {
        if dimension == 0 {
            return Err(GeneticError::InvalidPuzzle(
                "Dimension must be greater than 0".to_string(),
            ));
        }

        if dimension > MAX_DIMENSION {
            return Err(GeneticError::InvalidPuzzle(format!(
                "Dimension {} exceeds the maximum of {}",
                dimension, MAX_DIMENSION
            )));
        }
        let cell_count = dimension
            .checked_mul(dimension)
            .filter(|cells| {
                cells
                    .checked_mul(2)
                    .and_then(|c| c.checked_add(relations.len()))
                    .is_some()
            })
            .ok_or_else(|| {
                GeneticError::InvalidPuzzle(format!("Dimension {} is too large", dimension))
            })?;

        let in_range = |x: usize| (1..=dimension).contains(&x);
        let mut base = vec![0; cell_count];

        for &(row, col, value) in given {
            if !(in_range(row) && in_range(col) && in_range(value)) {
                return Err(GeneticError::InvalidPuzzle(format!(
                    "Given cell ({}, {}, {}) is outside of 1..={}",
                    row, col, value, dimension
                )));
            }
            let cell = &mut base[(row - 1) * dimension + (col - 1)];
            if *cell != 0 {
                return Err(GeneticError::InvalidPuzzle(format!(
                    "Cell ({}, {}) is given more than once",
                    row, col
                )));
            }
            *cell = value;
        }

        let relations = relations
            .iter()
            .map(|&(r1, c1, r2, c2)| {
                if [r1, c1, r2, c2].iter().all(|&x| in_range(x)) {
                    Ok(Relation {
                        greater: (r1 - 1, c1 - 1),
                        lesser: (r2 - 1, c2 - 1),
                    })
                } else {
                    Err(GeneticError::InvalidPuzzle(format!(
                        "Relation ({}, {}, {}, {}) is outside of 1..={}",
                        r1, c1, r2, c2, dimension
                    )))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let mut free_cells = Vec::new();
        let mut slots = vec![None; dimension * dimension];
        for (idx, &value) in base.iter().enumerate() {
            if value == 0 {
                slots[idx] = Some(free_cells.len());
                free_cells.push((idx / dimension, idx % dimension));
            }
        }

        Ok(Self {
            dimension,
            base,
            relations,
            free_cells,
            slots,
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Number of row, column and relation constraints; the best possible fitness.
    pub fn constraint_count(&self) -> usize {
        2 * self.dimension * self.dimension + self.relations.len()
    }

    /// Length of a candidate vector: the number of free cells.
    pub fn solution_size(&self) -> usize {
        self.free_cells.len()
    }

    /// Free cells in row-major order, 0-indexed.
    pub fn free_cells(&self) -> &[(usize, usize)] {
        &self.free_cells
    }

    /// The given value at `(row, col)`, 0-indexed, if the cell is pre-filled.
    pub fn given_value(&self, row: usize, col: usize) -> Option<usize> {
        match self.base[row * self.dimension + col] {
            0 => None,
            value => Some(value),
        }
    }

    /// Position of the free cell `(row, col)` in a candidate vector.
    pub fn position_of(&self, row: usize, col: usize) -> Option<usize> {
        self.slots[row * self.dimension + col]
    }

    /// Relations in which `(row, col)` is the greater-side cell.
    pub fn outgoing(&self, row: usize, col: usize) -> impl Iterator<Item = &Relation> {
        self.relations
            .iter()
            .filter(move |relation| relation.greater == (row, col))
    }

    /// Checks that `vector` fits this puzzle's free cells and value range.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::VectorLength` or `GeneticError::ValueOutOfRange`.
    pub fn check_vector(&self, vector: &[usize]) -> Result<()> {
        if vector.len() != self.solution_size() {
            return Err(GeneticError::VectorLength {
                expected: self.solution_size(),
                actual: vector.len(),
            });
        }
        match vector
            .iter()
            .position(|v| !(1..=self.dimension).contains(v))
        {
            Some(position) => Err(GeneticError::ValueOutOfRange {
                position,
                value: vector[position],
                dimension: self.dimension,
            }),
            None => Ok(()),
        }
    }

    /// Writes `vector` into the free cells of a fresh board, leaving given cells untouched.
    pub fn materialize(&self, vector: &[usize]) -> Grid {
        debug_assert_eq!(vector.len(), self.solution_size());
        let mut cells = self.base.clone();
        for (&(row, col), &value) in self.free_cells.iter().zip(vector) {
            cells[row * self.dimension + col] = value;
        }
        Grid::from_cells(self.dimension, cells)
    }

    /// Counts the constraints `vector` satisfies.
    pub fn score(&self, vector: &[usize]) -> usize {
        let grid = self.materialize(vector);
        let mut violations = 0;
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                violations += grid.has_row_duplicate(row, col) as usize;
                violations += grid.has_column_duplicate(row, col) as usize;
            }
        }
        violations += self.relations.iter().filter(|r| !r.holds(&grid)).count();
        self.constraint_count() - violations
    }

    /// Whether `vector` satisfies every constraint.
    pub fn is_valid(&self, vector: &[usize]) -> bool {
        self.score(vector) == self.constraint_count()
    }

    /// Per-cell violation counts over the whole board, in row-major order.
    ///
    /// A cell scores one point for a duplicate in its row, one for a duplicate
    /// in its column, and one if any relation it must dominate is broken.
    pub fn cell_violations(&self, grid: &Grid) -> Vec<usize> {
        let mut counts = Vec::with_capacity(self.dimension * self.dimension);
        for row in 0..self.dimension {
            for col in 0..self.dimension {
                let relation_broken = self.outgoing(row, col).any(|r| !r.holds(grid));
                counts.push(
                    grid.has_row_duplicate(row, col) as usize
                        + grid.has_column_duplicate(row, col) as usize
                        + relation_broken as usize,
                );
            }
        }
        counts
    }
}
