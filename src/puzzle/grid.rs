use std::fmt;

/// A square board with every cell filled, produced by [`Puzzle::materialize`].
///
/// Each materialization owns its cells, so scoring never writes to state shared
/// with other candidates.
///
/// [`Puzzle::materialize`]: super::Puzzle::materialize
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<usize>,
}

impl Grid {
    pub(crate) fn from_cells(dimension: usize, cells: Vec<usize>) -> Self {
        debug_assert_eq!(cells.len(), dimension * dimension);
        Self { dimension, cells }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the value at `(row, col)`, 0-indexed.
    pub fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.dimension + col]
    }

    /// Returns one row of the board.
    pub fn row(&self, row: usize) -> &[usize] {
        let start = row * self.dimension;
        &self.cells[start..start + self.dimension]
    }

    /// Copies the board into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        (0..self.dimension).map(|r| self.row(r).to_vec()).collect()
    }

    /// Whether another cell in the same row holds the value at `(row, col)`.
    pub fn has_row_duplicate(&self, row: usize, col: usize) -> bool {
        let value = self.get(row, col);
        (0..self.dimension).any(|j| j != col && self.get(row, j) == value)
    }

    /// Whether another cell in the same column holds the value at `(row, col)`.
    pub fn has_column_duplicate(&self, row: usize, col: usize) -> bool {
        let value = self.get(row, col);
        (0..self.dimension).any(|i| i != row && self.get(i, col) == value)
    }

    /// Whether `value` appears in `row` or `col`, ignoring the cell `(row, col)` itself.
    pub fn seen_by(&self, row: usize, col: usize, value: usize) -> bool {
        (0..self.dimension).any(|j| j != col && self.get(row, j) == value)
            || (0..self.dimension).any(|i| i != row && self.get(i, col) == value)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.dimension {
            if r > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = self.row(r).iter().map(|v| v.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
