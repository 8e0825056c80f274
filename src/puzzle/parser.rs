//! # Puzzle Ingestion
//!
//! Parses the plain-text puzzle description:
//!
//! ```text
//! N
//! G
//! row col value          (G lines)
//! R
//! row1 col1 row2 col2    (R lines, cell 1 > cell 2)
//! ```
//!
//! All coordinates are 1-indexed. Blank lines are skipped and anything after
//! the last relation is ignored.
//!
//! ```rust
//! use futoshiki_ga::puzzle::Puzzle;
//!
//! let puzzle: Puzzle = "3\n1\n2 2 2\n1\n1 1 1 2\n".parse().unwrap();
//! assert_eq!(puzzle.dimension(), 3);
//! assert_eq!(puzzle.given_value(1, 1), Some(2));
//! assert_eq!(puzzle.constraint_count(), 19);
//! ```

use std::str::FromStr;

use super::Puzzle;
use crate::error::{GeneticError, Result};

/// Non-blank lines of the input, with their 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    /// Reads the next record and checks it holds exactly `arity` integers.
    fn next(&mut self, arity: usize, what: &str) -> Result<Vec<usize>> {
        let (number, line) = self
            .lines
            .by_ref()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .find(|(_, line)| !line.is_empty())
            .ok_or_else(|| {
                GeneticError::InvalidPuzzle(format!("Unexpected end of input, expected {}", what))
            })?;

        let values = line
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|e| {
                    GeneticError::InvalidPuzzle(format!(
                        "Line {}: cannot read {} from {:?}: {}",
                        number, what, token, e
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if values.len() != arity {
            return Err(GeneticError::InvalidPuzzle(format!(
                "Line {}: expected {} integer(s) for {}, found {}",
                number,
                arity,
                what,
                values.len()
            )));
        }
        Ok(values)
    }

    fn count(&mut self, what: &str) -> Result<usize> {
        Ok(self.next(1, what)?[0])
    }
}

impl FromStr for Puzzle {
    type Err = GeneticError;

    fn from_str(text: &str) -> Result<Self> {
        let mut records = Records::new(text);

        let dimension = records.count("the matrix dimension")?;

        let n_given = records.count("the number of given digits")?;
        let given = (0..n_given)
            .map(|_| {
                records
                    .next(3, "a given digit")
                    .map(|v| (v[0], v[1], v[2]))
            })
            .collect::<Result<Vec<_>>>()?;

        let n_relations = records.count("the number of relations")?;
        let relations = (0..n_relations)
            .map(|_| {
                records
                    .next(4, "a relation")
                    .map(|v| (v[0], v[1], v[2], v[3]))
            })
            .collect::<Result<Vec<_>>>()?;

        Puzzle::new(dimension, &given, &relations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_BY_FIVE: &str = "5
2
1 1 3
4 5 2
3
1 2 1 3
2 2 3 2
5 4 5 5
";

    #[test]
    fn test_parse_full_description() {
        let puzzle: Puzzle = FIVE_BY_FIVE.parse().unwrap();
        assert_eq!(puzzle.dimension(), 5);
        assert_eq!(puzzle.solution_size(), 23);
        assert_eq!(puzzle.constraint_count(), 53);
        assert_eq!(puzzle.given_value(3, 4), Some(2));
        assert_eq!(puzzle.relations()[2].greater, (4, 3));
        assert_eq!(puzzle.relations()[2].lesser, (4, 4));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let puzzle: Puzzle = "\n2\n\n0\n0\n".parse().unwrap();
        assert_eq!(puzzle.solution_size(), 4);
        assert!(puzzle.relations().is_empty());
    }

    #[test]
    fn test_truncated_input() {
        let err = "4\n1\n".parse::<Puzzle>().unwrap_err();
        assert!(err.to_string().contains("Unexpected end of input"));
    }

    #[test]
    fn test_wrong_arity() {
        let err = "4\n1\n1 2\n0\n".parse::<Puzzle>().unwrap_err();
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn test_non_integer_token() {
        assert!("4\nx\n".parse::<Puzzle>().is_err());
        assert!("4\n0\n1\n1 1 -1 2\n".parse::<Puzzle>().is_err());
    }

    #[test]
    fn test_huge_dimension_rejected() {
        match "4294967296\n0\n0\n".parse::<Puzzle>() {
            Err(GeneticError::InvalidPuzzle(msg)) => assert!(msg.contains("4294967296")),
            other => panic!("Expected an invalid puzzle error, got {:?}", other),
        }
        assert!("1025\n0\n0\n".parse::<Puzzle>().is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            "3\n1\n1 4 1\n0\n".parse::<Puzzle>(),
            Err(GeneticError::InvalidPuzzle(_))
        ));
        assert!(matches!(
            "3\n0\n1\n0 1 1 2\n".parse::<Puzzle>(),
            Err(GeneticError::InvalidPuzzle(_))
        ));
    }
}
