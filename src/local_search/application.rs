use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};

/// How repaired candidates feed back into the population.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationMode {
    /// No local search.
    #[default]
    None,
    /// Repaired candidates replace their originals in the population.
    Lamarck,
    /// Repaired candidates only compete for the best-ever record; the
    /// population itself is left as bred.
    Darwin,
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptimizationMode::None => "none",
            OptimizationMode::Lamarck => "lamarck",
            OptimizationMode::Darwin => "darwin",
        };
        f.write_str(name)
    }
}

impl FromStr for OptimizationMode {
    type Err = GeneticError;

    /// Parses a mode name, ignoring case. `"lamark"` is accepted as a
    /// spelling of `Lamarck`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(OptimizationMode::None),
            "lamarck" | "lamark" => Ok(OptimizationMode::Lamarck),
            "darwin" => Ok(OptimizationMode::Darwin),
            other => Err(GeneticError::Configuration(format!(
                "Unknown optimization mode {:?}, expected none, lamarck or darwin",
                other
            ))),
        }
    }
}
