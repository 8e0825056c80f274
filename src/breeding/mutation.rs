use crate::rng::RandomNumberGenerator;

/// The three ways a vector can be mutated, drawn with equal probability.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTactic {
    /// Swap two distinct random positions.
    SwapRandom,
    /// Swap a random position with its predecessor.
    SwapAdjacent,
    /// Overwrite one random position with a fresh value.
    Reassign,
}

impl MutationTactic {
    /// Flips a three-sided coin.
    pub fn random(rng: &mut RandomNumberGenerator) -> Self {
        match rng.gen_inclusive(1, 3) {
            1 => MutationTactic::SwapRandom,
            2 => MutationTactic::SwapAdjacent,
            _ => MutationTactic::Reassign,
        }
    }

    /// Applies the tactic to a copy of `vector`.
    ///
    /// Swaps need at least two positions; shorter vectors fall back to
    /// reassignment, and an empty vector is returned unchanged.
    pub fn apply(
        self,
        vector: &[usize],
        dimension: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Vec<usize> {
        let mut mutated = vector.to_vec();
        let len = mutated.len();
        if len == 0 {
            return mutated;
        }

        match self {
            MutationTactic::SwapRandom if len >= 2 => {
                if let Some((i, j)) = rng.distinct_pair(len) {
                    mutated.swap(i, j);
                }
            }
            MutationTactic::SwapAdjacent if len >= 2 => {
                let i = rng.gen_inclusive(1, len - 1);
                mutated.swap(i, i - 1);
            }
            _ => {
                let position = rng.gen_index(len);
                mutated[position] = rng.gen_value(dimension);
            }
        }
        mutated
    }
}

/// Mutates a copy of `vector` with a randomly chosen tactic.
///
/// # Example
///
/// ```rust
/// use futoshiki_ga::breeding::mutate;
/// use futoshiki_ga::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(4);
/// let original = vec![1, 2, 3, 4];
/// let mutated = mutate(&original, 4, &mut rng);
///
/// assert_eq!(mutated.len(), original.len());
/// let changed = original.iter().zip(&mutated).filter(|(a, b)| a != b).count();
/// assert!(changed <= 2);
/// ```
pub fn mutate(vector: &[usize], dimension: usize, rng: &mut RandomNumberGenerator) -> Vec<usize> {
    MutationTactic::random(rng).apply(vector, dimension, rng)
}
