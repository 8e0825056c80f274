use crate::rng::RandomNumberGenerator;

/// Splices two parents at a random point.
///
/// The split point is drawn uniformly from `0..len`; the child takes the
/// prefix of `first` up to the split and the suffix of `second` from it.
///
/// # Example
///
/// ```rust
/// use futoshiki_ga::breeding::single_point_crossover;
/// use futoshiki_ga::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(1);
/// let child = single_point_crossover(&[1, 1, 1, 1], &[2, 2, 2, 2], &mut rng);
///
/// let split = child.iter().take_while(|&&v| v == 1).count();
/// assert!(child[split..].iter().all(|&v| v == 2));
/// ```
pub fn single_point_crossover(
    first: &[usize],
    second: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    debug_assert_eq!(first.len(), second.len());
    if first.is_empty() {
        return Vec::new();
    }
    let split = rng.gen_index(first.len());
    first[..split]
        .iter()
        .chain(&second[split..])
        .copied()
        .collect()
}
