//! Genetic operators on raw gene slices.
//!
//! # Crossover
//!
//! - [`crossover`]: single point; offspring length follows the second parent
//! - [`recombine`]: one shared point for a whole brood, alternating parents
//!
//! # Mutation
//!
//! - [`apply_mutations`]: `round(rate × length)` ±1 steps at random loci,
//!   clamped to `[0, MAX_GENE]`

use super::MAX_GENE;
use rand::Rng;

/// Single-point crossover.
///
/// The child takes `parent1[..point]` followed by `parent2[point..]`, so
/// its length always equals `parent2.len()`. `point` is clamped to the
/// shorter parent.
///
/// ```
/// use meal_evolve::genome::operators::crossover;
///
/// let child = crossover(&[0, 1, 2], &[5, 4, 3, 2, 1], 1);
/// assert_eq!(child, vec![0, 4, 3, 2, 1]);
/// ```
pub fn crossover(parent1: &[u8], parent2: &[u8], point: usize) -> Vec<u8> {
    let point = point.min(parent1.len()).min(parent2.len());
    let mut child = Vec::with_capacity(parent2.len());
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Produces `count` mutated offspring from one shared crossover point.
///
/// Offspring alternate parent roles: `(p1, p2)`, `(p2, p1)`, `(p1, p2)`, ...
/// A zero-length child is discarded and does not count. Returns an empty
/// vector when both parents are empty, since no child could ever qualify.
pub fn recombine<R: Rng>(
    parent1: &[u8],
    parent2: &[u8],
    count: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Vec<u8>> {
    if parent1.is_empty() && parent2.is_empty() {
        return Vec::new();
    }
    let point = rng.random_range(0..=parent1.len().min(parent2.len()));

    let mut offspring = Vec::with_capacity(count);
    let mut swapped = false;
    while offspring.len() < count {
        let (first, second) = if swapped {
            (parent2, parent1)
        } else {
            (parent1, parent2)
        };
        swapped = !swapped;

        let mut child = crossover(first, second, point);
        if child.is_empty() {
            continue;
        }
        apply_mutations(&mut child, mutation_rate, rng);
        offspring.push(child);
    }
    offspring
}

/// Number of point mutations for a genome of `length` genes.
pub fn mutation_count(length: usize, mutation_rate: f64) -> usize {
    // NaN saturates to 0.
    (mutation_rate.clamp(0.0, 1.0) * length as f64).round() as usize
}

/// Applies [`mutation_count`] independent ±1 steps at uniformly random loci.
///
/// Loci may repeat; each step is clamped to `[0, MAX_GENE]`.
pub fn apply_mutations<R: Rng>(genes: &mut [u8], mutation_rate: f64, rng: &mut R) {
    if genes.is_empty() {
        return;
    }
    for _ in 0..mutation_count(genes.len(), mutation_rate) {
        let locus = rng.random_range(0..genes.len());
        let gene = &mut genes[locus];
        *gene = if rng.random_bool(0.5) {
            gene.saturating_add(1).min(MAX_GENE)
        } else {
            gene.saturating_sub(1)
        };
    }
}
