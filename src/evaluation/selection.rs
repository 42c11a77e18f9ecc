//! Fixed sets of evaluations with best-of and roulette-wheel selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette-wheel selection)
//! - Lipowski & Lipowska (2012), "Roulette-wheel selection via stochastic
//!   acceptance"

use super::types::Evaluation;
use crate::score::Requirement;
use rand::Rng;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An immutable, ordered collection of evaluations.
///
/// The best member and the cumulative weight array are derived lazily and
/// cached. Selection is fitness-proportionate on `total_score`, which is
/// assumed non-negative (higher is better).
pub struct Evaluations<T, K> {
    members: Vec<Evaluation<T, K>>,
    cumulative: OnceLock<Vec<f64>>,
    best: OnceLock<Option<usize>>,
}

impl<T, K: Requirement> Evaluations<T, K> {
    pub fn new(members: Vec<Evaluation<T, K>>) -> Self {
        Self {
            members,
            cumulative: OnceLock::new(),
            best: OnceLock::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Evaluation<T, K>> {
        self.members.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Evaluation<T, K>> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Evaluation<T, K>] {
        &self.members
    }

    pub fn into_vec(self) -> Vec<Evaluation<T, K>> {
        self.members
    }

    /// Index of the highest `total_score`; the first one on ties.
    pub fn best_index(&self) -> Option<usize> {
        *self.best.get_or_init(|| {
            let mut best: Option<(usize, f64)> = None;
            for (i, member) in self.members.iter().enumerate() {
                let score = member.total_score();
                match best {
                    Some((_, top)) if score <= top => {}
                    _ => best = Some((i, score)),
                }
            }
            best.map(|(i, _)| i)
        })
    }

    /// The member with the highest `total_score`.
    pub fn best(&self) -> Option<&Evaluation<T, K>> {
        self.best_index().map(|i| &self.members[i])
    }

    /// Running sums of `total_score` in member order.
    pub fn cumulative_weights(&self) -> &[f64] {
        self.cumulative.get_or_init(|| {
            let mut sum = 0.0;
            self.members
                .iter()
                .map(|member| {
                    let score = member.total_score();
                    debug_assert!(score >= 0.0, "roulette weights must be non-negative");
                    sum += score;
                    sum
                })
                .collect()
        })
    }

    /// Sum of all `total_score`s.
    pub fn total_weight(&self) -> f64 {
        self.cumulative_weights().last().copied().unwrap_or(0.0)
    }

    /// Index of the first member whose cumulative weight exceeds `threshold`.
    ///
    /// A threshold exactly on a bucket edge belongs to the next bucket.
    /// Returns `None` when no cumulative weight exceeds the threshold.
    pub fn select_at(&self, threshold: f64) -> Option<usize> {
        let cumulative = self.cumulative_weights();
        let index = cumulative.partition_point(|&c| c <= threshold);
        (index < cumulative.len()).then_some(index)
    }

    /// Draws an index with probability proportional to `total_score`.
    ///
    /// Returns `None` for an empty set, when every score is zero, or when
    /// the total weight is not finite.
    pub fn select_index<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        let total = self.total_weight();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }
        self.select_at(rng.random_range(0.0..total))
    }

    /// Roulette-wheel selection of one member.
    pub fn select_probabilistically<R: Rng>(&self, rng: &mut R) -> Option<&Evaluation<T, K>> {
        self.select_index(rng).map(|i| &self.members[i])
    }
}

impl<T: Send + Sync, K: Requirement> Evaluations<T, K> {
    /// Computes every member's scores now.
    ///
    /// With `parallel = true` members are scored concurrently on the rayon
    /// pool; otherwise in order.
    #[cfg(feature = "parallel")]
    pub fn force_scores(&self, parallel: bool) {
        if parallel {
            self.members.par_iter().for_each(|member| {
                member.scores();
            });
        } else {
            self.members.iter().for_each(|member| {
                member.scores();
            });
        }
    }

    /// Computes every member's scores now, in order.
    #[cfg(not(feature = "parallel"))]
    pub fn force_scores(&self, _parallel: bool) {
        for member in &self.members {
            member.scores();
        }
    }
}

impl<T, K: Requirement> FromIterator<Evaluation<T, K>> for Evaluations<T, K> {
    fn from_iter<I: IntoIterator<Item = Evaluation<T, K>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone, K: Clone> Clone for Evaluations<T, K> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
            cumulative: self.cumulative.clone(),
            best: self.best.clone(),
        }
    }
}

impl<T: std::fmt::Debug, K: Requirement> std::fmt::Debug for Evaluations<T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Evaluations")
            .field("members", &self.members)
            .finish()
    }
}
