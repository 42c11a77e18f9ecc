//! A candidate paired with its lazily computed, cached scores.

use crate::score::{Requirement, Scores};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Shared fitness function: candidate in, score sheet out.
///
/// Must be pure and deterministic for a given candidate, since its result
/// is cached on first use and never recomputed.
pub type FitnessFn<T, K> = Arc<dyn Fn(&T) -> Scores<K> + Send + Sync>;

/// Wraps a plain closure into a [`FitnessFn`].
pub fn fitness_fn<T, K, F>(f: F) -> FitnessFn<T, K>
where
    F: Fn(&T) -> Scores<K> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A candidate with memoized fitness.
///
/// The scores are computed at most once, on the first call to
/// [`scores`](Self::scores), and are shared by clones made afterwards. The
/// cache is a [`OnceLock`], so evaluations may be scored from several
/// threads at once.
pub struct Evaluation<T, K> {
    candidate: T,
    fitness: Option<FitnessFn<T, K>>,
    scores: OnceLock<Scores<K>>,
}

impl<T, K: Requirement> Evaluation<T, K> {
    /// Wraps `candidate`; `fitness` runs on first demand.
    pub fn new(candidate: T, fitness: FitnessFn<T, K>) -> Self {
        Self {
            candidate,
            fitness: Some(fitness),
            scores: OnceLock::new(),
        }
    }

    /// Wraps `candidate` with an already known verdict.
    pub fn with_scores(candidate: T, scores: Scores<K>) -> Self {
        Self {
            candidate,
            fitness: None,
            scores: OnceLock::from(scores),
        }
    }

    pub fn candidate(&self) -> &T {
        &self.candidate
    }

    pub fn into_candidate(self) -> T {
        self.candidate
    }

    /// The score sheet, computing it on first access.
    pub fn scores(&self) -> &Scores<K> {
        self.scores.get_or_init(|| match &self.fitness {
            Some(fitness) => fitness(&self.candidate),
            None => Scores::new(),
        })
    }

    /// Shorthand for `scores().total_score()`.
    pub fn total_score(&self) -> f64 {
        self.scores().total_score()
    }

    /// Whether the scores have been computed yet.
    pub fn is_evaluated(&self) -> bool {
        self.scores.get().is_some()
    }

    /// Evaluates `candidate` with the same fitness function as `self`.
    ///
    /// Used by mate operators to score a child without holding the
    /// function separately. Falls back to a verdict-less evaluation when
    /// `self` was built from known scores.
    pub fn sibling(&self, candidate: T) -> Self {
        match &self.fitness {
            Some(fitness) => Self::new(candidate, Arc::clone(fitness)),
            None => Self::with_scores(candidate, Scores::new()),
        }
    }

    /// The fitness function, if this evaluation was built from one.
    pub fn fitness(&self) -> Option<&FitnessFn<T, K>> {
        self.fitness.as_ref()
    }
}

impl<T: Clone, K: Clone> Clone for Evaluation<T, K> {
    fn clone(&self) -> Self {
        Self {
            candidate: self.candidate.clone(),
            fitness: self.fitness.clone(),
            scores: self.scores.clone(),
        }
    }
}

impl<T: fmt::Debug, K: Requirement> fmt::Debug for Evaluation<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluation")
            .field("candidate", &self.candidate)
            .field("total_score", &self.scores.get().map(Scores::total_score))
            .finish()
    }
}
