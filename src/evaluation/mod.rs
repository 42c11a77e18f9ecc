//! Memoized fitness over opaque candidates.
//!
//! An [`Evaluation`] owns one candidate and caches its [`Scores`](crate::score::Scores)
//! after the first request. [`Evaluations`] is a fixed set of them with a
//! cached best member and fitness-proportionate sampling.
//!
//! Both are generic over the candidate type, so the same machinery serves
//! the island model over [`Genome`](crate::genome::Genome)s and the
//! steady-state optimizer over domain-specific candidates.

mod selection;
mod types;

pub use selection::Evaluations;
pub use types::{fitness_fn, Evaluation, FitnessFn};
