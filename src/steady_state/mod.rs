//! Steady-state incremental search over arbitrary candidates.
//!
//! Unlike the generational [`gene_pool`](crate::gene_pool), one child is
//! produced per iteration and at most one individual is evicted. The
//! population is kept sorted best-first at all times; it grows from
//! `start_size` to `max_size` during warm-up and then stays full.
//!
//! The domain supplies candidate construction, mating and (optionally) the
//! ranking through [`SteadyStateProblem`]. Termination is cooperative: an
//! iteration bound, a time limit, a cancellation flag, or any predicate
//! polled between iterations.
//!
//! # Key Types
//!
//! - [`SteadyStateProblem`]: factory, mate operator, comparator, best callback
//! - [`SteadyStateConfig`]: population sizes, bounds, seed
//! - [`SteadyStateRunner`]: executes the loop
//! - [`SortedPopulation`]: best-first population with rank insertion

mod config;
mod population;
mod runner;
mod types;

pub use config::SteadyStateConfig;
pub use population::SortedPopulation;
pub use runner::{SteadyStateResult, SteadyStateRunner};
pub use types::{Individual, SteadyStateProblem};
