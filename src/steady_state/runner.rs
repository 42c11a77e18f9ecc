//! Steady-state incremental search loop.
//!
//! [`SteadyStateRunner`] keeps one best-first population and, each
//! iteration, mates two random distinct members into a single child that
//! is inserted at its rank; the worst member is evicted once the population
//! exceeds its maximum size.

use super::config::SteadyStateConfig;
use super::population::SortedPopulation;
use super::types::{Individual, SteadyStateProblem};
use crate::error::Result;
use crate::evaluation::Evaluation;
use crate::random::rng_from_seed;
use crate::score::Requirement;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a steady-state run.
pub struct SteadyStateResult<T, K> {
    /// The best individual of the final population.
    pub best: Option<Evaluation<T, K>>,

    /// The final population, best first.
    pub population: Vec<Evaluation<T, K>>,

    /// Iterations executed, including those whose parent draws collided.
    pub iterations: usize,

    /// Children produced.
    pub matings: usize,

    /// Times a child became the new best.
    pub improvements: usize,

    /// Whether the stop signal ended the run.
    pub cancelled: bool,
}

impl<T: std::fmt::Debug, K: Requirement> std::fmt::Debug for SteadyStateResult<T, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteadyStateResult")
            .field("best", &self.best)
            .field("population", &self.population.len())
            .field("iterations", &self.iterations)
            .field("matings", &self.matings)
            .field("improvements", &self.improvements)
            .field("cancelled", &self.cancelled)
            .finish()
    }
}

/// Executes steady-state search over a [`SteadyStateProblem`].
pub struct SteadyStateRunner;

impl SteadyStateRunner {
    /// Runs until the iteration bound or the time limit is reached.
    pub fn run<P: SteadyStateProblem>(
        problem: &P,
        config: &SteadyStateConfig,
    ) -> Result<SteadyStateResult<P::Candidate, P::Requirement>> {
        Self::run_until(problem, config, || false)
    }

    /// Runs with an optional cancellation token.
    ///
    /// The flag is polled before every iteration; a run in progress finishes
    /// its current mating first.
    pub fn run_with_cancel<P: SteadyStateProblem>(
        problem: &P,
        config: &SteadyStateConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SteadyStateResult<P::Candidate, P::Requirement>> {
        Self::run_until(problem, config, || {
            cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
        })
    }

    /// Runs until `should_stop` returns `true` or a configured bound is hit.
    pub fn run_until<P, F>(
        problem: &P,
        config: &SteadyStateConfig,
        mut should_stop: F,
    ) -> Result<SteadyStateResult<P::Candidate, P::Requirement>>
    where
        P: SteadyStateProblem,
        F: FnMut() -> bool,
    {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        log::info!(
            "steady-state search: start size {}, max size {}",
            config.start_size,
            config.max_size
        );

        let initial: Vec<Individual<P>> = (0..config.start_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        let mut population = SortedPopulation::from_unsorted(initial, |a, b| problem.compare(a, b));
        if let Some(best) = population.best() {
            problem.on_new_best(best);
        }

        let mut iterations = 0usize;
        let mut matings = 0usize;
        let mut improvements = 0usize;
        let mut cancelled = false;

        loop {
            if should_stop() {
                cancelled = true;
                break;
            }
            if config.max_iterations.is_some_and(|max| iterations >= max) {
                break;
            }
            if time_limit.is_some_and(|limit| started.elapsed() >= limit) {
                break;
            }
            iterations += 1;

            let (first, second) = draw_pair(population.len(), &mut rng);
            if first == second {
                continue;
            }
            let (Some(parent1), Some(parent2)) = (population.get(first), population.get(second))
            else {
                continue;
            };

            let child = problem.mate(parent1, parent2, &mut rng);
            let rank = population.insert(child, |a, b| problem.compare(a, b));
            population.evict_beyond(config.max_size);
            matings += 1;

            if rank == 0 {
                improvements += 1;
                if let Some(best) = population.best() {
                    log::debug!(
                        "iteration {iterations}: new best total score {:.4}",
                        best.total_score()
                    );
                    problem.on_new_best(best);
                }
            }
        }

        let best = population.best().cloned();
        log::info!(
            "steady-state search finished after {iterations} iterations ({matings} matings, {improvements} improvements)"
        );

        Ok(SteadyStateResult {
            best,
            population: population.into_vec(),
            iterations,
            matings,
            improvements,
            cancelled,
        })
    }
}

/// Two independent uniform indices into a population of `len`.
fn draw_pair<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    (rng.random_range(0..len), rng.random_range(0..len))
}
