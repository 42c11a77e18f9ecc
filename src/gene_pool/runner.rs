//! Island-model evolutionary loop.

use super::config::GenePoolConfig;
use super::types::GenePool;
use crate::error::Result;
use crate::evaluation::{Evaluation, FitnessFn};
use crate::genome::Genome;
use crate::random::rng_from_seed;
use crate::score::Requirement;

/// Result of an island-model run.
pub struct GenePoolResult<K> {
    /// The best genome of the final epoch.
    pub best: Option<Evaluation<Genome, K>>,

    /// The pool as it stood when the run ended.
    pub pool: GenePool<K>,

    /// Number of epochs executed, counting the initial one.
    pub epochs: usize,

    /// Whether the progress callback asked to stop.
    pub stopped: bool,

    /// Best total score at the end of each epoch.
    pub fitness_history: Vec<f64>,
}

impl<K: Requirement> std::fmt::Debug for GenePoolResult<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenePoolResult")
            .field("best", &self.best)
            .field("epochs", &self.epochs)
            .field("stopped", &self.stopped)
            .field("fitness_history", &self.fitness_history)
            .finish()
    }
}

/// Drives a [`GenePool`] epoch by epoch.
///
/// # Usage
///
/// ```
/// use meal_evolve::evaluation::fitness_fn;
/// use meal_evolve::gene_pool::{GenePoolConfig, GenePoolRunner};
/// use meal_evolve::genome::Genome;
/// use meal_evolve::score::Scores;
///
/// let fitness = fitness_fn(|g: &Genome| {
///     let mut scores = Scores::new();
///     for value in g.decoder().take(g.len()) {
///         scores
///             .add_score("gene", value, 1.0)
///             .expect("decoded genes lie in [0, 1]");
///     }
///     scores
/// });
/// let config = GenePoolConfig::default()
///     .with_island_count(3)
///     .with_generations(10)
///     .with_population_size(8)
///     .with_max_genome_length(4)
///     .with_seed(42);
///
/// let result = GenePoolRunner::run(&config, fitness).unwrap();
/// assert_eq!(result.epochs, 10);
/// assert!(result.best.is_some());
/// ```
pub struct GenePoolRunner;

impl GenePoolRunner {
    /// Runs for `config.generations` epochs.
    pub fn run<K: Requirement>(
        config: &GenePoolConfig,
        fitness: FitnessFn<Genome, K>,
    ) -> Result<GenePoolResult<K>> {
        Self::find_best(config, fitness, |_, _| true)
    }

    /// Runs up to `config.generations` epochs, consulting `progress` after each.
    ///
    /// `progress(epoch, pool)` is called after the initial epoch (0) and after
    /// every advance; returning `false` stops the run. Time budgets and
    /// fitness thresholds are implemented by the caller through it.
    pub fn find_best<K, F>(
        config: &GenePoolConfig,
        fitness: FitnessFn<Genome, K>,
        mut progress: F,
    ) -> Result<GenePoolResult<K>>
    where
        K: Requirement,
        F: FnMut(usize, &GenePool<K>) -> bool,
    {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);

        log::info!(
            "island search: {} islands x {} genomes, up to {} epochs",
            config.island_count,
            config.species.population_size,
            config.generations
        );

        let mut pool = GenePool::seed(config, fitness, &mut rng);
        let mut fitness_history = Vec::with_capacity(config.generations);
        fitness_history.push(pool.best_score());

        let mut stopped = !progress(0, &pool);
        let mut epochs = 1;

        while !stopped && epochs < config.generations {
            pool = pool.advance(&mut rng);
            let best = pool.best_score();
            log::debug!("epoch {epochs}: best total score {best:.4}");
            fitness_history.push(best);

            stopped = !progress(epochs, &pool);
            epochs += 1;
        }

        let best = pool.best().cloned();
        log::info!(
            "island search finished after {epochs} epochs: best total score {:.4}",
            pool.best_score()
        );

        Ok(GenePoolResult {
            best,
            pool,
            epochs,
            stopped,
            fitness_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::evaluation::fitness_fn;
    use crate::score::{ScoreParams, Scores};

    /// Each decoded value should sit in the optimal band `[0.6, 0.8]`.
    fn banded() -> FitnessFn<Genome, usize> {
        let params = ScoreParams::new(0.3, 0.6, 0.8, 0.95, 1.0).unwrap();
        fitness_fn(move |g: &Genome| {
            let mut s = Scores::new();
            for (i, value) in g.decoder().take(g.len()).enumerate() {
                s.add_scored_value(i, value, &params);
            }
            s
        })
    }

    fn config() -> GenePoolConfig {
        GenePoolConfig::default()
            .with_island_count(4)
            .with_generations(40)
            .with_population_size(12)
            .with_max_genome_length(5)
            .with_mutation_rate(0.4)
            .with_parallel(false)
            .with_seed(42)
    }

    #[test]
    fn test_runs_all_generations() {
        let result = GenePoolRunner::run(&config(), banded()).unwrap();
        assert_eq!(result.epochs, 40);
        assert!(!result.stopped);
        assert_eq!(result.fitness_history.len(), 40);
        assert_eq!(result.pool.epoch(), 39);
    }

    #[test]
    fn test_callback_sees_every_epoch() {
        let mut seen = Vec::new();
        let result = GenePoolRunner::find_best(&config(), banded(), |epoch, pool| {
            seen.push((epoch, pool.epoch()));
            true
        })
        .unwrap();
        assert_eq!(seen.len(), result.epochs);
        for (i, &(epoch, pool_epoch)) in seen.iter().enumerate() {
            assert_eq!(epoch, i);
            assert_eq!(pool_epoch, i);
        }
    }

    #[test]
    fn test_callback_stops_run() {
        let result = GenePoolRunner::find_best(&config(), banded(), |epoch, _| epoch < 5).unwrap();
        assert!(result.stopped);
        assert_eq!(result.epochs, 6);
        assert_eq!(result.fitness_history.len(), 6);
    }

    #[test]
    fn test_stop_on_first_epoch() {
        let result = GenePoolRunner::find_best(&config(), banded(), |_, _| false).unwrap();
        assert!(result.stopped);
        assert_eq!(result.epochs, 1);
        assert!(result.best.is_some());
    }

    #[test]
    fn test_single_generation() {
        let result = GenePoolRunner::run(&config().with_generations(1), banded()).unwrap();
        assert_eq!(result.epochs, 1);
        assert_eq!(result.pool.epoch(), 0);
    }

    #[test]
    fn test_invalid_config() {
        let err = GenePoolRunner::run(&config().with_island_count(0), banded()).unwrap_err();
        assert_eq!(err, Error::NoIslands);
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = GenePoolRunner::run(&config(), banded()).unwrap();
        let b = GenePoolRunner::run(&config(), banded()).unwrap();
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(
            a.best.map(|e| e.into_candidate()),
            b.best.map(|e| e.into_candidate())
        );
    }

    #[test]
    fn test_best_never_regresses() {
        // The fittest island always survives and keeps its elite.
        let result = GenePoolRunner::run(&config(), banded()).unwrap();
        for pair in result.fitness_history.windows(2) {
            assert!(pair[1] >= pair[0], "history regressed: {pair:?}");
        }
    }

    #[test]
    fn test_search_reaches_band() {
        let species = config().species.with_uniform_init(true);
        let cfg = config().with_generations(80).with_species(species);
        let result = GenePoolRunner::run(&cfg, banded()).unwrap();
        let best = result.best.unwrap();
        let normalized = best.scores().normalized_score();
        assert!(
            normalized > 0.8,
            "expected most genes inside the band, got {normalized}"
        );
    }
}
