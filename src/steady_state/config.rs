//! Steady-state optimizer configuration.

use crate::error::{Error, Result};

/// Configuration for [`SteadyStateRunner`](super::SteadyStateRunner).
///
/// The population grows from `start_size` to `max_size` during warm-up and
/// stays at `max_size` afterwards.
///
/// # Defaults
///
/// ```
/// use meal_evolve::steady_state::SteadyStateConfig;
///
/// let config = SteadyStateConfig::default();
/// assert_eq!(config.start_size, 20);
/// assert_eq!(config.max_size, 100);
/// assert_eq!(config.max_iterations, Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SteadyStateConfig {
    /// Number of individuals built before the first mating.
    pub start_size: usize,

    /// Upper bound on the population; the worst is evicted beyond it.
    pub max_size: usize,

    /// Stop after this many iterations. `None` leaves termination to the
    /// time limit or the caller's stop signal.
    ///
    /// Iterations whose two parent draws collide count too.
    pub max_iterations: Option<usize>,

    /// Wall-clock budget in milliseconds. `None` for no limit.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SteadyStateConfig {
    fn default() -> Self {
        Self {
            start_size: 20,
            max_size: 100,
            max_iterations: Some(10_000),
            time_limit_ms: None,
            seed: None,
        }
    }
}

impl SteadyStateConfig {
    pub fn with_start_size(mut self, n: usize) -> Self {
        self.start_size = n;
        self
    }

    pub fn with_max_size(mut self, n: usize) -> Self {
        self.max_size = n;
        self
    }

    /// Sets the iteration bound.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    /// Removes the iteration bound.
    pub fn without_max_iterations(mut self) -> Self {
        self.max_iterations = None;
        self
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.start_size < 1 {
            return Err(Error::PopulationTooSmall {
                min: 1,
                actual: self.start_size,
            });
        }
        if self.max_size < self.start_size {
            return Err(Error::SizeInversion {
                start_size: self.start_size,
                max_size: self.max_size,
            });
        }
        if self.time_limit_ms == Some(0) {
            return Err(Error::ZeroTimeLimit);
        }
        Ok(())
    }
}
