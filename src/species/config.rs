//! Species configuration.
//!
//! [`SpeciesConfig`] holds the parameters of one island's evolutionary loop.

use crate::error::{Error, Result};

/// Configuration for one [`Species`](super::Species).
///
/// # Defaults
///
/// ```
/// use meal_evolve::species::SpeciesConfig;
///
/// let config = SpeciesConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_genome_length, 64);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use meal_evolve::species::SpeciesConfig;
///
/// let config = SpeciesConfig::default()
///     .with_population_size(30)
///     .with_max_genome_length(24)
///     .with_mutation_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesConfig {
    /// Number of genomes per species, fixed at spawn time.
    pub population_size: usize,

    /// Upper bound of the genome length drawn when a species is spawned.
    ///
    /// Each new species picks a length uniformly in `1..=max_genome_length`.
    pub max_genome_length: usize,

    /// Fraction of loci mutated per offspring (0.0–1.0).
    ///
    /// Each offspring receives `round(mutation_rate × length)` ±1 steps.
    pub mutation_rate: f64,

    /// Randomize every locus of a spawned genome instead of only the first.
    pub uniform_init: bool,

    /// Whether to score a new generation in parallel using rayon.
    ///
    /// Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for SpeciesConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_genome_length: 64,
            mutation_rate: 0.05,
            uniform_init: false,
            parallel: true,
        }
    }
}

impl SpeciesConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum genome length.
    pub fn with_max_genome_length(mut self, n: usize) -> Self {
        self.max_genome_length = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables full random initialization.
    pub fn with_uniform_init(mut self, uniform: bool) -> Self {
        self.uniform_init = uniform;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 1 {
            return Err(Error::PopulationTooSmall {
                min: 1,
                actual: self.population_size,
            });
        }
        if self.max_genome_length < 1 {
            return Err(Error::EmptyGenome);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
