//! Island-model configuration.

use crate::error::{Error, Result};
use crate::species::SpeciesConfig;

/// Configuration for the island-model search.
///
/// # Defaults
///
/// ```
/// use meal_evolve::gene_pool::GenePoolConfig;
///
/// let config = GenePoolConfig::default();
/// assert_eq!(config.island_count, 8);
/// assert_eq!(config.generations, 200);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use meal_evolve::gene_pool::GenePoolConfig;
///
/// let config = GenePoolConfig::default()
///     .with_island_count(4)
///     .with_generations(50)
///     .with_population_size(30)
///     .with_seed(42);
/// assert_eq!(config.species.population_size, 30);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenePoolConfig {
    /// Number of species kept alive at every epoch.
    pub island_count: usize,

    /// Maximum number of epochs, counting the initial one.
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Parameters shared by every species.
    pub species: SpeciesConfig,
}

impl Default for GenePoolConfig {
    fn default() -> Self {
        Self {
            island_count: 8,
            generations: 200,
            seed: None,
            species: SpeciesConfig::default(),
        }
    }
}

impl GenePoolConfig {
    /// Sets the island count.
    pub fn with_island_count(mut self, n: usize) -> Self {
        self.island_count = n;
        self
    }

    /// Sets the maximum number of epochs.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the species parameters.
    pub fn with_species(mut self, species: SpeciesConfig) -> Self {
        self.species = species;
        self
    }

    /// Sets the per-species population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.species = self.species.with_population_size(n);
        self
    }

    /// Sets the maximum genome length.
    pub fn with_max_genome_length(mut self, n: usize) -> Self {
        self.species = self.species.with_max_genome_length(n);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.species = self.species.with_mutation_rate(rate);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.species = self.species.with_parallel(parallel);
        self
    }

    /// Validates the configuration, including the species parameters.
    pub fn validate(&self) -> Result<()> {
        if self.island_count < 1 {
            return Err(Error::NoIslands);
        }
        if self.generations < 1 {
            return Err(Error::NoGenerations);
        }
        self.species.validate()
    }
}
