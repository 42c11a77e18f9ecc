//! A set of species forming an island model.

use super::config::GenePoolConfig;
use crate::error::Result;
use crate::evaluation::{Evaluation, FitnessFn};
use crate::genome::Genome;
use crate::score::Requirement;
use crate::species::Species;
use rand::Rng;
use std::sync::OnceLock;

/// Fitness and age extremes across the current islands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolBounds {
    pub worst_fitness: f64,
    pub best_fitness: f64,
    pub youngest_age: usize,
    pub oldest_age: usize,
}

impl PoolBounds {
    /// Extremes of `(fitness, age)` pairs, or `None` when there are none.
    pub fn from_pairs<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, usize)>,
    {
        let mut pairs = pairs.into_iter();
        let (fitness, age) = pairs.next()?;
        let mut bounds = Self {
            worst_fitness: fitness,
            best_fitness: fitness,
            youngest_age: age,
            oldest_age: age,
        };
        for (fitness, age) in pairs {
            bounds.worst_fitness = bounds.worst_fitness.min(fitness);
            bounds.best_fitness = bounds.best_fitness.max(fitness);
            bounds.youngest_age = bounds.youngest_age.min(age);
            bounds.oldest_age = bounds.oldest_age.max(age);
        }
        Some(bounds)
    }

    /// Survival threshold of one species: `fitness_bonus + age_bonus`.
    ///
    /// `fitness_bonus` is 1 for the fittest and 0 for the least fit (1 for
    /// everyone when all are equal). `age_bonus` is 1 for the youngest and 0
    /// for the oldest (0 for everyone when all ages are equal). A species
    /// survives when a uniform draw in `[0, 1)` falls below the threshold.
    pub fn survival_chance(&self, fitness: f64, age: usize) -> f64 {
        let fitness_range = self.best_fitness - self.worst_fitness;
        let fitness_bonus = if fitness_range > 0.0 {
            (fitness - self.worst_fitness) / fitness_range
        } else {
            1.0
        };
        let age_range = self.oldest_age - self.youngest_age;
        let age_bonus = if age_range > 0 {
            self.oldest_age.saturating_sub(age) as f64 / age_range as f64
        } else {
            0.0
        };
        fitness_bonus + age_bonus
    }
}

/// A fixed number of species evolving side by side.
///
/// Each [`advance`](Self::advance) lets every species survive with a chance
/// that grows with fitness and youth; survivors evolve one generation, the
/// extinct are replaced by freshly spawned species of age 0. No genomes
/// migrate between islands.
///
/// The configuration is validated once at construction and kept for every
/// later epoch.
pub struct GenePool<K> {
    config: GenePoolConfig,
    species: Vec<Species<K>>,
    fitness: FitnessFn<Genome, K>,
    epoch: usize,
    best: OnceLock<Option<usize>>,
}

impl<K: Requirement> GenePool<K> {
    /// Spawns `config.island_count` random species.
    pub fn new<R: Rng>(
        config: &GenePoolConfig,
        fitness: FitnessFn<Genome, K>,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::seed(config, fitness, rng))
    }

    pub(crate) fn seed<R: Rng>(
        config: &GenePoolConfig,
        fitness: FitnessFn<Genome, K>,
        rng: &mut R,
    ) -> Self {
        let species = (0..config.island_count)
            .map(|_| Species::seed(&config.species, fitness.clone(), rng))
            .collect();
        Self {
            config: config.clone(),
            species,
            fitness,
            epoch: 0,
            best: OnceLock::new(),
        }
    }

    /// Runs one epoch across all islands.
    pub fn advance<R: Rng>(&self, rng: &mut R) -> Self {
        let config = &self.config;
        let mut next = Vec::with_capacity(config.island_count);

        if let Some(bounds) = self.bounds() {
            for species in &self.species {
                let chance = bounds.survival_chance(species.fitness(), species.age());
                if rng.random_range(0.0..1.0) < chance {
                    next.push(species.advance(&config.species, rng));
                } else {
                    log::trace!(
                        "species extinct at age {} with fitness {:.4}",
                        species.age(),
                        species.fitness()
                    );
                }
            }
        }

        let extinct = config.island_count.saturating_sub(next.len());
        for _ in 0..extinct {
            next.push(Species::seed(&config.species, self.fitness.clone(), rng));
        }
        if extinct > 0 {
            log::trace!("spawned {extinct} replacement species");
        }

        Self {
            config: self.config.clone(),
            species: next,
            fitness: self.fitness.clone(),
            epoch: self.epoch + 1,
            best: OnceLock::new(),
        }
    }

    /// Fitness and age extremes of the current islands.
    pub fn bounds(&self) -> Option<PoolBounds> {
        PoolBounds::from_pairs(self.species.iter().map(|s| (s.fitness(), s.age())))
    }

    /// Index of the species holding the best genome; the first on ties.
    pub fn best_species_index(&self) -> Option<usize> {
        *self.best.get_or_init(|| {
            let mut best: Option<(usize, f64)> = None;
            for (i, species) in self.species.iter().enumerate() {
                if species.is_empty() {
                    continue;
                }
                let fitness = species.fitness();
                match best {
                    Some((_, top)) if fitness <= top => {}
                    _ => best = Some((i, fitness)),
                }
            }
            best.map(|(i, _)| i)
        })
    }

    /// The best genome across all islands.
    pub fn best(&self) -> Option<&Evaluation<Genome, K>> {
        self.best_species_index()
            .and_then(|i| self.species[i].best())
    }

    /// Total score of [`best`](Self::best), or 0 when there is none.
    pub fn best_score(&self) -> f64 {
        self.best().map_or(0.0, Evaluation::total_score)
    }

    /// The configuration every epoch runs with.
    pub fn config(&self) -> &GenePoolConfig {
        &self.config
    }

    pub fn species(&self) -> &[Species<K>] {
        &self.species
    }

    /// Number of epochs since the pool was created.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn fitness_fn(&self) -> &FitnessFn<Genome, K> {
        &self.fitness
    }
}

impl<K: Requirement> std::fmt::Debug for GenePool<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenePool")
            .field("epoch", &self.epoch)
            .field("species", &self.species)
            .finish()
    }
}
