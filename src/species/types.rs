//! One sub-population of genomes evolving toward one fitness function.

use super::config::SpeciesConfig;
use crate::error::Result;
use crate::evaluation::{Evaluation, Evaluations, FitnessFn};
use crate::genome::Genome;
use crate::score::Requirement;
use rand::Rng;

/// A single island of the [`GenePool`](crate::gene_pool::GenePool).
///
/// All genomes of a species share one length, drawn when the species is
/// spawned. Each [`advance`](Self::advance) keeps the best genome
/// unchanged, refills the rest with roulette-selected, recombined and
/// mutated offspring, and increments the age by one.
pub struct Species<K> {
    age: usize,
    population: Evaluations<Genome, K>,
    fitness: FitnessFn<Genome, K>,
}

impl<K: Requirement> Species<K> {
    /// Spawns a fresh, randomly initialized species of age 0.
    pub fn spawn<R: Rng>(
        config: &SpeciesConfig,
        fitness: FitnessFn<Genome, K>,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::seed(config, fitness, rng))
    }

    /// Spawns without validating; `config` must already be valid.
    pub(crate) fn seed<R: Rng>(
        config: &SpeciesConfig,
        fitness: FitnessFn<Genome, K>,
        rng: &mut R,
    ) -> Self {
        let length = rng.random_range(1..=config.max_genome_length);
        let population: Evaluations<Genome, K> = (0..config.population_size)
            .map(|_| {
                let genome = if config.uniform_init {
                    Genome::random_uniform(length, rng)
                } else {
                    Genome::random(length, rng)
                };
                Evaluation::new(genome, fitness.clone())
            })
            .collect();
        population.force_scores(config.parallel);

        Self {
            age: 0,
            population,
            fitness,
        }
    }

    /// Produces the next generation.
    ///
    /// The population size stays what it was at spawn time; `config` only
    /// supplies the mutation rate and the parallelism switch.
    pub fn advance<R: Rng>(&self, config: &SpeciesConfig, rng: &mut R) -> Self {
        let target = self.population.len();
        let mut next: Vec<Evaluation<Genome, K>> = Vec::with_capacity(target);

        // Elitism: exactly one slot.
        if let Some(best) = self.population.best() {
            next.push(best.clone());
        }

        if self.population.total_weight() <= 0.0 && target > 1 {
            log::warn!(
                "species of age {} has zero total fitness; choosing parents uniformly",
                self.age
            );
        }

        while next.len() < target {
            let (Some(parent1), Some(parent2)) = (self.pick_parent(rng), self.pick_parent(rng))
            else {
                break;
            };
            let count = (target - next.len()).min(2);
            let offspring = parent1.candidate().recombine(
                parent2.candidate(),
                count,
                config.mutation_rate,
                rng,
            );
            if offspring.is_empty() {
                break;
            }
            next.extend(
                offspring
                    .into_iter()
                    .map(|genome| Evaluation::new(genome, self.fitness.clone())),
            );
        }

        let population = Evaluations::new(next);
        population.force_scores(config.parallel);

        Self {
            age: self.age + 1,
            population,
            fitness: self.fitness.clone(),
        }
    }

    /// Roulette-wheel parent, or a uniform pick when every score is zero.
    fn pick_parent<R: Rng>(&self, rng: &mut R) -> Option<&Evaluation<Genome, K>> {
        if let Some(parent) = self.population.select_probabilistically(rng) {
            return Some(parent);
        }
        if self.population.is_empty() {
            return None;
        }
        self.population.get(rng.random_range(0..self.population.len()))
    }

    /// Generations survived since spawning.
    pub fn age(&self) -> usize {
        self.age
    }

    pub fn population(&self) -> &Evaluations<Genome, K> {
        &self.population
    }

    pub fn best(&self) -> Option<&Evaluation<Genome, K>> {
        self.population.best()
    }

    /// Total score of the best member, or 0 for an empty species.
    pub fn fitness(&self) -> f64 {
        self.best().map_or(0.0, Evaluation::total_score)
    }

    /// Length shared by every genome of this species.
    pub fn genome_length(&self) -> usize {
        self.population.get(0).map_or(0, |e| e.candidate().len())
    }

    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }
}

impl<K: Requirement> std::fmt::Debug for Species<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Species")
            .field("age", &self.age)
            .field("size", &self.population.len())
            .field("genome_length", &self.genome_length())
            .field("fitness", &self.fitness())
            .finish()
    }
}
