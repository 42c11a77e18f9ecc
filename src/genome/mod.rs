//! Fixed-length discrete genomes.
//!
//! A [`Genome`] is a vector of genes in `[0, GENE_STATES - 1]`. The search
//! engine only recombines and mutates genes; the domain turns a genome into
//! concrete decisions by pulling normalized values from a [`Decoder`].
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover, shared-point recombination,
//!   and clamped ±1 point mutation

mod decoder;
pub mod operators;

pub use decoder::Decoder;

use rand::Rng;

/// Number of distinct values a gene can take.
pub const GENE_STATES: u8 = 16;

/// Largest gene value.
pub const MAX_GENE: u8 = GENE_STATES - 1;

/// An immutable vector of genes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    genes: Vec<u8>,
}

impl Genome {
    /// Creates a genome of `length` genes where only the first gene is random.
    ///
    /// The remaining genes start at 0 and diversify through mutation. See
    /// [`random_uniform`](Self::random_uniform) for a genome with every
    /// locus randomized.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let mut genes = vec![0; length];
        if let Some(first) = genes.first_mut() {
            *first = rng.random_range(0..GENE_STATES);
        }
        Self { genes }
    }

    /// Creates a genome of `length` genes, each drawn uniformly.
    pub fn random_uniform<R: Rng>(length: usize, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| rng.random_range(0..GENE_STATES)).collect();
        Self { genes }
    }

    /// Creates a genome from explicit genes, clamping each to [`MAX_GENE`].
    pub fn from_genes(genes: Vec<u8>) -> Self {
        let genes = genes.into_iter().map(|g| g.min(MAX_GENE)).collect();
        Self { genes }
    }

    pub fn genes(&self) -> &[u8] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// A fresh cursor over this genome's normalized gene values.
    pub fn decoder(&self) -> Decoder<'_> {
        Decoder::new(&self.genes)
    }

    /// Crossover with `other` at one shared point, then mutation.
    ///
    /// See [`operators::recombine`].
    pub fn recombine<R: Rng>(
        &self,
        other: &Genome,
        count: usize,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Vec<Genome> {
        operators::recombine(&self.genes, &other.genes, count, mutation_rate, rng)
            .into_iter()
            .map(|genes| Genome { genes })
            .collect()
    }
}
