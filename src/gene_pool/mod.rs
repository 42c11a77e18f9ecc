//! Island-model search over genomes.
//!
//! A [`GenePool`] holds a fixed number of [`Species`](crate::species::Species),
//! each evolving independently. Every epoch each species survives with a
//! chance that rewards fitness and youth; extinct islands are refilled with
//! freshly spawned species, so the island count never changes.
//!
//! # Key Types
//!
//! - [`GenePoolConfig`]: island count, epoch budget, seed, species parameters
//! - [`GenePool`]: one epoch's islands and the global best genome
//! - [`GenePoolRunner`]: drives epochs under a caller-controlled stop signal
//! - [`GenePoolResult`]: best genome, final pool, and fitness history
//!
//! # References
//!
//! - Whitley, Rana & Heckendorn (1998), "The Island Model Genetic Algorithm:
//!   On Separability, Population Size and Convergence"

mod config;
mod runner;
mod types;

pub use config::GenePoolConfig;
pub use runner::{GenePoolResult, GenePoolRunner};
pub use types::{GenePool, PoolBounds};
