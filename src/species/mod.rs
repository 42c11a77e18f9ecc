//! Single-population evolution.
//!
//! A [`Species`] is one sub-population of equal-length genomes sharing a
//! fitness function. It has two transitions: *spawn* (random
//! initialization, age 0) and *advance* (one generation with single-slot
//! elitism and fitness-proportionate parent selection).
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), elitist strategy in "An Analysis of the Behavior of a
//!   Class of Genetic Adaptive Systems"

mod config;
mod types;

pub use config::SpeciesConfig;
pub use types::Species;
