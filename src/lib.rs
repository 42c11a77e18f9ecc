//! Domain-agnostic evolutionary search over weighted soft-constraint scores.
//!
//! Candidates are judged by a [`Scores`](score::Scores) sheet: each raw
//! measurement is mapped into `[0, 1]` by a soft-constraint function built
//! from critical and optimal bounds, then weighted and summed. On top of
//! that scoring model sit two search engines:
//!
//! - **Island model** ([`gene_pool`]): fixed-length discrete [`genome`]s
//!   evolve in independent [`species`] with elitism, roulette-wheel
//!   selection, one-point crossover and step mutation. Species die out with
//!   a chance favouring the weak and the old, and are replaced by fresh ones.
//! - **Steady-state search** ([`steady_state`]): one sorted population of any
//!   candidate type, grown one child at a time through a caller-supplied
//!   mate operator until a stop signal.
//!
//! Both engines rank candidates through memoized [`evaluation`]s. Random
//! state is always threaded explicitly; a seed makes a run reproducible.
//!
//! # Features
//!
//! - `parallel` (default): scores fresh generations with rayon.
//! - `serde`: serialization for score parameters, single scores and genomes.

pub mod error;
pub mod evaluation;
pub mod gene_pool;
pub mod genome;
pub mod random;
pub mod score;
pub mod species;
pub mod steady_state;

pub use error::{Error, Result};
pub use evaluation::{fitness_fn, Evaluation, Evaluations, FitnessFn};
pub use genome::Genome;
pub use score::{Requirement, ScoreFunction, ScoreParams, Scores};
