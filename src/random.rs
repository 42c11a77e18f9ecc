//! Seeded random number generation.
//!
//! Every search entry point threads one generator through the run instead of
//! reaching for a process-wide source, so a fixed seed replays a run exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a generator deterministically derived from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh one when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
