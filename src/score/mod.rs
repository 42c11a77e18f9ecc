//! Multi-criteria soft-constraint scoring.
//!
//! Raw domain measurements (grams of protein, milligrams of sodium, ...) are
//! turned into satisfaction degrees in `[0, 1]` by a [`ScoreFunction`] using
//! the four boundary points of a [`ScoreParams`]. A [`Scores`] sheet collects
//! the weighted degrees of one candidate and keeps the total, the weight sum,
//! and the worst-offending entry.
//!
//! # Key Types
//!
//! - [`ScoreParams`]: critical/optimal bounds and weight of one requirement
//! - [`ScoreFunction`]: logistic (default) or piecewise-linear shape
//! - [`Scores`]: per-candidate aggregation
//! - [`RequirementLimits`]: the external requirements table

pub mod functions;
mod params;
mod scores;

pub use functions::ScoreFunction;
pub use params::{ScoreParams, UNBOUNDED};
pub use scores::{Requirement, RequirementLimits, Score, ScoreEntry, Scores};
