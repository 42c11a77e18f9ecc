//! Weighted aggregation of satisfaction degrees.

use super::functions::ScoreFunction;
use super::params::ScoreParams;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a requirement (a nutrient, a limit, any scored aspect).
///
/// Blanket-implemented for every type with the listed bounds, so domain
/// enums and strings work directly.
pub trait Requirement: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> Requirement for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// One weighted satisfaction degree.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    raw_score: f64,
    weight: f64,
}

impl Score {
    /// Validated score: `raw_score` in `[0, 1]`, `weight` finite and non-negative.
    pub fn new(raw_score: f64, weight: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&raw_score) {
            return Err(Error::InvalidRawScore(raw_score));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight(weight));
        }
        Ok(Self { raw_score, weight })
    }

    /// Satisfaction degree in `[0, 1]`.
    pub fn raw_score(&self) -> f64 {
        self.raw_score
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// `raw_score × weight`.
    pub fn weighted_score(&self) -> f64 {
        self.raw_score * self.weight
    }

    /// How much of the weight was not earned: `weight - weighted_score`.
    pub fn deficit(&self) -> f64 {
        self.weight - self.weighted_score()
    }
}

/// External table mapping a requirement to its soft-constraint bounds.
///
/// `None` means the requirement does not apply to the current subject; it
/// is skipped, not an error.
pub trait RequirementLimits<K> {
    fn limits(&self, requirement: &K) -> Option<ScoreParams>;
}

impl<K: Eq + Hash> RequirementLimits<K> for HashMap<K, ScoreParams> {
    fn limits(&self, requirement: &K) -> Option<ScoreParams> {
        self.get(requirement).copied()
    }
}

impl<K, F> RequirementLimits<K> for F
where
    F: Fn(&K) -> Option<ScoreParams>,
{
    fn limits(&self, requirement: &K) -> Option<ScoreParams> {
        self(requirement)
    }
}

/// A recorded score with its requirement and occurrence index.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry<K> {
    pub requirement: K,
    /// Occurrence of `requirement` (0 for the first, 1 for the second, ...).
    pub index: usize,
    pub score: Score,
}

/// All scores of one candidate.
///
/// Built once per fitness evaluation, then read-only. Totals and the
/// worst entry are maintained incrementally on every insertion.
///
/// # Examples
///
/// ```
/// use meal_evolve::score::Scores;
///
/// let mut scores = Scores::new();
/// scores.add_score("energy", 0.5, 2.0)?;
/// scores.add_score("fiber", 1.0, 1.0)?;
/// assert_eq!(scores.total_score(), 2.0);
/// assert_eq!(scores.weight_sum(), 3.0);
/// assert_eq!(scores.worst().unwrap().requirement, "energy");
/// # Ok::<(), meal_evolve::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scores<K> {
    entries: Vec<ScoreEntry<K>>,
    occurrences: HashMap<K, usize>,
    total_score: f64,
    weight_sum: f64,
    worst: Option<usize>,
    function: ScoreFunction,
}

impl<K: Requirement> Default for Scores<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Requirement> Scores<K> {
    /// Empty score sheet using the logistic shape for standard scores.
    pub fn new() -> Self {
        Self::with_function(ScoreFunction::default())
    }

    /// Empty score sheet using `function` for standard scores.
    pub fn with_function(function: ScoreFunction) -> Self {
        Self {
            entries: Vec::new(),
            occurrences: HashMap::new(),
            total_score: 0.0,
            weight_sum: 0.0,
            worst: None,
            function,
        }
    }

    /// Records a raw satisfaction degree and returns its occurrence index.
    ///
    /// Fails without recording anything when `raw_score` is outside `[0, 1]`
    /// or `weight` is negative or not finite.
    pub fn add_score(&mut self, requirement: K, raw_score: f64, weight: f64) -> Result<usize> {
        let score = Score::new(raw_score, weight)?;
        Ok(self.push(requirement, score))
    }

    fn push(&mut self, requirement: K, score: Score) -> usize {
        let slot = self.occurrences.entry(requirement.clone()).or_insert(0);
        let index = *slot;
        *slot += 1;

        self.total_score += score.weighted_score();
        self.weight_sum += score.weight();

        let position = self.entries.len();
        let replaces_worst = match self.worst {
            None => true,
            Some(w) => score.deficit() > self.entries[w].score.deficit(),
        };
        if replaces_worst {
            self.worst = Some(position);
        }

        self.entries.push(ScoreEntry {
            requirement,
            index,
            score,
        });
        index
    }

    /// Scores a raw measurement against explicit bounds.
    ///
    /// A measurement that cannot be scored (NaN) earns 0.
    pub fn add_scored_value(&mut self, requirement: K, value: f64, params: &ScoreParams) -> usize {
        let degree = self.function.standard(value, params);
        let raw_score = if degree.is_nan() {
            0.0
        } else {
            degree.clamp(0.0, 1.0)
        };
        // ScoreParams already guarantees a valid weight.
        let score = Score {
            raw_score,
            weight: params.weight(),
        };
        self.push(requirement, score)
    }

    /// Scores a raw measurement against the bounds in `limits`.
    ///
    /// Returns `None` without recording anything when the requirement has no
    /// entry in the table.
    pub fn add_standard_score<L>(&mut self, requirement: K, value: f64, limits: &L) -> Option<usize>
    where
        L: RequirementLimits<K> + ?Sized,
    {
        let params = limits.limits(&requirement)?;
        Some(self.add_scored_value(requirement, value, &params))
    }

    /// Sum of all weighted scores.
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> f64 {
        self.weight_sum
    }

    /// `total_score / weight_sum`, or 0 when nothing is weighted.
    pub fn normalized_score(&self) -> f64 {
        if self.weight_sum > 0.0 {
            self.total_score / self.weight_sum
        } else {
            0.0
        }
    }

    /// Entry with the greatest weighted deficit; the earliest one on ties.
    pub fn worst(&self) -> Option<&ScoreEntry<K>> {
        self.worst.map(|w| &self.entries[w])
    }

    /// All `(requirement, index, raw_score)` triples, weakest first.
    pub fn relative_scores(&self) -> Vec<(K, usize, f64)> {
        let mut relative: Vec<(K, usize, f64)> = self
            .entries
            .iter()
            .map(|e| (e.requirement.clone(), e.index, e.score.raw_score()))
            .collect();
        relative.sort_by(|a, b| a.2.total_cmp(&b.2));
        relative
    }

    /// Scores recorded for one requirement, in occurrence order.
    pub fn scores_for<'a>(&'a self, requirement: &'a K) -> impl Iterator<Item = &'a Score> + 'a {
        self.entries
            .iter()
            .filter(move |e| &e.requirement == requirement)
            .map(|e| &e.score)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreEntry<K>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shape used by [`add_standard_score`](Self::add_standard_score).
    pub fn function(&self) -> ScoreFunction {
        self.function
    }
}
