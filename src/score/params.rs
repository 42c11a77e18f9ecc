//! Boundary points of one soft constraint.

use crate::error::{Error, Result};

/// Sentinel for "no upper limit".
///
/// An `upper_optimal` or `upper_critical` at this value disables the upper
/// side of the constraint: the degree from above is always 1.
pub const UNBOUNDED: f64 = f64::MAX;

/// The four boundary points and the weight of a soft constraint.
///
/// Values inside `[lower_optimal, upper_optimal]` are fully satisfying.
/// Values outside `[lower_critical, upper_critical]` are poor. Between the
/// two the satisfaction degree falls off according to the selected
/// [`ScoreFunction`](super::ScoreFunction).
///
/// Invariant: `lower_critical <= lower_optimal <= upper_optimal <= upper_critical`
/// and `weight >= 0`, checked by every constructor.
///
/// # Examples
///
/// ```
/// use meal_evolve::score::ScoreParams;
///
/// // Protein: at least 50 g, ideally 60 g or more.
/// let protein = ScoreParams::at_least(50.0, 60.0, 2.0).unwrap();
/// assert!(protein.has_no_upper_limit());
///
/// // Sodium: ideally below 1500 mg, critical above 2300 mg.
/// let sodium = ScoreParams::at_most(1500.0, 2300.0, 1.0).unwrap();
/// assert!(sodium.has_no_lower_limit());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreParams {
    lower_critical: f64,
    lower_optimal: f64,
    upper_optimal: f64,
    upper_critical: f64,
    weight: f64,
}

impl ScoreParams {
    /// Creates parameters from explicit boundary points.
    pub fn new(
        lower_critical: f64,
        lower_optimal: f64,
        upper_optimal: f64,
        upper_critical: f64,
        weight: f64,
    ) -> Result<Self> {
        // Written as negated `<=` so that NaN bounds are rejected too.
        let ordered = lower_critical <= lower_optimal
            && lower_optimal <= upper_optimal
            && upper_optimal <= upper_critical;
        if !ordered {
            return Err(Error::UnorderedBounds {
                lower_critical,
                lower_optimal,
                upper_optimal,
                upper_critical,
            });
        }
        if !(weight.is_finite() && weight >= 0.0) {
            return Err(Error::InvalidWeight(weight));
        }
        Ok(Self {
            lower_critical,
            lower_optimal,
            upper_optimal,
            upper_critical,
            weight,
        })
    }

    /// Symmetric constraint around `optimum`.
    ///
    /// Margins are relative: `optimal_margin = 0.1` makes `[0.9, 1.1] × optimum`
    /// fully satisfying, `critical_margin = 0.5` puts the critical points at
    /// `0.5 × optimum` and `1.5 × optimum`.
    pub fn around(
        optimum: f64,
        optimal_margin: f64,
        critical_margin: f64,
        weight: f64,
    ) -> Result<Self> {
        Self::new(
            optimum * (1.0 - critical_margin),
            optimum * (1.0 - optimal_margin),
            optimum * (1.0 + optimal_margin),
            optimum * (1.0 + critical_margin),
            weight,
        )
    }

    /// One-sided lower bound: more is never penalized.
    pub fn at_least(lower_critical: f64, lower_optimal: f64, weight: f64) -> Result<Self> {
        Self::new(lower_critical, lower_optimal, UNBOUNDED, UNBOUNDED, weight)
    }

    /// One-sided upper bound: the lower side is disabled.
    pub fn at_most(upper_optimal: f64, upper_critical: f64, weight: f64) -> Result<Self> {
        Self::new(0.0, 0.0, upper_optimal, upper_critical, weight)
    }

    /// Explicit optimal range with critical points a relative margin outside it.
    pub fn within(
        lower_optimal: f64,
        upper_optimal: f64,
        critical_margin: f64,
        weight: f64,
    ) -> Result<Self> {
        Self::new(
            lower_optimal * (1.0 - critical_margin),
            lower_optimal,
            upper_optimal,
            upper_optimal * (1.0 + critical_margin),
            weight,
        )
    }

    /// Returns a copy with a different weight.
    pub fn with_weight(self, weight: f64) -> Result<Self> {
        Self::new(
            self.lower_critical,
            self.lower_optimal,
            self.upper_optimal,
            self.upper_critical,
            weight,
        )
    }

    pub fn lower_critical(&self) -> f64 {
        self.lower_critical
    }

    pub fn lower_optimal(&self) -> f64 {
        self.lower_optimal
    }

    pub fn upper_optimal(&self) -> f64 {
        self.upper_optimal
    }

    pub fn upper_critical(&self) -> f64 {
        self.upper_critical
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// True when the lower side never penalizes (`lower_critical = lower_optimal = 0`).
    pub fn has_no_lower_limit(&self) -> bool {
        self.lower_critical == 0.0 && self.lower_optimal == 0.0
    }

    /// True when the upper side never penalizes.
    pub fn has_no_upper_limit(&self) -> bool {
        self.upper_optimal >= UNBOUNDED || self.upper_critical >= UNBOUNDED
    }
}
