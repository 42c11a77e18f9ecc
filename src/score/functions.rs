//! Satisfaction degree of a raw measurement against a soft constraint.
//!
//! Two shapes are provided:
//!
//! - [`logistic`]: two sigmoids, one per side, combined by `min`. Continuous
//!   everywhere; reaches 0.999 exactly at the optimal boundary and 0.001 at
//!   the critical boundary. The upper tail approaches 0 without reaching it.
//! - [`piecewise_linear`]: 1 inside the optimal range, linear ramps to a
//!   small floor at the critical points, then linear decay to exactly 0 at an
//!   explicit finite upper bound.
//!
//! The two are not interchangeable: they disagree at the boundaries and in
//! range. [`ScoreFunction`] selects one.

use super::params::ScoreParams;

/// Degree reached by the logistic shape at an optimal boundary.
pub const OPTIMAL_DEGREE: f64 = 0.999;

/// Default degree of the piecewise-linear shape at a critical boundary.
pub const DEFAULT_CRITICAL_FLOOR: f64 = 0.1;

/// Default ratio between the piecewise-linear zero point and `upper_critical`.
pub const DEFAULT_UPPER_BOUND_FACTOR: f64 = 1000.0;

/// Selectable satisfaction shape.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScoreFunction {
    /// Two-sided sigmoid, `min`-combined. Preferred.
    #[default]
    Logistic,

    /// Piecewise-linear ramps.
    ///
    /// `critical_floor` is the degree at the critical points; beyond
    /// `upper_bound_factor × upper_critical` the degree is exactly 0.
    PiecewiseLinear {
        critical_floor: f64,
        upper_bound_factor: f64,
    },
}

impl ScoreFunction {
    /// Piecewise-linear shape with the default floor (0.1) and bound factor (1000).
    pub const fn piecewise_linear() -> Self {
        ScoreFunction::PiecewiseLinear {
            critical_floor: DEFAULT_CRITICAL_FLOOR,
            upper_bound_factor: DEFAULT_UPPER_BOUND_FACTOR,
        }
    }

    /// Satisfaction degree of `value` in `[0, 1]`.
    pub fn standard(&self, value: f64, params: &ScoreParams) -> f64 {
        match *self {
            ScoreFunction::Logistic => logistic(value, params),
            ScoreFunction::PiecewiseLinear {
                critical_floor,
                upper_bound_factor,
            } => piecewise_linear(
                value,
                params,
                critical_floor,
                upper_bound_factor * params.upper_critical(),
            ),
        }
    }
}

/// Logistic satisfaction degree.
///
/// Each side is a sigmoid centred halfway between its critical and optimal
/// point, with steepness chosen so the optimal point maps to
/// [`OPTIMAL_DEGREE`]. A side whose critical and optimal points coincide is
/// a hard step.
pub fn logistic(value: f64, params: &ScoreParams) -> f64 {
    let lower = if params.has_no_lower_limit() {
        1.0
    } else {
        rising_sigmoid(value, params.lower_critical(), params.lower_optimal())
    };
    let upper = if params.has_no_upper_limit() {
        1.0
    } else {
        falling_sigmoid(value, params.upper_optimal(), params.upper_critical())
    };
    lower.min(upper)
}

fn steepness(span: f64) -> f64 {
    let odds = OPTIMAL_DEGREE / (1.0 - OPTIMAL_DEGREE);
    2.0 * odds.ln() / span
}

fn rising_sigmoid(value: f64, critical: f64, optimal: f64) -> f64 {
    if optimal <= critical {
        return if value >= optimal { 1.0 } else { 0.0 };
    }
    let midpoint = critical + (optimal - critical) / 2.0;
    let k = steepness(optimal - critical);
    1.0 / (1.0 + (-k * (value - midpoint)).exp())
}

fn falling_sigmoid(value: f64, optimal: f64, critical: f64) -> f64 {
    if critical <= optimal {
        return if value <= optimal { 1.0 } else { 0.0 };
    }
    let midpoint = optimal + (critical - optimal) / 2.0;
    let k = steepness(critical - optimal);
    1.0 / (1.0 + (k * (value - midpoint)).exp())
}

/// Piecewise-linear satisfaction degree.
///
/// - `[lower_optimal, upper_optimal]` → 1
/// - `lower_critical → lower_optimal` ramps `critical_floor → 1`
/// - `0 → lower_critical` ramps `0 → critical_floor`
/// - `upper_optimal → upper_critical` ramps `1 → critical_floor`
/// - `upper_critical → upper_bound` ramps `critical_floor → 0`, then 0
pub fn piecewise_linear(
    value: f64,
    params: &ScoreParams,
    critical_floor: f64,
    upper_bound: f64,
) -> f64 {
    let lower = if params.has_no_lower_limit() {
        1.0
    } else {
        lower_ramp(value, params, critical_floor)
    };
    let upper = if params.has_no_upper_limit() {
        1.0
    } else {
        upper_ramp(value, params, critical_floor, upper_bound)
    };
    lower.min(upper)
}

fn lower_ramp(value: f64, params: &ScoreParams, floor: f64) -> f64 {
    let critical = params.lower_critical();
    let optimal = params.lower_optimal();
    if value >= optimal {
        1.0
    } else if value >= critical {
        // value < optimal here, so optimal > critical
        floor + (1.0 - floor) * (value - critical) / (optimal - critical)
    } else if critical > 0.0 && value > 0.0 {
        floor * value / critical
    } else {
        0.0
    }
}

fn upper_ramp(value: f64, params: &ScoreParams, floor: f64, upper_bound: f64) -> f64 {
    let optimal = params.upper_optimal();
    let critical = params.upper_critical();
    if value <= optimal {
        1.0
    } else if value <= critical {
        1.0 - (1.0 - floor) * (value - optimal) / (critical - optimal)
    } else if value < upper_bound {
        floor * (upper_bound - value) / (upper_bound - critical)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::params::UNBOUNDED;
    use proptest::prelude::*;

    fn params(lc: f64, lo: f64, uo: f64, uc: f64) -> ScoreParams {
        ScoreParams::new(lc, lo, uo, uc, 1.0).unwrap()
    }

    // ---- Logistic ----

    #[test]
    fn test_logistic_at_optimal_boundary() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        assert!((logistic(2.0, &p) - 0.999).abs() < 1e-6);
        assert!((logistic(3.0, &p) - 0.999).abs() < 1e-6);
    }

    #[test]
    fn test_logistic_below_critical() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        assert!(logistic(0.5, &p) < 0.01);
        assert!((logistic(1.0, &p) - 0.001).abs() < 1e-6);
    }

    #[test]
    fn test_logistic_inside_optimal_range() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        assert!(logistic(2.5, &p) >= 0.999);
    }

    #[test]
    fn test_logistic_upper_tail_never_zero() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        let far = logistic(20.0, &p);
        assert!(far < 1e-6);
        assert!(logistic(5.0, &p) > 0.0);
    }

    #[test]
    fn test_logistic_hard_step() {
        let p = params(2.0, 2.0, 3.0, 3.0);
        assert_eq!(logistic(1.999, &p), 0.0);
        assert_eq!(logistic(2.0, &p), 1.0);
        assert_eq!(logistic(3.0, &p), 1.0);
        assert_eq!(logistic(3.001, &p), 0.0);
    }

    #[test]
    fn test_logistic_disabled_sides() {
        let p = ScoreParams::at_least(1.0, 2.0, 1.0).unwrap();
        assert!(logistic(1e12, &p) > 0.999);

        let p = params(0.0, 0.0, 3.0, 4.0);
        assert_eq!(logistic(-5.0, &p), 1.0);
        assert_eq!(logistic(0.0, &p), 1.0);

        let p = params(0.0, 0.0, UNBOUNDED, UNBOUNDED);
        assert_eq!(logistic(42.0, &p), 1.0);
    }

    // ---- Piecewise-linear ----

    #[test]
    fn test_linear_optimal_range_is_one() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        for v in [2.0, 2.5, 3.0] {
            assert_eq!(piecewise_linear(v, &p, 0.1, 4000.0), 1.0);
        }
    }

    #[test]
    fn test_linear_critical_points_hit_floor() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        assert!((piecewise_linear(1.0, &p, 0.1, 4000.0) - 0.1).abs() < 1e-12);
        assert!((piecewise_linear(4.0, &p, 0.1, 4000.0) - 0.1).abs() < 1e-12);
        assert!((piecewise_linear(1.5, &p, 0.1, 4000.0) - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_linear_below_critical_ramps_from_zero() {
        let p = params(2.0, 4.0, 6.0, 8.0);
        assert_eq!(piecewise_linear(0.0, &p, 0.1, 8000.0), 0.0);
        assert!((piecewise_linear(1.0, &p, 0.1, 8000.0) - 0.05).abs() < 1e-12);
        assert_eq!(piecewise_linear(-1.0, &p, 0.1, 8000.0), 0.0);
    }

    #[test]
    fn test_linear_upper_bound_is_exactly_zero() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        assert_eq!(piecewise_linear(4000.0, &p, 0.1, 4000.0), 0.0);
        assert_eq!(piecewise_linear(5000.0, &p, 0.1, 4000.0), 0.0);
        assert!(piecewise_linear(2002.0, &p, 0.1, 4000.0) > 0.0);
    }

    #[test]
    fn test_score_function_dispatch() {
        let p = params(1.0, 2.0, 3.0, 4.0);
        let linear = ScoreFunction::piecewise_linear();
        assert_eq!(linear.standard(4000.0, &p), 0.0);
        assert!(ScoreFunction::Logistic.standard(4000.0, &p) >= 0.0);
        assert_eq!(ScoreFunction::default(), ScoreFunction::Logistic);
    }

    // ---- Properties ----

    fn arb_params() -> impl Strategy<Value = ScoreParams> {
        (0.0f64..50.0, 0.0f64..50.0, 0.0f64..50.0, 0.0f64..50.0).prop_map(|(a, b, c, d)| {
            let lc = a;
            let lo = lc + b;
            let uo = lo + c;
            let uc = uo + d;
            ScoreParams::new(lc, lo, uo, uc, 1.0).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_linear_is_one_inside_optimal(p in arb_params(), t in 0.0f64..=1.0) {
            let v = (p.lower_optimal() + t * (p.upper_optimal() - p.lower_optimal()))
                .clamp(p.lower_optimal(), p.upper_optimal());
            let f = ScoreFunction::piecewise_linear();
            prop_assert_eq!(f.standard(v, &p), 1.0);
        }

        #[test]
        fn prop_logistic_high_inside_optimal(p in arb_params(), t in 0.0f64..=1.0) {
            let v = (p.lower_optimal() + t * (p.upper_optimal() - p.lower_optimal()))
                .clamp(p.lower_optimal(), p.upper_optimal());
            prop_assert!(logistic(v, &p) >= OPTIMAL_DEGREE - 1e-9);
        }

        #[test]
        fn prop_degree_in_unit_interval(p in arb_params(), v in -100.0f64..300.0) {
            for f in [ScoreFunction::Logistic, ScoreFunction::piecewise_linear()] {
                let d = f.standard(v, &p);
                prop_assert!((0.0..=1.0).contains(&d));
            }
        }

        #[test]
        fn prop_monotone_outside_optimal(p in arb_params(), a in -100.0f64..300.0, b in -100.0f64..300.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for f in [ScoreFunction::Logistic, ScoreFunction::piecewise_linear()] {
                // A disabled lower side leaves only the upper sigmoid, which
                // keeps rising as values fall below zero.
                if hi < p.lower_optimal() && !p.has_no_lower_limit() {
                    prop_assert!(f.standard(lo, &p) <= f.standard(hi, &p) + 1e-12);
                }
                if lo > p.upper_optimal() {
                    prop_assert!(f.standard(lo, &p) + 1e-12 >= f.standard(hi, &p));
                }
            }
        }
    }
}
