//! Problem definition for steady-state search.

use crate::evaluation::Evaluation;
use crate::score::Requirement;
use rand::Rng;
use std::cmp::Ordering;

/// Evaluated candidate of a [`SteadyStateProblem`].
pub type Individual<P> =
    Evaluation<<P as SteadyStateProblem>::Candidate, <P as SteadyStateProblem>::Requirement>;

/// A domain plugged into the steady-state optimizer.
///
/// The optimizer never looks inside a candidate: it only creates, mates and
/// ranks [`Evaluation`]s through this trait.
///
/// # Implementing
///
/// ```ignore
/// struct Menu { fitness: FitnessFn<Vec<Dish>, Nutrient> }
///
/// impl SteadyStateProblem for Menu {
///     type Candidate = Vec<Dish>;
///     type Requirement = Nutrient;
///
///     fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual<Self> {
///         Evaluation::new(random_menu(rng), self.fitness.clone())
///     }
///
///     fn mate<R: Rng>(&self, a: &Individual<Self>, b: &Individual<Self>, rng: &mut R)
///         -> Individual<Self>
///     {
///         a.sibling(splice(a.candidate(), b.candidate(), rng))
///     }
/// }
/// ```
pub trait SteadyStateProblem: Sized {
    /// The candidate representation.
    type Candidate: Clone;

    /// Requirement identifiers used by the candidates' scores.
    type Requirement: Requirement;

    /// Builds one individual of the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual<Self>;

    /// Produces one child from two distinct parents.
    ///
    /// The child must carry its fitness function (or precomputed scores) so
    /// the optimizer can rank it.
    fn mate<R: Rng>(
        &self,
        parent1: &Individual<Self>,
        parent2: &Individual<Self>,
        rng: &mut R,
    ) -> Individual<Self>;

    /// Ranks two individuals; `Less` means `a` is better.
    ///
    /// The default ranks by total score, highest first.
    fn compare(&self, a: &Individual<Self>, b: &Individual<Self>) -> Ordering {
        b.total_score().total_cmp(&a.total_score())
    }

    /// Called whenever a new best individual enters the population,
    /// including once for the initial population.
    fn on_new_best(&self, _best: &Individual<Self>) {}
}
