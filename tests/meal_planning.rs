//! End-to-end: composing a meal from a small food table with both engines.

use meal_evolve::evaluation::{fitness_fn, Evaluation, FitnessFn};
use meal_evolve::gene_pool::{GenePoolConfig, GenePoolRunner};
use meal_evolve::genome::Genome;
use meal_evolve::score::{ScoreFunction, ScoreParams, Scores};
use meal_evolve::species::SpeciesConfig;
use meal_evolve::steady_state::{Individual, SteadyStateConfig, SteadyStateProblem, SteadyStateRunner};
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Nutrient {
    Energy,
    Protein,
    Fat,
    Fiber,
    Sugar,
}

const NUTRIENTS: [Nutrient; 5] = [
    Nutrient::Energy,
    Nutrient::Protein,
    Nutrient::Fat,
    Nutrient::Fiber,
    Nutrient::Sugar,
];

/// Per 100 g: energy (kcal), protein, fat, fiber, sugar (g).
const FOODS: [(&str, [f64; 5]); 5] = [
    ("rice", [130.0, 2.7, 0.3, 0.4, 0.1]),
    ("chicken", [165.0, 31.0, 3.6, 0.0, 0.0]),
    ("beans", [127.0, 8.7, 0.5, 6.4, 0.3]),
    ("broccoli", [34.0, 2.8, 0.4, 2.6, 1.7]),
    ("olive oil", [884.0, 0.0, 100.0, 0.0, 0.0]),
];

const MAX_PORTION: f64 = 300.0;

/// Sugar is deliberately absent: it does not apply to this meal.
fn limits() -> HashMap<Nutrient, ScoreParams> {
    HashMap::from([
        (Nutrient::Energy, ScoreParams::within(600.0, 800.0, 0.5, 3.0).unwrap()),
        (Nutrient::Protein, ScoreParams::at_least(15.0, 30.0, 2.0).unwrap()),
        (Nutrient::Fat, ScoreParams::at_most(30.0, 45.0, 1.0).unwrap()),
        (Nutrient::Fiber, ScoreParams::at_least(3.0, 8.0, 1.0).unwrap()),
    ])
}

fn totals(grams: &[f64]) -> [f64; 5] {
    let mut sum = [0.0; 5];
    for ((_, per_100g), &g) in FOODS.iter().zip(grams) {
        for (total, amount) in sum.iter_mut().zip(per_100g) {
            *total += amount * g / 100.0;
        }
    }
    sum
}

fn score_meal(grams: &[f64], table: &HashMap<Nutrient, ScoreParams>) -> Scores<Nutrient> {
    let mut scores = Scores::new();
    for (nutrient, value) in NUTRIENTS.iter().zip(totals(grams)) {
        scores.add_standard_score(*nutrient, value, table);
    }
    scores
}

fn portions(genome: &Genome) -> Vec<f64> {
    let mut decoder = genome.decoder();
    FOODS
        .iter()
        .map(|_| decoder.next_in_range(0.0, MAX_PORTION).unwrap_or(0.0))
        .collect()
}

fn genome_fitness() -> FitnessFn<Genome, Nutrient> {
    let table = Arc::new(limits());
    fitness_fn(move |genome: &Genome| score_meal(&portions(genome), &table))
}

#[test]
fn test_unlisted_requirement_is_skipped() {
    let scores = score_meal(&[100.0, 150.0, 200.0, 100.0, 5.0], &limits());
    assert_eq!(scores.len(), 4);
    assert_eq!(scores.scores_for(&Nutrient::Sugar).count(), 0);
    assert!((scores.weight_sum() - 7.0).abs() < 1e-12);
}

#[test]
fn test_hand_composed_meal_scores_well() {
    let scores = score_meal(&[100.0, 150.0, 200.0, 100.0, 5.0], &limits());
    assert!(scores.normalized_score() > 0.95);
}

#[test]
fn test_worst_requirement_names_the_problem() {
    // Only oil: fat far above the critical bound, no protein or fiber.
    let scores = score_meal(&[0.0, 0.0, 0.0, 0.0, 100.0], &limits());
    let worst = scores.worst().unwrap();
    assert_eq!(worst.requirement, Nutrient::Protein);
    let weakest = scores.relative_scores();
    assert!(weakest[0].2 <= weakest[weakest.len() - 1].2);
}

#[test]
fn test_piecewise_linear_scoring() {
    let table = limits();
    let mut scores = Scores::with_function(ScoreFunction::piecewise_linear());
    for (nutrient, value) in NUTRIENTS.iter().zip(totals(&[100.0, 150.0, 200.0, 100.0, 5.0])) {
        scores.add_standard_score(*nutrient, value, &table);
    }
    assert_eq!(scores.function(), ScoreFunction::piecewise_linear());
    assert!((scores.normalized_score() - 1.0).abs() < 1e-12);
}

#[test]
fn test_island_model_composes_meal() {
    let species = SpeciesConfig::default()
        .with_population_size(30)
        .with_max_genome_length(10)
        .with_mutation_rate(0.2)
        .with_uniform_init(true);
    let config = GenePoolConfig::default()
        .with_island_count(6)
        .with_generations(60)
        .with_species(species)
        .with_seed(2024);

    let result = GenePoolRunner::run(&config, genome_fitness()).unwrap();
    assert_eq!(result.epochs, 60);
    for pair in result.fitness_history.windows(2) {
        assert!(pair[1] >= pair[0]);
    }

    let best = result.best.unwrap();
    let normalized = best.scores().normalized_score();
    assert!(normalized > 0.6, "best meal scored only {normalized}");
}

#[test]
fn test_island_model_time_budget_through_callback() {
    let config = GenePoolConfig::default()
        .with_island_count(4)
        .with_generations(1_000_000)
        .with_population_size(10)
        .with_seed(1);
    let started = std::time::Instant::now();
    let budget = std::time::Duration::from_millis(50);

    let result =
        GenePoolRunner::find_best(&config, genome_fitness(), |_, _| started.elapsed() < budget)
            .unwrap();
    assert!(result.stopped);
    assert!(result.epochs < 1_000_000);
}

struct MealProblem {
    fitness: FitnessFn<Vec<f64>, Nutrient>,
}

impl SteadyStateProblem for MealProblem {
    type Candidate = Vec<f64>;
    type Requirement = Nutrient;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual<Self> {
        let grams = FOODS
            .iter()
            .map(|_| rng.random_range(0.0..MAX_PORTION))
            .collect();
        Evaluation::new(grams, self.fitness.clone())
    }

    fn mate<R: Rng>(
        &self,
        parent1: &Individual<Self>,
        parent2: &Individual<Self>,
        rng: &mut R,
    ) -> Individual<Self> {
        let child = parent1
            .candidate()
            .iter()
            .zip(parent2.candidate())
            .map(|(&a, &b)| {
                let pick = if rng.random_bool(0.5) { a } else { b };
                (pick + rng.random_range(-15.0..15.0)).clamp(0.0, MAX_PORTION)
            })
            .collect();
        parent1.sibling(child)
    }
}

#[test]
fn test_steady_state_composes_meal() {
    let table = Arc::new(limits());
    let problem = MealProblem {
        fitness: fitness_fn(move |grams: &Vec<f64>| score_meal(grams, &table)),
    };
    let config = SteadyStateConfig::default()
        .with_start_size(10)
        .with_max_size(40)
        .with_max_iterations(3000)
        .with_seed(7);

    let result = SteadyStateRunner::run(&problem, &config).unwrap();
    assert_eq!(result.population.len(), 40);
    for pair in result.population.windows(2) {
        assert!(pair[0].total_score() >= pair[1].total_score());
    }

    let best = result.best.unwrap();
    assert!(best.scores().normalized_score() > 0.8);
    let [energy, protein, _, _, _] = totals(best.candidate());
    assert!((300.0..=1200.0).contains(&energy), "energy {energy}");
    assert!(protein >= 15.0, "protein {protein}");
}
