use serde::{Deserialize, Serialize};

/// Tunable scalars of the genetic algorithm.
///
/// No cross-field invariant is enforced here. Values are forwarded as they
/// are and the backend is responsible for rejecting invalid combinations.
///
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneticAlgorithmParameter {
    /// The count of generations the algorithm goes through.
    pub number_of_generations: u32,

    /// The count of individuals in each generation.
    pub count_population: u32,

    /// Probability of mutating an individual, between 0.0 and 1.0.
    pub mutation_probability: f64,

    /// Probability of crossover between two parents, between 0.0 and 1.0.
    pub crossover_probability: f64,

    /// A gene is converged when its average value across the population is
    /// less than this rate.
    pub convergence_rate: f64,

    /// The rate of converged genes that truncates the evolution stream.
    pub converged_gene_rate: f64,

    /// The size of each tournament selection round.
    pub tournament_size: u32,
}

/// Bounds of the pareto set returned by multi objective runs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParetoSetParameter {
    pub minimum_pareto_set_size: u32,
    pub maximum_pareto_set_size: u32,
}
