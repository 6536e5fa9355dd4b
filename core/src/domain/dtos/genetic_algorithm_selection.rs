use serde::{Deserialize, Serialize};

/// A named set of genetic algorithm building blocks.
///
/// Each entry of the settings document describes one chromosome encoding and
/// the operators compatible with it. Offspring and survivor selectors are
/// split by optimisation mode, since single objective (weighted sum) and
/// multi objective (pareto) runs accept different selectors.
///
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneticAlgorithmSelection {
    /// The chromosome encoding name.
    pub chromosome_encoding: String,

    /// Offspring selectors available when the weighted sum method is used.
    pub single_objective_offspring_selector: Vec<String>,

    /// Offspring selectors available for pareto optimisation.
    pub multi_objective_offspring_selector: Vec<String>,

    /// Survivor selectors available when the weighted sum method is used.
    pub single_objective_survivor_selector: Vec<String>,

    /// Survivor selectors available for pareto optimisation.
    pub multi_objective_survivor_selector: Vec<String>,

    /// Crossover operator names.
    pub crossovers: Vec<String>,

    /// Mutation operator names.
    pub mutations: Vec<String>,
}

impl GeneticAlgorithmSelection {
    pub fn offspring_selectors(&self, is_single_objective: bool) -> &[String] {
        match is_single_objective {
            true => &self.single_objective_offspring_selector,
            false => &self.multi_objective_offspring_selector,
        }
    }

    pub fn survivor_selectors(&self, is_single_objective: bool) -> &[String] {
        match is_single_objective {
            true => &self.single_objective_survivor_selector,
            false => &self.multi_objective_survivor_selector,
        }
    }
}

/// The operator names resolved from a selection at submit time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneticAlgorithmSelectionParameter {
    pub chromosome_encoding: String,
    pub offspring_selector: String,
    pub survivor_selector: String,
    pub crossover_type: String,
    pub mutation_type: String,
}
