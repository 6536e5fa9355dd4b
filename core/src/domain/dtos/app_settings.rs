use super::{
    edge_weight::EdgeWeight,
    genetic_algorithm_parameter::{GeneticAlgorithmParameter, ParetoSetParameter},
    genetic_algorithm_selection::GeneticAlgorithmSelection,
    model_reference::MetaModel,
    mutation_weight::MutationWeight,
    objective::Objective,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Display toggles and initial choices of the form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiSettings {
    /// Index of the meta model selected when the form starts.
    pub selected_conceptual_model_index: usize,

    /// Whether custom edge weights are sent by default.
    pub is_use_custom_edge_weights: bool,

    #[serde(default)]
    pub is_show_edge_weight_table: bool,

    #[serde(default)]
    pub is_show_objectives_table: bool,
}

/// The settings document loaded once at startup.
///
/// It supplies every initial value of the form. The document is owned by the
/// caller and passed by reference to whoever needs it.
///
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub genetic_algorithm_selections: Vec<GeneticAlgorithmSelection>,

    #[serde(default)]
    pub displayed_edge_weight_columns: Vec<String>,

    pub edge_weights: Vec<EdgeWeight>,

    #[serde(default)]
    pub displayed_objective_columns: Vec<String>,

    pub number_of_elements_per_module: u32,

    pub is_use_weighted_sum_method: bool,

    pub objectives: Vec<Objective>,

    pub meta_models: Vec<MetaModel>,

    pub initial_genetic_algorithm_parameter: GeneticAlgorithmParameter,

    pub initial_pareto_set_parameter: ParetoSetParameter,

    pub initial_mutation_weight_parameter: MutationWeight,

    pub ui_settings: UiSettings,

    /// Help text keyed by form field name.
    #[serde(default)]
    pub tooltips: BTreeMap<String, String>,
}

impl AppSettings {
    pub fn tooltip(&self, field: &str) -> Option<&str> {
        self.tooltips.get(field).map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::AppSettings;

    pub(crate) const SETTINGS: &str = r#"{
        "geneticAlgorithmSelections": [
            {
                "chromosomeEncoding": "LINEAR_LINKAGE_ENCODING",
                "singleObjectiveOffspringSelector": ["TOURNAMENT_SELECTOR", "ROULETTE_WHEEL_SELECTOR"],
                "multiObjectiveOffspringSelector": ["NSGA2_SELECTOR", "UFTS"],
                "singleObjectiveSurvivorSelector": ["ELITE_SELECTOR", "TRUNCATION_SELECTOR"],
                "multiObjectiveSurvivorSelector": ["NSGA2_SELECTOR", "UFTS"],
                "crossovers": ["GROUP_CROSSOVER", "SINGLE_POINT_CROSSOVER"],
                "mutations": ["GRAFT_MUTATOR", "SWAP_MUTATOR"]
            },
            {
                "chromosomeEncoding": "INTEGER_ENCODING",
                "singleObjectiveOffspringSelector": ["TOURNAMENT_SELECTOR"],
                "multiObjectiveOffspringSelector": ["NSGA2_SELECTOR"],
                "singleObjectiveSurvivorSelector": ["ELITE_SELECTOR"],
                "multiObjectiveSurvivorSelector": ["NSGA2_SELECTOR"],
                "crossovers": ["UNIFORM_CROSSOVER"],
                "mutations": ["SWAP_MUTATOR"]
            }
        ],
        "displayedEdgeWeightColumns": ["name", "weight", "delete"],
        "edgeWeights": [
            {"name": "association", "weight": 2},
            {"name": "generalisation", "weight": 5}
        ],
        "displayedObjectiveColumns": ["objectiveType", "isSelected", "objectiveWeight"],
        "numberOfElementsPerModule": 6,
        "isUseWeightedSumMethod": false,
        "objectives": [
            {"objectiveType": "COUPLING", "isSelected": true, "objectiveWeight": 1},
            {"objectiveType": "COHESION", "isSelected": true, "objectiveWeight": 0.5},
            {"objectiveType": "MODULARITY", "isSelected": false, "objectiveWeight": 2}
        ],
        "metaModels": [
            {"label": "Papyrus UML", "conceptualModels": ["UML"]},
            {"label": "Archi", "conceptualModels": ["Archimate"]},
            {"label": "ADOxx", "conceptualModels": ["EPC", "ER", "OWL"]}
        ],
        "initialGeneticAlgorithmParameter": {
            "numberOfGenerations": 100,
            "countPopulation": 50,
            "mutationProbability": 0.05,
            "crossoverProbability": 0.8,
            "convergenceRate": 0.0001,
            "convergedGeneRate": 0.9,
            "tournamentSize": 3
        },
        "initialParetoSetParameter": {
            "minimumParetoSetSize": 5,
            "maximumParetoSetSize": 10
        },
        "initialMutationWeightParameter": {
            "splitModulesWeight": 1,
            "combineModulesWeight": 1,
            "moveElementsBetweenModulesWeight": 2
        },
        "uiSettings": {
            "selectedConceptualModelIndex": 0,
            "isUseCustomEdgeWeights": true,
            "isShowEdgeWeightTable": false,
            "isShowObjectivesTable": false
        },
        "tooltips": {
            "chromosomeEncoding": "How a modularisation is encoded",
            "dtdFile": "The DTD schema exported with ADOxx models"
        }
    }"#;

    pub(crate) fn settings() -> AppSettings {
        serde_json::from_str(SETTINGS).expect("Invalid settings fixture")
    }
}
