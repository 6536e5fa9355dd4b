use super::to_anyhow;

use anyhow::{Error, Result};
use clap::Args;
use modcmga_core::domain::dtos::{
    app_settings::AppSettings, modularisation_form::ModularisationForm,
};
use modcmga_ports_lib::load_settings;
use std::{path::PathBuf, str::FromStr};
use tracing::warn;

/// A `NAME=VALUE` pair given on the command line.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct KeyValue<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K: FromStr, V: FromStr> FromStr for KeyValue<K, V> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = match s.split_once('=') {
            Some(pair) => pair,
            None => return Err(format!("Expected `KEY=VALUE`, got `{s}`")),
        };

        let key = key
            .trim()
            .parse::<K>()
            .map_err(|_| format!("Invalid key in `{s}`"))?;

        let value = value
            .trim()
            .parse::<V>()
            .map_err(|_| format!("Invalid value in `{s}`"))?;

        Ok(Self { key, value })
    }
}

/// Changes applied to the form built from the settings document.
///
/// Indices refer to the lists printed by `mcm describe`. Selectors are
/// resolved against the optimisation mode in effect after
/// `--weighted-sum-method` is applied.
///
#[derive(Args, Debug)]
pub(crate) struct FormOverrides {
    /// Path to the settings document (JSON or YAML)
    #[arg(short, long)]
    pub(super) settings_file: PathBuf,

    /// Index of the genetic algorithm selection (chromosome encoding)
    #[arg(long)]
    pub(super) genetic_algorithm: Option<usize>,

    /// Use the weighted sum (single objective) method
    #[arg(long)]
    pub(super) weighted_sum_method: Option<bool>,

    /// Index of the offspring selector in the active mode
    #[arg(long)]
    pub(super) offspring_selector: Option<usize>,

    /// Index of the survivor selector in the active mode
    #[arg(long)]
    pub(super) survivor_selector: Option<usize>,

    #[arg(long)]
    pub(super) crossover: Option<usize>,

    #[arg(long)]
    pub(super) mutation: Option<usize>,

    /// Index of the meta model (tool family)
    #[arg(long)]
    pub(super) meta_model: Option<usize>,

    /// Index of the conceptual model of the selected meta model
    #[arg(long)]
    pub(super) conceptual_model: Option<usize>,

    /// Send custom edge weights
    #[arg(long)]
    pub(super) custom_edge_weights: Option<bool>,

    /// Add an edge weight (e.g. `association=3`)
    #[arg(long = "edge-weight", value_name = "NAME=WEIGHT")]
    pub(super) edge_weights: Vec<KeyValue<String, i32>>,

    /// Remove the edge weight at this index
    ///
    /// Removals are applied one after the other, before additions. The last
    /// remaining edge weight is never removed.
    #[arg(long = "remove-edge-weight", value_name = "INDEX")]
    pub(super) removed_edge_weights: Vec<usize>,

    /// Select the objective at this index
    #[arg(long = "select-objective", value_name = "INDEX")]
    pub(super) selected_objectives: Vec<usize>,

    /// Deselect the objective at this index
    ///
    /// At least one objective always stays selected.
    #[arg(long = "deselect-objective", value_name = "INDEX")]
    pub(super) deselected_objectives: Vec<usize>,

    /// Set an objective weight (e.g. `0=1.5`)
    #[arg(long = "objective-weight", value_name = "INDEX=WEIGHT")]
    pub(super) objective_weights: Vec<KeyValue<usize, f64>>,

    #[arg(long)]
    pub(super) elements_per_module: Option<u32>,

    #[arg(long)]
    pub(super) generations: Option<u32>,

    #[arg(long)]
    pub(super) population: Option<u32>,

    #[arg(long)]
    pub(super) mutation_probability: Option<f64>,

    #[arg(long)]
    pub(super) crossover_probability: Option<f64>,

    #[arg(long)]
    pub(super) convergence_rate: Option<f64>,

    #[arg(long)]
    pub(super) converged_gene_rate: Option<f64>,

    #[arg(long)]
    pub(super) tournament_size: Option<u32>,

    #[arg(long)]
    pub(super) minimum_pareto_set_size: Option<u32>,

    #[arg(long)]
    pub(super) maximum_pareto_set_size: Option<u32>,

    #[arg(long)]
    pub(super) split_modules_weight: Option<f64>,

    #[arg(long)]
    pub(super) combine_modules_weight: Option<f64>,

    #[arg(long)]
    pub(super) move_elements_between_modules_weight: Option<f64>,
}

impl FormOverrides {
    pub(super) fn load_settings(&self) -> Result<AppSettings> {
        load_settings(&self.settings_file)
    }

    /// Load the settings document and apply every override to a new form.
    pub(super) fn build_form(&self) -> Result<ModularisationForm> {
        let settings = self.load_settings()?;
        let mut form =
            ModularisationForm::from_settings(&settings).map_err(to_anyhow)?;

        self.apply(&mut form)?;

        Ok(form)
    }

    pub(super) fn apply(&self, form: &mut ModularisationForm) -> Result<()> {
        // ? -------------------------------------------------------------------
        // ? Genetic algorithm operators
        //
        // The selection resets crossover and mutation, and the mode decides
        // which selector lists apply, so both go first.
        //
        // ? -------------------------------------------------------------------

        if let Some(index) = self.genetic_algorithm {
            form.select_genetic_algorithm(index).map_err(to_anyhow)?;
        }

        if let Some(use_weighted_sum) = self.weighted_sum_method {
            form.set_use_weighted_sum_method(use_weighted_sum);
        }

        if let Some(index) = self.offspring_selector {
            form.select_offspring_selector(index).map_err(to_anyhow)?;
        }

        if let Some(index) = self.survivor_selector {
            form.select_survivor_selector(index).map_err(to_anyhow)?;
        }

        if let Some(index) = self.crossover {
            form.select_crossover(index).map_err(to_anyhow)?;
        }

        if let Some(index) = self.mutation {
            form.select_mutation(index).map_err(to_anyhow)?;
        }

        // ? -------------------------------------------------------------------
        // ? Model reference
        // ? -------------------------------------------------------------------

        if let Some(index) = self.meta_model {
            form.select_meta_model(index).map_err(to_anyhow)?;
        }

        if let Some(index) = self.conceptual_model {
            form.select_conceptual_model(index).map_err(to_anyhow)?;
        }

        // ? -------------------------------------------------------------------
        // ? Edge weights
        // ? -------------------------------------------------------------------

        if let Some(use_custom) = self.custom_edge_weights {
            form.set_use_custom_edge_weights(use_custom);
        }

        for index in &self.removed_edge_weights {
            if !form.delete_edge_weight(*index) {
                warn!("Edge weight {index} was not removed");
            }
        }

        for pair in &self.edge_weights {
            if !form.add_edge_weight(&pair.key, pair.value) {
                return Err(Error::msg("Edge weight names can not be empty"));
            }
        }

        // ? -------------------------------------------------------------------
        // ? Objectives
        // ? -------------------------------------------------------------------

        let objective_count = form.objectives().len();

        for index in self
            .selected_objectives
            .iter()
            .chain(self.deselected_objectives.iter())
        {
            if *index >= objective_count {
                return Err(Error::msg(format!(
                    "Objective index {index} out of range (0..{objective_count})"
                )));
            }
        }

        for index in &self.selected_objectives {
            form.set_objective_selected(*index, true);
        }

        for index in &self.deselected_objectives {
            if form.set_objective_selected(*index, false) {
                warn!("Objective {index} kept selected: at least one objective is required");
            }
        }

        for pair in &self.objective_weights {
            if !form.set_objective_weight(pair.key, pair.value) {
                return Err(Error::msg(format!(
                    "Objective index {} out of range (0..{objective_count})",
                    pair.key
                )));
            }
        }

        if let Some(value) = self.elements_per_module {
            form.set_number_of_elements_per_module(value);
        }

        // ? -------------------------------------------------------------------
        // ? Numeric parameters
        // ? -------------------------------------------------------------------

        let parameter = form.genetic_algorithm_parameter_mut();

        if let Some(value) = self.generations {
            parameter.number_of_generations = value;
        }

        if let Some(value) = self.population {
            parameter.count_population = value;
        }

        if let Some(value) = self.mutation_probability {
            parameter.mutation_probability = value;
        }

        if let Some(value) = self.crossover_probability {
            parameter.crossover_probability = value;
        }

        if let Some(value) = self.convergence_rate {
            parameter.convergence_rate = value;
        }

        if let Some(value) = self.converged_gene_rate {
            parameter.converged_gene_rate = value;
        }

        if let Some(value) = self.tournament_size {
            parameter.tournament_size = value;
        }

        let pareto = form.pareto_set_parameter_mut();

        if let Some(value) = self.minimum_pareto_set_size {
            pareto.minimum_pareto_set_size = value;
        }

        if let Some(value) = self.maximum_pareto_set_size {
            pareto.maximum_pareto_set_size = value;
        }

        let mutation_weight = form.mutation_weight_mut();

        if let Some(value) = self.split_modules_weight {
            mutation_weight.split_modules_weight = value;
        }

        if let Some(value) = self.combine_modules_weight {
            mutation_weight.combine_modules_weight = value;
        }

        if let Some(value) = self.move_elements_between_modules_weight {
            mutation_weight.move_elements_between_modules_weight = value;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmds::fixtures::SETTINGS;
    use clap::Parser;
    use modcmga_core::domain::dtos::model_reference::{
        ConceptualModelType, MetaModelType,
    };

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        form: FormOverrides,
    }

    fn apply(args: &[&str]) -> Result<ModularisationForm> {
        let cli = TestCli::try_parse_from(
            ["mcm", "--settings-file", "settings.json"]
                .iter()
                .chain(args.iter()),
        )?;

        let settings: AppSettings = serde_json::from_str(SETTINGS)?;
        let mut form =
            ModularisationForm::from_settings(&settings).map_err(to_anyhow)?;

        cli.form.apply(&mut form)?;

        Ok(form)
    }

    #[test]
    fn test_overrides_are_applied_in_order() {
        let form = apply(&[
            "--genetic-algorithm",
            "1",
            "--crossover",
            "1",
            "--offspring-selector",
            "0",
            "--meta-model",
            "1",
            "--conceptual-model",
            "1",
            "--population",
            "20",
            "--move-elements-between-modules-weight",
            "0.5",
        ])
        .unwrap();

        assert_eq!(form.selection().chromosome_encoding, "INTEGER_ENCODING");
        assert_eq!(form.crossover_index(), 1);
        assert_eq!(
            form.model_reference().meta_model_type,
            MetaModelType::Adoxx
        );
        assert_eq!(
            form.model_reference().conceptual_model_type,
            ConceptualModelType::Er
        );
        assert_eq!(form.genetic_algorithm_parameter().count_population, 20);
        assert_eq!(
            form.mutation_weight().move_elements_between_modules_weight,
            0.5
        );
    }

    #[test]
    fn test_edge_weight_and_objective_overrides() {
        let form = apply(&[
            "--remove-edge-weight",
            "0",
            "--edge-weight",
            "composition=4",
            "--select-objective",
            "1",
            "--objective-weight",
            "1=3",
            "--deselect-objective",
            "0",
        ])
        .unwrap();

        // The only edge weight is kept, then the new one is appended.
        assert_eq!(form.edge_weights().len(), 2);

        let selected = form
            .objectives()
            .selected()
            .map(|objective| objective.objective_type.as_str())
            .collect::<Vec<_>>();

        assert_eq!(selected, vec!["COHESION"]);
        assert_eq!(form.objectives().get_objectives()[1].objective_weight, 3.0);
    }

    #[test]
    fn test_out_of_range_overrides_fail() {
        assert!(apply(&["--crossover", "5"]).is_err());
        assert!(apply(&["--deselect-objective", "7"]).is_err());
        assert!(apply(&["--edge-weight", "=2"]).is_err());
    }

    #[test]
    fn test_key_value_parsing() {
        let pair = "association = 3".parse::<KeyValue<String, i32>>().unwrap();
        assert_eq!(pair.key, "association");
        assert_eq!(pair.value, 3);

        let pair = "1=0.5".parse::<KeyValue<usize, f64>>().unwrap();
        assert_eq!(pair, KeyValue { key: 1, value: 0.5 });

        assert!("association".parse::<KeyValue<String, i32>>().is_err());
        assert!("a=b".parse::<KeyValue<String, i32>>().is_err());
    }
}
