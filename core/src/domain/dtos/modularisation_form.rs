use super::{
    app_settings::AppSettings,
    edge_weight::EdgeWeights,
    genetic_algorithm_parameter::{GeneticAlgorithmParameter, ParetoSetParameter},
    genetic_algorithm_selection::GeneticAlgorithmSelection,
    model_reference::{ConceptualModelType, MetaModelType, ModelReference},
    mutation_weight::MutationWeight,
    objective::Objectives,
    optimisation_mode::ModeSelection,
    uploaded_file::UploadedFile,
};

use mycelium_base::utils::errors::{creation_err, use_case_err, MappedErrors};
use tracing::trace;

#[derive(Clone, Debug, PartialEq)]
struct ResolvedMetaModel {
    label: String,
    kind: MetaModelType,
    conceptual_models: Vec<(String, ConceptualModelType)>,
}

/// The editable state of the modularisation form.
///
/// The form is built from the settings document and then mutated one user
/// action at a time. Index based selections are checked against the list
/// they point into, so the form never holds a dangling index. The two table
/// invariants (one edge weight, one selected objective) are enforced by the
/// mutating actions themselves.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ModularisationForm {
    selections: Vec<GeneticAlgorithmSelection>,
    selection_index: usize,
    mode: ModeSelection,
    crossover_index: usize,
    mutation_index: usize,

    genetic_algorithm_parameter: GeneticAlgorithmParameter,
    pareto_set_parameter: ParetoSetParameter,
    mutation_weight: MutationWeight,

    meta_models: Vec<ResolvedMetaModel>,
    meta_model_index: usize,
    conceptual_model_index: usize,

    is_use_custom_edge_weights: bool,
    edge_weights: EdgeWeights,

    number_of_elements_per_module: u32,
    objectives: Objectives,

    model_file: Option<UploadedFile>,
    schema_file: Option<UploadedFile>,
}

fn check_index(
    index: usize,
    length: usize,
    subject: &str,
) -> Result<(), MappedErrors> {
    if index >= length {
        return use_case_err(format!(
            "Invalid {subject} index {index}: only {length} option(s) available"
        ))
        .as_error();
    }

    Ok(())
}

impl ModularisationForm {
    /// Build the initial form state from the settings document.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, MappedErrors> {
        if settings.genetic_algorithm_selections.is_empty() {
            return Err(creation_err(
                "Settings do not define any genetic algorithm selection",
            ));
        }

        let meta_models = settings
            .meta_models
            .iter()
            .map(|meta_model| {
                let kind = MetaModelType::from_label(&meta_model.label)
                    .ok_or_else(|| {
                        creation_err(format!(
                            "Unknown meta model label: {}",
                            meta_model.label
                        ))
                    })?;

                if meta_model.conceptual_models.is_empty() {
                    return Err(creation_err(format!(
                        "Meta model {} lists no conceptual model",
                        meta_model.label
                    )));
                }

                let conceptual_models = meta_model
                    .conceptual_models
                    .iter()
                    .map(|label| {
                        ConceptualModelType::from_label(label)
                            .map(|kind| (label.to_owned(), kind))
                            .ok_or_else(|| {
                                creation_err(format!(
                                    "Unknown conceptual model label: {label}"
                                ))
                            })
                    })
                    .collect::<Result<Vec<_>, MappedErrors>>()?;

                Ok(ResolvedMetaModel {
                    label: meta_model.label.to_owned(),
                    kind,
                    conceptual_models,
                })
            })
            .collect::<Result<Vec<_>, MappedErrors>>()?;

        let meta_model_index =
            settings.ui_settings.selected_conceptual_model_index;

        if meta_model_index >= meta_models.len() {
            return Err(creation_err(format!(
                "Initial meta model index {meta_model_index} is out of range ({} meta model(s) defined)",
                meta_models.len()
            )));
        }

        Ok(Self {
            selections: settings.genetic_algorithm_selections.to_owned(),
            selection_index: 0,
            mode: ModeSelection::new(settings.is_use_weighted_sum_method),
            crossover_index: 0,
            mutation_index: 0,
            genetic_algorithm_parameter: settings
                .initial_genetic_algorithm_parameter
                .to_owned(),
            pareto_set_parameter: settings
                .initial_pareto_set_parameter
                .to_owned(),
            mutation_weight: settings
                .initial_mutation_weight_parameter
                .to_owned(),
            meta_models,
            meta_model_index,
            conceptual_model_index: 0,
            is_use_custom_edge_weights: settings
                .ui_settings
                .is_use_custom_edge_weights,
            edge_weights: EdgeWeights::new(settings.edge_weights.to_owned()),
            number_of_elements_per_module: settings
                .number_of_elements_per_module,
            objectives: Objectives::new(settings.objectives.to_owned()),
            model_file: None,
            schema_file: None,
        })
    }

    // ? -----------------------------------------------------------------------
    // ? Genetic algorithm building blocks
    // ? -----------------------------------------------------------------------

    pub fn selection(&self) -> &GeneticAlgorithmSelection {
        &self.selections[self.selection_index]
    }

    pub fn mode(&self) -> &ModeSelection {
        &self.mode
    }

    pub fn crossover_index(&self) -> usize {
        self.crossover_index
    }

    pub fn mutation_index(&self) -> usize {
        self.mutation_index
    }

    /// Offspring selectors of the active optimisation mode.
    pub fn offspring_selection(&self) -> &[String] {
        self.selection()
            .offspring_selectors(self.mode.is_use_weighted_sum_method())
    }

    /// Survivor selectors of the active optimisation mode.
    pub fn survivor_selection(&self) -> &[String] {
        self.selection()
            .survivor_selectors(self.mode.is_use_weighted_sum_method())
    }

    /// Switch the genetic algorithm selection.
    ///
    /// Selector, crossover and mutation choices are reset to the first entry
    /// of the new selection, in both optimisation modes.
    ///
    pub fn select_genetic_algorithm(
        &mut self,
        index: usize,
    ) -> Result<(), MappedErrors> {
        check_index(index, self.selections.len(), "genetic algorithm")?;

        self.selection_index = index;
        self.mode.reset();
        self.crossover_index = 0;
        self.mutation_index = 0;

        trace!(
            chromosome_encoding = self.selection().chromosome_encoding.as_str(),
            "Genetic algorithm selection changed"
        );

        Ok(())
    }

    pub fn select_offspring_selector(
        &mut self,
        index: usize,
    ) -> Result<(), MappedErrors> {
        check_index(
            index,
            self.offspring_selection().len(),
            "offspring selector",
        )?;
        self.mode.set_offspring(index);
        Ok(())
    }

    pub fn select_survivor_selector(
        &mut self,
        index: usize,
    ) -> Result<(), MappedErrors> {
        check_index(
            index,
            self.survivor_selection().len(),
            "survivor selector",
        )?;
        self.mode.set_survivor(index);
        Ok(())
    }

    pub fn select_crossover(
        &mut self,
        index: usize,
    ) -> Result<(), MappedErrors> {
        check_index(index, self.selection().crossovers.len(), "crossover")?;
        self.crossover_index = index;
        Ok(())
    }

    pub fn select_mutation(
        &mut self,
        index: usize,
    ) -> Result<(), MappedErrors> {
        check_index(index, self.selection().mutations.len(), "mutation")?;
        self.mutation_index = index;
        Ok(())
    }

    pub fn set_use_weighted_sum_method(&mut self, use_weighted_sum: bool) {
        self.mode.switch(use_weighted_sum);
    }

    pub fn is_use_weighted_sum_method(&self) -> bool {
        self.mode.is_use_weighted_sum_method()
    }

    // ? -----------------------------------------------------------------------
    // ? Numeric parameters
    // ? -----------------------------------------------------------------------

    pub fn genetic_algorithm_parameter(&self) -> &GeneticAlgorithmParameter {
        &self.genetic_algorithm_parameter
    }

    pub fn genetic_algorithm_parameter_mut(
        &mut self,
    ) -> &mut GeneticAlgorithmParameter {
        &mut self.genetic_algorithm_parameter
    }

    pub fn pareto_set_parameter(&self) -> &ParetoSetParameter {
        &self.pareto_set_parameter
    }

    pub fn pareto_set_parameter_mut(&mut self) -> &mut ParetoSetParameter {
        &mut self.pareto_set_parameter
    }

    pub fn mutation_weight(&self) -> &MutationWeight {
        &self.mutation_weight
    }

    pub fn mutation_weight_mut(&mut self) -> &mut MutationWeight {
        &mut self.mutation_weight
    }

    // ? -----------------------------------------------------------------------
    // ? Meta model and conceptual model
    // ? -----------------------------------------------------------------------

    /// Switch the meta model. The conceptual model falls back to the first
    /// one supported by the new meta model.
    pub fn select_meta_model(
        &mut self,
        index: usize,
    ) -> Result<(), MappedErrors> {
        check_index(index, self.meta_models.len(), "meta model")?;

        self.meta_model_index = index;
        self.conceptual_model_index = 0;

        trace!(
            meta_model = self.meta_models[index].label.as_str(),
            "Meta model changed"
        );

        Ok(())
    }

    pub fn select_conceptual_model(
        &mut self,
        index: usize,
    ) -> Result<(), MappedErrors> {
        check_index(
            index,
            self.meta_models[self.meta_model_index].conceptual_models.len(),
            "conceptual model",
        )?;

        self.conceptual_model_index = index;
        Ok(())
    }

    pub fn meta_model_label(&self) -> &str {
        &self.meta_models[self.meta_model_index].label
    }

    pub fn conceptual_model_label(&self) -> &str {
        &self.meta_models[self.meta_model_index].conceptual_models
            [self.conceptual_model_index]
            .0
    }

    pub fn model_reference(&self) -> ModelReference {
        let meta_model = &self.meta_models[self.meta_model_index];

        ModelReference {
            meta_model_type: meta_model.kind,
            conceptual_model_type: meta_model.conceptual_models
                [self.conceptual_model_index]
                .1,
        }
    }

    pub fn is_schema_file_required(&self) -> bool {
        self.model_reference().requires_schema_file()
    }

    // ? -----------------------------------------------------------------------
    // ? Edge weights
    // ? -----------------------------------------------------------------------

    pub fn is_use_custom_edge_weights(&self) -> bool {
        self.is_use_custom_edge_weights
    }

    pub fn set_use_custom_edge_weights(&mut self, use_custom: bool) {
        self.is_use_custom_edge_weights = use_custom;
    }

    pub fn edge_weights(&self) -> &EdgeWeights {
        &self.edge_weights
    }

    pub fn add_edge_weight(&mut self, name: &str, weight: i32) -> bool {
        self.edge_weights.add(name, weight)
    }

    pub fn delete_edge_weight(&mut self, index: usize) -> bool {
        self.edge_weights.delete(index)
    }

    // ? -----------------------------------------------------------------------
    // ? Objectives
    // ? -----------------------------------------------------------------------

    pub fn objectives(&self) -> &Objectives {
        &self.objectives
    }

    pub fn set_objective_selected(
        &mut self,
        index: usize,
        selected: bool,
    ) -> bool {
        self.objectives.set_selected(index, selected)
    }

    pub fn set_objective_weight(&mut self, index: usize, weight: f64) -> bool {
        self.objectives.set_weight(index, weight)
    }

    pub fn number_of_elements_per_module(&self) -> u32 {
        self.number_of_elements_per_module
    }

    pub fn set_number_of_elements_per_module(&mut self, value: u32) {
        self.number_of_elements_per_module = value;
    }

    // ? -----------------------------------------------------------------------
    // ? Uploaded files
    // ? -----------------------------------------------------------------------

    pub fn model_file(&self) -> Option<&UploadedFile> {
        self.model_file.as_ref()
    }

    pub fn set_model_file(&mut self, file: UploadedFile) {
        self.model_file = Some(file);
    }

    pub fn schema_file(&self) -> Option<&UploadedFile> {
        self.schema_file.as_ref()
    }

    pub fn set_schema_file(&mut self, file: UploadedFile) {
        self.schema_file = Some(file);
    }

    /// Whether the user must choose the model type explicitly.
    ///
    /// GraphML files are self-describing. Every other file, or no file at
    /// all, needs the meta model and conceptual model choice.
    ///
    pub fn is_model_type_required(&self) -> bool {
        match &self.model_file {
            None => true,
            Some(file) => file.extension() != Some("graphml"),
        }
    }
}
