use super::{
    edge_weight::EdgeWeights,
    genetic_algorithm_parameter::{GeneticAlgorithmParameter, ParetoSetParameter},
    genetic_algorithm_selection::GeneticAlgorithmSelectionParameter,
    model_reference::ModelReference,
    mutation_weight::MutationWeight,
    objective::{ObjectiveData, ObjectiveSpecification},
    uploaded_file::UploadedFile,
};

/// The immutable aggregate of the form state taken at submit time.
///
/// The snapshot owns copies of everything it carries, so later edits of the
/// form cannot reach a request already being built or sent. Fields are only
/// readable.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RequestParameterSnapshot {
    pub(crate) selection: GeneticAlgorithmSelectionParameter,
    pub(crate) genetic_algorithm_parameter: GeneticAlgorithmParameter,
    pub(crate) pareto_set_parameter: ParetoSetParameter,
    pub(crate) mutation_weight: MutationWeight,
    pub(crate) model_reference: ModelReference,
    pub(crate) edge_weights: Option<EdgeWeights>,
    pub(crate) objectives: Vec<ObjectiveSpecification>,
    pub(crate) objective_data: ObjectiveData,
    pub(crate) model_file: Option<UploadedFile>,
    pub(crate) schema_file: Option<UploadedFile>,
}

impl RequestParameterSnapshot {
    pub fn selection(&self) -> &GeneticAlgorithmSelectionParameter {
        &self.selection
    }

    pub fn genetic_algorithm_parameter(&self) -> &GeneticAlgorithmParameter {
        &self.genetic_algorithm_parameter
    }

    pub fn pareto_set_parameter(&self) -> &ParetoSetParameter {
        &self.pareto_set_parameter
    }

    pub fn mutation_weight(&self) -> &MutationWeight {
        &self.mutation_weight
    }

    pub fn model_reference(&self) -> &ModelReference {
        &self.model_reference
    }

    /// `None` means the backend defaults are used.
    pub fn edge_weights(&self) -> Option<&EdgeWeights> {
        self.edge_weights.as_ref()
    }

    /// The selected objectives only.
    pub fn objectives(&self) -> &[ObjectiveSpecification] {
        &self.objectives
    }

    pub fn objective_data(&self) -> &ObjectiveData {
        &self.objective_data
    }

    pub fn is_use_weighted_sum_method(&self) -> bool {
        self.objective_data.is_use_weighted_sum_method
    }

    pub fn model_file(&self) -> Option<&UploadedFile> {
        self.model_file.as_ref()
    }

    pub fn schema_file(&self) -> Option<&UploadedFile> {
        self.schema_file.as_ref()
    }
}
