use crate::domain::dtos::{
    genetic_algorithm_selection::GeneticAlgorithmSelectionParameter,
    modularisation_form::ModularisationForm,
    objective::{Objective, ObjectiveData},
    request_snapshot::RequestParameterSnapshot,
    telemetry_code::TelemetryCode,
};

use tracing::debug;

fn name_at(names: &[String], index: usize) -> String {
    names.get(index).cloned().unwrap_or_default()
}

/// Snapshot the current form state into request parameters.
///
/// The active optimisation mode decides which offspring and survivor
/// selector lists are read. Only selected objectives are carried. Edge
/// weights are `None` when the user opted out of custom weights, so the
/// backend falls back to its defaults.
///
/// No business rule is validated here. Missing operator names are passed as
/// empty strings for the backend to reject.
///
pub fn aggregate_snapshot(
    form: &ModularisationForm,
) -> RequestParameterSnapshot {
    debug!(
        code = TelemetryCode::UCAGGR0001.to_string(),
        "Start request parameters aggregation"
    );

    // ? -----------------------------------------------------------------------
    // ? Resolve operator names for the active mode
    // ? -----------------------------------------------------------------------

    let selection = form.selection();
    let indices = form.mode().active().indices();

    let selection_parameter = GeneticAlgorithmSelectionParameter {
        chromosome_encoding: selection.chromosome_encoding.to_owned(),
        offspring_selector: name_at(
            form.offspring_selection(),
            indices.offspring,
        ),
        survivor_selector: name_at(
            form.survivor_selection(),
            indices.survivor,
        ),
        crossover_type: name_at(&selection.crossovers, form.crossover_index()),
        mutation_type: name_at(&selection.mutations, form.mutation_index()),
    };

    // ? -----------------------------------------------------------------------
    // ? Filter objectives and resolve edge weights
    // ? -----------------------------------------------------------------------

    let objective_data = ObjectiveData::from_selected(
        form.number_of_elements_per_module(),
        form.is_use_weighted_sum_method(),
        form.objectives(),
    );

    let objectives = form
        .objectives()
        .selected()
        .map(Objective::to_specification)
        .collect();

    let edge_weights = match form.is_use_custom_edge_weights() {
        true => Some(form.edge_weights().to_owned()),
        false => None,
    };

    let snapshot = RequestParameterSnapshot {
        selection: selection_parameter,
        genetic_algorithm_parameter: form
            .genetic_algorithm_parameter()
            .to_owned(),
        pareto_set_parameter: form.pareto_set_parameter().to_owned(),
        mutation_weight: form.mutation_weight().to_owned(),
        model_reference: form.model_reference(),
        edge_weights,
        objectives,
        objective_data,
        model_file: form.model_file().cloned(),
        schema_file: form.schema_file().cloned(),
    };

    debug!(
        code = TelemetryCode::UCAGGR0002.to_string(),
        offspring_selector = snapshot.selection.offspring_selector.as_str(),
        survivor_selector = snapshot.selection.survivor_selector.as_str(),
        "End request parameters aggregation"
    );

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dtos::{
        app_settings::fixtures::settings,
        model_reference::{ConceptualModelType, MetaModelType},
        objective::ObjectiveSpecification,
        uploaded_file::UploadedFile,
    };

    fn form() -> ModularisationForm {
        ModularisationForm::from_settings(&settings()).unwrap()
    }

    #[test]
    fn test_selector_names_follow_mode() {
        let mut form = form();
        form.select_offspring_selector(1).unwrap();
        form.select_survivor_selector(1).unwrap();

        let snapshot = aggregate_snapshot(&form);
        assert_eq!(snapshot.selection().offspring_selector, "UFTS");
        assert_eq!(snapshot.selection().survivor_selector, "UFTS");
        assert_eq!(snapshot.selection().crossover_type, "GROUP_CROSSOVER");

        form.set_use_weighted_sum_method(true);
        form.select_survivor_selector(1).unwrap();

        let snapshot = aggregate_snapshot(&form);
        assert_eq!(
            snapshot.selection().offspring_selector,
            "TOURNAMENT_SELECTOR"
        );
        assert_eq!(
            snapshot.selection().survivor_selector,
            "TRUNCATION_SELECTOR"
        );
        assert!(snapshot.is_use_weighted_sum_method());
    }

    #[test]
    fn test_selection_change_keeps_selectors_in_range() {
        let mut form = form();
        form.select_offspring_selector(1).unwrap();
        form.set_use_weighted_sum_method(true);
        form.select_survivor_selector(1).unwrap();
        form.set_use_weighted_sum_method(false);

        form.select_genetic_algorithm(1).unwrap();

        let snapshot = aggregate_snapshot(&form);
        assert_eq!(snapshot.selection().offspring_selector, "NSGA2_SELECTOR");
        assert_eq!(snapshot.selection().survivor_selector, "NSGA2_SELECTOR");

        form.set_use_weighted_sum_method(true);

        let snapshot = aggregate_snapshot(&form);
        assert_eq!(
            snapshot.selection().offspring_selector,
            "TOURNAMENT_SELECTOR"
        );
        assert_eq!(snapshot.selection().survivor_selector, "ELITE_SELECTOR");
    }

    #[test]
    fn test_only_selected_objectives_are_carried() {
        let snapshot = aggregate_snapshot(&form());

        let types = snapshot
            .objectives()
            .iter()
            .map(|o| o.objective_type.as_str())
            .collect::<Vec<_>>();

        assert_eq!(types, vec!["COUPLING", "COHESION"]);
        assert_eq!(
            snapshot.objective_data().objective_specifications,
            snapshot.objectives()
        );
        assert_eq!(
            snapshot.objective_data().number_of_elements_per_module,
            6
        );
        assert!(!snapshot.objective_data().is_use_weighted_sum_method);
    }

    #[test]
    fn test_objective_filter_keeps_mode_and_module_size() {
        let mut form = form();
        form.set_objective_selected(0, false);
        form.set_use_weighted_sum_method(true);
        form.set_number_of_elements_per_module(9);

        let snapshot = aggregate_snapshot(&form);

        assert_eq!(
            snapshot.objectives(),
            [ObjectiveSpecification {
                objective_type: "COHESION".to_string(),
                selected: true,
                weight: 0.5,
            }]
        );
        assert!(snapshot.objective_data().is_use_weighted_sum_method);
        assert_eq!(
            snapshot.objective_data().number_of_elements_per_module,
            9
        );
    }

    #[test]
    fn test_edge_weights_opt_out_is_none() {
        let mut form = form();

        let snapshot = aggregate_snapshot(&form);
        assert_eq!(snapshot.edge_weights().map(|w| w.len()), Some(2));

        form.set_use_custom_edge_weights(false);

        let snapshot = aggregate_snapshot(&form);
        assert!(snapshot.edge_weights().is_none());
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_edits() {
        let mut form = form();
        form.set_model_file(UploadedFile::new("m.uml".to_string(), "a"));

        let snapshot = aggregate_snapshot(&form);

        form.add_edge_weight("composition", 4);
        form.genetic_algorithm_parameter_mut().count_population = 1;
        form.select_meta_model(2).unwrap();
        form.set_model_file(UploadedFile::new("other.xml".to_string(), "b"));

        assert_eq!(snapshot.edge_weights().map(|w| w.len()), Some(2));
        assert_eq!(
            snapshot.genetic_algorithm_parameter().count_population,
            50
        );
        assert_eq!(
            snapshot.model_reference().meta_model_type,
            MetaModelType::PapyrusUml
        );
        assert_eq!(
            snapshot.model_reference().conceptual_model_type,
            ConceptualModelType::Uml
        );
        assert_eq!(snapshot.model_file().unwrap().file_name(), "m.uml");
    }
}
