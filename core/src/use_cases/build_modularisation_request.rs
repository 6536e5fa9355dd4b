use crate::domain::dtos::{
    backend_request::{BackendRequest, FileCategory},
    multipart::MultipartBody,
    request_snapshot::RequestParameterSnapshot,
    telemetry_code::TelemetryCode,
    uploaded_file::UploadedFile,
};

use mycelium_base::utils::errors::{execution_err, use_case_err, MappedErrors};
use serde::Serialize;
use tracing::{debug, warn};

pub const SCHEMA_FILE_FIELD: &str = "dtdFile";

/// Classify a model file by its extension.
///
/// The classification is total: every file ends up in one of the
/// `FileCategory` variants, unknown extensions included.
///
pub fn classify_model_file(file: &UploadedFile) -> FileCategory {
    FileCategory::from_extension(file.extension())
}

fn to_json<T: Serialize>(
    field: &str,
    value: &T,
) -> Result<String, MappedErrors> {
    match serde_json::to_string(value) {
        Ok(content) => Ok(content),
        Err(err) => execution_err(format!(
            "Unable to serialize the `{field}` field: {err}"
        ))
        .as_error(),
    }
}

/// Encode a snapshot as one multipart request and choose its endpoint.
///
/// GraphML files go to `apply` under `graphmlFile`. Tool exports (`xml`,
/// `archimate`, `uml`) go to `modularise` under `metaModelFile`, together
/// with the DTD schema when the meta model kind is ADOxx. A missing schema
/// only omits `dtdFile`. Any other extension is a classification failure
/// and no request is built.
///
/// Scalars are sent as their string form. Composite values are sent as
/// JSON text. The `edgeWeights` field is omitted when the snapshot carries
/// no custom edge weights.
///
#[tracing::instrument(name = "Build modularisation request", skip(snapshot))]
pub fn build_modularisation_request(
    snapshot: &RequestParameterSnapshot,
) -> Result<BackendRequest, MappedErrors> {
    // ? -----------------------------------------------------------------------
    // ? Classify the model file
    // ? -----------------------------------------------------------------------

    let model_file = match snapshot.model_file() {
        Some(file) => file,
        None => {
            return use_case_err("No model file was provided.").as_error()
        }
    };

    let category = classify_model_file(model_file);

    let (endpoint, file_field) =
        match (category.endpoint(), category.file_field_name()) {
            (Some(endpoint), Some(field)) => (endpoint, field),
            _ => {
                warn!(
                    code = TelemetryCode::UCBUILD0002.to_string(),
                    file_name = model_file.file_name(),
                    "Model file could not be classified"
                );

                return use_case_err(format!(
                    "Unable to classify model file `{}`: expected a `graphml`, `xml`, `archimate` or `uml` extension.",
                    model_file.file_name()
                ))
                .as_error();
            }
        };

    debug!(
        code = TelemetryCode::UCBUILD0001.to_string(),
        file_name = model_file.file_name(),
        endpoint = endpoint.path(),
        "Model file classified"
    );

    // ? -----------------------------------------------------------------------
    // ? Encode scalar parameters
    // ? -----------------------------------------------------------------------

    let selection = snapshot.selection();
    let parameter = snapshot.genetic_algorithm_parameter();
    let pareto = snapshot.pareto_set_parameter();
    let model_reference = snapshot.model_reference();

    let mut body = MultipartBody::new()
        .text("chromosomeEncoding", &selection.chromosome_encoding)
        .text("offspringSelector", &selection.offspring_selector)
        .text("survivorSelector", &selection.survivor_selector)
        .text("crossoverType", &selection.crossover_type)
        .text("mutationType", &selection.mutation_type)
        .text("countPopulation", parameter.count_population)
        .text("mutationProbability", parameter.mutation_probability)
        .text("crossoverProbability", parameter.crossover_probability)
        .text("tournamentSize", parameter.tournament_size)
        .text("countGeneration", parameter.number_of_generations)
        .text("convergenceRate", parameter.convergence_rate)
        .text("convergedGeneRate", parameter.converged_gene_rate)
        .text("minimumParetoSetSize", pareto.minimum_pareto_set_size)
        .text("maximumParetoSetSize", pareto.maximum_pareto_set_size)
        .text(
            "mutationWeight",
            to_json("mutationWeight", snapshot.mutation_weight())?,
        )
        .file(file_field, model_file.to_owned())
        .text("conceptualModelType", model_reference.conceptual_model_type)
        .text("metaModelType", model_reference.meta_model_type);

    // ? -----------------------------------------------------------------------
    // ? Attach the schema file
    //
    // The schema depends on the meta model kind, not on the extension. It is
    // never sent to the graph endpoint, which takes a single file.
    //
    // ? -----------------------------------------------------------------------

    if model_reference.requires_schema_file()
        && category == FileCategory::MetaModel
    {
        match snapshot.schema_file() {
            Some(schema_file) => {
                debug!(
                    code = TelemetryCode::UCBUILD0003.to_string(),
                    file_name = schema_file.file_name(),
                    "Schema file attached"
                );

                body = body.file(SCHEMA_FILE_FIELD, schema_file.to_owned());
            }
            // The backend rejects the request itself.
            None => warn!(
                code = TelemetryCode::UCBUILD0005.to_string(),
                meta_model_type = %model_reference.meta_model_type,
                "Schema file missing for a meta model that expects one"
            ),
        }
    }

    // ? -----------------------------------------------------------------------
    // ? Encode composite parameters
    // ? -----------------------------------------------------------------------

    if let Some(edge_weights) = snapshot.edge_weights() {
        body = body.text("edgeWeights", to_json("edgeWeights", edge_weights)?);
    }

    body = body.text(
        "objectiveData",
        to_json("objectiveData", snapshot.objective_data())?,
    );

    debug!(
        code = TelemetryCode::UCBUILD0004.to_string(),
        parts = body.parts().len(),
        "Request body built"
    );

    Ok(BackendRequest::new(endpoint, body))
}
