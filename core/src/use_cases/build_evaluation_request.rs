use crate::domain::dtos::{
    backend_request::{BackendRequest, Endpoint},
    multipart::MultipartBody,
    objective::ObjectiveData,
    telemetry_code::TelemetryCode,
    uploaded_file::UploadedFile,
};

use mycelium_base::utils::errors::{execution_err, MappedErrors};
use tracing::debug;

/// Encode a request evaluating an existing modularisation result.
///
/// The knowledge graph is the GraphML file the result was computed from;
/// the result is the JSON solution exported by a previous run.
///
pub fn build_evaluation_request(
    knowledge_graph: UploadedFile,
    modularisation_result: UploadedFile,
    objective_data: &ObjectiveData,
) -> Result<BackendRequest, MappedErrors> {
    let objective_data = match serde_json::to_string(objective_data) {
        Ok(content) => content,
        Err(err) => {
            return execution_err(format!(
                "Unable to serialize the `objectiveData` field: {err}"
            ))
            .as_error()
        }
    };

    let body = MultipartBody::new()
        .file("knowledgeGraph", knowledge_graph)
        .file("modularisationResult", modularisation_result)
        .text("objectiveData", objective_data);

    debug!(
        code = TelemetryCode::UCEVAL0001.to_string(),
        "Evaluation request built"
    );

    Ok(BackendRequest::new(Endpoint::EvaluateModularisationResult, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dtos::objective::ObjectiveSpecification;

    #[test]
    fn test_evaluation_request_parts() {
        let objective_data = ObjectiveData {
            number_of_elements_per_module: 4,
            is_use_weighted_sum_method: true,
            objective_specifications: vec![ObjectiveSpecification {
                objective_type: "COUPLING".to_string(),
                selected: true,
                weight: 1.0,
            }],
        };

        let request = build_evaluation_request(
            UploadedFile::new("kg.graphml".to_string(), "<graphml/>"),
            UploadedFile::new("result.json".to_string(), "{}"),
            &objective_data,
        )
        .unwrap();

        assert_eq!(request.endpoint, Endpoint::EvaluateModularisationResult);
        assert_eq!(
            request.body.get_file("knowledgeGraph").unwrap().file_name(),
            "kg.graphml"
        );
        assert_eq!(
            request
                .body
                .get_file("modularisationResult")
                .unwrap()
                .file_name(),
            "result.json"
        );

        let decoded: ObjectiveData = serde_json::from_str(
            request.body.get_text("objectiveData").unwrap(),
        )
        .unwrap();

        assert_eq!(decoded, objective_data);
    }
}
