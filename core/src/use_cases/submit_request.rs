use super::{
    aggregate_snapshot, build_evaluation_request, build_modularisation_request,
};
use crate::domain::{
    dtos::{
        backend_request::BackendRequest, modularisation_form::ModularisationForm,
        objective::ObjectiveData, result_artifact::ResultArtifact,
        telemetry_code::TelemetryCode, uploaded_file::UploadedFile,
    },
    entities::BackendTransport,
};

use mycelium_base::utils::errors::MappedErrors;
use tracing::{debug, error};
use uuid::Uuid;

/// Snapshot the form, build the request and hand it to the transport.
///
/// Each call builds and sends an independent request. Transport failures are
/// logged and returned as they are; nothing is retried.
///
#[tracing::instrument(
    name = "Submitting modularisation",
    skip(form, transport),
    fields(
        run_id = Uuid::new_v4().to_string().replace("-", "")
    )
)]
pub async fn submit_modularisation(
    form: &ModularisationForm,
    transport: &dyn BackendTransport,
) -> Result<ResultArtifact, MappedErrors> {
    debug!(
        code = TelemetryCode::UCSUBMIT0001.to_string(),
        "Start modularisation submission"
    );

    let snapshot = aggregate_snapshot(form);
    let request = build_modularisation_request(&snapshot)?;

    send(request, transport).await
}

/// Build an evaluation request from the form objectives and send it.
#[tracing::instrument(
    name = "Submitting evaluation",
    skip(form, knowledge_graph, modularisation_result, transport),
    fields(
        run_id = Uuid::new_v4().to_string().replace("-", "")
    )
)]
pub async fn submit_evaluation(
    form: &ModularisationForm,
    knowledge_graph: UploadedFile,
    modularisation_result: UploadedFile,
    transport: &dyn BackendTransport,
) -> Result<ResultArtifact, MappedErrors> {
    debug!(
        code = TelemetryCode::UCEVAL0002.to_string(),
        "Start evaluation submission"
    );

    let objective_data = ObjectiveData::from_selected(
        form.number_of_elements_per_module(),
        form.is_use_weighted_sum_method(),
        form.objectives(),
    );

    let request = build_evaluation_request(
        knowledge_graph,
        modularisation_result,
        &objective_data,
    )?;

    send(request, transport).await
}

async fn send(
    request: BackendRequest,
    transport: &dyn BackendTransport,
) -> Result<ResultArtifact, MappedErrors> {
    let endpoint = request.endpoint;

    match transport.send(request).await {
        Err(err) => {
            error!(
                code = TelemetryCode::UCSUBMIT0003.to_string(),
                endpoint = endpoint.path(),
                "Backend request failed: {err}"
            );

            Err(err)
        }
        Ok(artifact) => {
            debug!(
                code = TelemetryCode::UCSUBMIT0002.to_string(),
                endpoint = endpoint.path(),
                size = artifact.len(),
                "Result artifact received"
            );

            Ok(artifact)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dtos::{
        app_settings::fixtures::settings, backend_request::Endpoint,
    };

    use async_trait::async_trait;
    use mycelium_base::utils::errors::execution_err;
    use std::sync::Mutex;

    struct RecordingTransport {
        requests: Mutex<Vec<BackendRequest>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn new(fail: bool) -> Self {
            Self {
                requests: Mutex::new(vec![]),
                fail,
            }
        }

        fn endpoints(&self) -> Vec<Endpoint> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|request| request.endpoint)
                .collect()
        }
    }

    #[async_trait]
    impl BackendTransport for RecordingTransport {
        async fn send(
            &self,
            request: BackendRequest,
        ) -> Result<ResultArtifact, MappedErrors> {
            self.requests.lock().unwrap().push(request);

            if self.fail {
                return execution_err("backend answered 500").as_error();
            }

            Ok(ResultArtifact::new(vec![0x50, 0x4b, 0x03, 0x04]))
        }
    }

    fn form(file_name: &str) -> ModularisationForm {
        let mut form = ModularisationForm::from_settings(&settings()).unwrap();
        form.set_model_file(UploadedFile::new(file_name.to_string(), "data"));
        form
    }

    #[tokio::test]
    async fn test_submit_sends_one_request_per_call() {
        let transport = RecordingTransport::new(false);
        let form = form("graph.graphml");

        let artifact = submit_modularisation(&form, &transport).await.unwrap();
        submit_modularisation(&form, &transport).await.unwrap();

        assert_eq!(artifact.len(), 4);
        assert_eq!(transport.endpoints(), vec![Endpoint::Apply; 2]);
    }

    #[tokio::test]
    async fn test_classification_failure_sends_nothing() {
        let transport = RecordingTransport::new(false);

        let result = submit_modularisation(&form("model.pdf"), &transport).await;

        assert!(result.is_err());
        assert!(transport.endpoints().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_returned() {
        let transport = RecordingTransport::new(true);

        let result =
            submit_modularisation(&form("model.uml"), &transport).await;

        assert!(result.is_err());
        assert_eq!(transport.endpoints(), vec![Endpoint::Modularise]);
    }

    #[tokio::test]
    async fn test_submit_evaluation() {
        let transport = RecordingTransport::new(false);

        submit_evaluation(
            &form("graph.graphml"),
            UploadedFile::new("kg.graphml".to_string(), "<graphml/>"),
            UploadedFile::new("result.json".to_string(), "{}"),
            &transport,
        )
        .await
        .unwrap();

        assert_eq!(
            transport.endpoints(),
            vec![Endpoint::EvaluateModularisationResult]
        );
    }
}
