use super::TransportError;
use crate::models::ClientConfig;

use async_trait::async_trait;
use modcmga_core::domain::{
    dtos::{
        backend_request::BackendRequest,
        multipart::{MultipartBody, PartValue},
        result_artifact::ResultArtifact,
    },
    entities::BackendTransport,
};
use mycelium_base::utils::errors::{execution_err, MappedErrors};
use reqwest::{
    header::ACCEPT,
    multipart::{Form, Part},
};
use tracing::debug;

/// Encode a transport independent body as a reqwest multipart form.
///
/// File parts keep the original file name. Their content is shared with the
/// uploaded file rather than copied.
///
pub fn to_multipart_form(body: MultipartBody) -> Form {
    body.into_parts()
        .into_iter()
        .fold(Form::new(), |form, part| match part.value {
            PartValue::Text(value) => form.text(part.name, value),
            PartValue::File(file) => form.part(
                part.name,
                Part::stream_with_length(
                    file.content().clone(),
                    file.content().len() as u64,
                )
                .file_name(file.file_name().to_string()),
            ),
        })
}

/// Sends requests to the backend over HTTP.
///
/// One POST is issued per request. Nothing is retried: a failed run of the
/// genetic algorithm is not something to replay silently.
///
pub struct ReqwestTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    async fn post(
        &self,
        request: BackendRequest,
    ) -> Result<ResultArtifact, TransportError> {
        let url = self.config.endpoint_url(request.endpoint.path())?;

        debug!(
            url = url.as_str(),
            parts = request.body.parts().len(),
            "Posting multipart request"
        );

        let response = self
            .client
            .post(url.as_str())
            .header(ACCEPT, BackendRequest::ACCEPT)
            .multipart(to_multipart_form(request.body))
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(TransportError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(ResultArtifact::new(response.bytes().await?))
    }
}

#[async_trait]
impl BackendTransport for ReqwestTransport {
    async fn send(
        &self,
        request: BackendRequest,
    ) -> Result<ResultArtifact, MappedErrors> {
        match self.post(request).await {
            Ok(artifact) => Ok(artifact),
            Err(err) => execution_err(err.to_string()).as_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modcmga_core::domain::dtos::{
        backend_request::Endpoint, uploaded_file::UploadedFile,
    };
    use wiremock::{
        matchers::{header, header_regex, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const ZIP_MAGIC: &[u8] = &[0x50, 0x4b, 0x03, 0x04];

    fn request() -> BackendRequest {
        BackendRequest::new(
            Endpoint::Apply,
            MultipartBody::new()
                .text("chromosomeEncoding", "LINEAR_LINKAGE_ENCODING")
                .file(
                    "graphmlFile",
                    UploadedFile::new("graph.graphml".to_string(), "<graphml/>"),
                ),
        )
    }

    fn transport(server: &MockServer) -> ReqwestTransport {
        let base_url = format!("{}/api", server.uri());
        ReqwestTransport::new(ClientConfig::new(&base_url, 5).unwrap())
            .unwrap()
    }

    #[tokio::test]
    async fn test_send_posts_multipart_and_returns_artifact() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/apply"))
            .and(header("accept", "application/zip"))
            .and(header_regex(
                "content-type",
                "^multipart/form-data; boundary=",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/zip")
                    .set_body_bytes(ZIP_MAGIC),
            )
            .expect(1)
            .mount(&server)
            .await;

        let artifact = transport(&server).send(request()).await.unwrap();
        assert_eq!(&artifact.content()[..], ZIP_MAGIC);

        let received = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&received[0].body);

        assert!(body.contains(r#"name="chromosomeEncoding""#));
        assert!(body.contains("LINEAR_LINKAGE_ENCODING"));
        assert!(
            body.contains(r#"name="graphmlFile"; filename="graph.graphml""#)
        );
        assert!(body.contains("<graphml/>"));
    }

    #[tokio::test]
    async fn test_file_parts_keep_a_known_length() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(ZIP_MAGIC))
            .mount(&server)
            .await;

        transport(&server).send(request()).await.unwrap();

        let received = server.received_requests().await.unwrap();
        let content_length = received[0]
            .headers
            .get("content-length")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<usize>().ok());

        assert_eq!(content_length, Some(received[0].body.len()));
    }

    #[tokio::test]
    async fn test_error_status_is_a_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/apply"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        assert!(transport(&server).send(request()).await.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_failure() {
        let server = MockServer::start().await;
        let base_url = server.uri();
        drop(server);

        let transport =
            ReqwestTransport::new(ClientConfig::new(&base_url, 5).unwrap())
                .unwrap();

        assert!(transport.send(request()).await.is_err());
    }
}
