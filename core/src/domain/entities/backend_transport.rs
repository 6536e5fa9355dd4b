use crate::domain::dtos::{
    backend_request::BackendRequest, result_artifact::ResultArtifact,
};

use async_trait::async_trait;
use mycelium_base::utils::errors::MappedErrors;

/// Sends one built request to the modularisation backend.
///
/// Implementations own the HTTP stack and the base URL. A failed call, or a
/// non-success status returned by the backend, is reported as an error; no
/// retry is expected.
///
#[async_trait]
pub trait BackendTransport: Send + Sync {
    async fn send(
        &self,
        request: BackendRequest,
    ) -> Result<ResultArtifact, MappedErrors>;
}
