use crate::transport::TransportError;

use std::time::Duration;
use url::Url;

/// The backend runs the genetic algorithm before answering, so requests are
/// allowed to take long.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3600;

/// Where and how the backend is reached.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    backend_url: Url,
    timeout: Duration,
}

impl ClientConfig {
    /// Parse the base URL of the backend.
    ///
    /// A trailing slash is added when missing so endpoint paths are appended
    /// to the base path instead of replacing its last segment.
    ///
    pub fn new(
        backend_url: &str,
        timeout_secs: u64,
    ) -> Result<Self, TransportError> {
        let mut url = Url::parse(backend_url)?;

        if url.cannot_be_a_base() {
            return Err(TransportError::InvalidBaseUrl {
                url: backend_url.to_string(),
            });
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            backend_url: url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The absolute URL of one backend path.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, TransportError> {
        Ok(self.backend_url.join(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_keeps_base_path() {
        let config =
            ClientConfig::new("http://localhost:8080/api", 10).unwrap();

        assert_eq!(config.backend_url().as_str(), "http://localhost:8080/api/");
        assert_eq!(
            config.endpoint_url("modularise").unwrap().as_str(),
            "http://localhost:8080/api/modularise"
        );

        let config = ClientConfig::new("http://localhost:8080", 10).unwrap();

        assert_eq!(
            config.endpoint_url("apply").unwrap().as_str(),
            "http://localhost:8080/apply"
        );
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(ClientConfig::new("not a url", 10).is_err());
        assert!(ClientConfig::new("mailto:someone@example.com", 10).is_err());
    }
}
