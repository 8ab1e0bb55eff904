use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use super::SupplierError;

/// Fetches the raw body behind a URL with a single GET.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SupplierError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Builds a client whose every request is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self))]
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SupplierError> {
        debug!("Sending request");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SupplierError::Transport(format!("GET {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SupplierError::Transport(format!("GET {}: HTTP {}", url, status.as_u16())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SupplierError::Transport(format!("GET {}: reading body: {}", url, e)))?;
        debug!(bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }
}
