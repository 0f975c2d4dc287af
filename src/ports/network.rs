use crate::ExtpmError;
use async_trait::async_trait;
use url::Url;

/// Transport-level view of a probe response. Only the status code matters
/// to connectivity checks, so the port does not leak a client type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
}

#[async_trait]
pub trait NetworkOperations: Send + Sync {
    async fn head(&self, url: &Url) -> Result<ProbeResponse, ExtpmError>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpNetwork {
    client: reqwest::Client,
}

impl HttpNetwork {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NetworkOperations for HttpNetwork {
    async fn head(&self, url: &Url) -> Result<ProbeResponse, ExtpmError> {
        let response = self
            .client
            .head(url.as_str())
            .send()
            .await
            .map_err(|e| ExtpmError::network(e.to_string()))?;

        Ok(ProbeResponse {
            status: response.status().as_u16(),
        })
    }
}
