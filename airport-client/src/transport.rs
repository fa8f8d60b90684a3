//! HTTP transport for the airport service.

use async_trait::async_trait;
use log::debug;
use reqwest::{header::ACCEPT, Client, Url};

use crate::config::ClientConfig;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e)
        } else {
            Self::Request(e)
        }
    }
}

/// Status and body exactly as the server sent them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues GET requests against a fixed base address.
///
/// Error statuses are ordinary responses. Only failing to get a response at
/// all is an `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)])
        -> Result<RawResponse, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Resolve `path` under the base address and append `query`.
    fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, TransportError> {
        let invalid = |reason: String| TransportError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let mut base = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }
        // without the trailing slash `join` would replace the last segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut url = base
            .join(path.trim_start_matches('/'))
            .map_err(|e| invalid(e.to_string()))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = self.url(path, query)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("status {status}, {} bytes", body.len());

        Ok(RawResponse { status, body })
    }
}
