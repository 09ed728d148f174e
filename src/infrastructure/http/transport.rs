use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::shared::errors::{BulkImportError, ImportResult};

/// Outbound HTTP GET boundary.
///
/// Importers never touch the HTTP client directly; everything they need
/// from a response is carried by [`FetchedResponse`]. Tests substitute a
/// recording fake behind this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, query: &[(String, String)]) -> ImportResult<FetchedResponse>;
}

/// Status code, declared content type and textual body of one GET response.
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchedResponse {
    /// Content type without charset or boundary parameters.
    pub fn mime_type(&self) -> Option<&str> {
        self.content_type
            .as_deref()
            .map(|value| value.split(';').next().unwrap_or(value).trim())
    }
}

/// Production transport backed by a shared reqwest client.
///
/// The client is built once with a timeout and user agent from
/// configuration and reused for every outbound request.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout_secs: u64, user_agent: &str) -> ImportResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                BulkImportError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, query: &[(String, String)]) -> ImportResult<FetchedResponse> {
        debug!("GET {}", url);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await?;

        Ok(FetchedResponse {
            status,
            content_type,
            body,
        })
    }
}
