use crate::error::ClientError;
use crate::types::{ChatResponse, HealthResponse};
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Timeout for backend requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client for the KIRA backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    /// Creates a client for the given base URL (scheme and host, no
    /// trailing slash required).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ClientError::BaseUrl("empty".to_string()));
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the backend health report.
    pub async fn check_health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        debug!(%url, "checking backend health");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Sends a chat message and returns the assistant's reply.
    pub async fn send_message(&self, text: &str) -> Result<ChatResponse, ClientError> {
        let url = format!("{}/chat", self.base_url);
        debug!(%url, chars = text.len(), "sending message");

        let response = self
            .http
            .post(&url)
            .json(&json!({ "message": text }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = BackendClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(matches!(
            BackendClient::new(""),
            Err(ClientError::BaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_backend_surfaces_a_request_error() {
        // Port 9 (discard) is a safe never-listening target.
        let client = BackendClient::new("http://127.0.0.1:9").unwrap();
        let result = client.check_health().await;
        assert!(matches!(result, Err(ClientError::Request(_))));
    }
}
