//! HTTP client for the analyze endpoint.
//!
//! # Responsibilities
//! - Build a reqwest client from configuration (connect timeout, user agent)
//! - Send one JSON POST per call, tagged with a request ID
//! - Split transport failures from decode failures
//!
//! # Design Decisions
//! - The overall deadline is owned by the runner, not by reqwest
//! - Non-2xx statuses are not errors: the server reports its own failures
//!   inside `result`, so any decodable body is rendered

use std::time::Duration;
use reqwest::Client;
use uuid::Uuid;

use crate::analyze::error::{RequestError, RequestResult};
use crate::analyze::types::{AnalyzeRequest, AnalyzeResponse};
use crate::config::ClientConfig;

/// Header carrying the per-invocation correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Client bound to a single analyze URL.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    client: Client,
    url: String,
    deadline: Duration,
}

impl AnalyzeClient {
    /// Build a client from validated configuration.
    pub fn from_config(config: &ClientConfig) -> RequestResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.timeouts.connect_ms))
            .user_agent(config.endpoint.user_agent.clone())
            .build()
            .map_err(RequestError::Client)?;

        Ok(Self {
            client,
            url: config.analyze_url(),
            deadline: Duration::from_millis(config.timeouts.request_ms),
        })
    }

    /// URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Deadline the runner applies to each invocation.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Send the payload and decode the response body.
    ///
    /// Not bounded in time; callers race it against their own deadline.
    pub async fn analyze(
        &self,
        payload: &AnalyzeRequest,
        request_id: Uuid,
    ) -> RequestResult<AnalyzeResponse> {
        let resp = self
            .client
            .post(&self.url)
            .header(X_REQUEST_ID, request_id.to_string())
            .json(payload)
            .send()
            .await
            .map_err(RequestError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(
                request_id = %request_id,
                status = %status,
                "Analyze endpoint returned non-success status, decoding body anyway"
            );
        }

        let body = resp.bytes().await.map_err(RequestError::Network)?;
        let decoded: AnalyzeResponse = serde_json::from_slice(&body)?;
        Ok(decoded)
    }
}
