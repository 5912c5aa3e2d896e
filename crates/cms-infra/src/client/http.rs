//! `ContentSubmitter` over HTTP.

use std::time::Duration;

use async_trait::async_trait;

use cms_core::domain::{CandidateRecord, FinalizedRecord};
use cms_core::error::SubmissionError;
use cms_core::ports::ContentSubmitter;
use cms_shared::{ApiResponse, ErrorResponse};

/// Route of the create-content endpoint, relative to the base URL.
pub const CONTENT_PATH: &str = "/api/cms/content";

/// Submits candidates to a remote content API.
///
/// Failures to reach the server surface as [`SubmissionError::Transport`],
/// distinct from anything the server itself reports.
#[derive(Debug, Clone)]
pub struct HttpContentClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpContentClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl AsRef<str>,
        timeout: Duration,
    ) -> Result<Self, SubmissionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        Ok(Self::with_client(base_url, client))
    }

    pub fn with_client(base_url: impl AsRef<str>, client: reqwest::Client) -> Self {
        Self {
            endpoint: format!("{}{}", base_url.as_ref().trim_end_matches('/'), CONTENT_PATH),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentSubmitter for HttpContentClient {
    async fn submit(&self, candidate: CandidateRecord) -> Result<FinalizedRecord, SubmissionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&candidate)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "Content API unreachable");
                SubmissionError::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        decode_response(status, &body)
    }
}

/// Interpret a response from the content endpoint.
pub(crate) fn decode_response(
    status: u16,
    body: &[u8],
) -> Result<FinalizedRecord, SubmissionError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice::<ApiResponse<FinalizedRecord>>(body)
            .ok()
            .and_then(ApiResponse::into_data)
            .ok_or_else(|| {
                SubmissionError::Processing(format!("Undecodable success body (status {status})"))
            });
    }

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(envelope) if status == 400 => Err(SubmissionError::from_wire_message(&envelope.error)),
        Ok(envelope) => Err(SubmissionError::Processing(envelope.error)),
        Err(_) => Err(SubmissionError::Processing(format!(
            "Unexpected response (status {status})"
        ))),
    }
}
