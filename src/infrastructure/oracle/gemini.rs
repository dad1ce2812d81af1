//! Gemini implementation of the `Oracle` port.
//!
//! Plain request/response over `generateContent`: no caller-side retry, no
//! streaming. Rate limiting is detected from HTTP 429 or the
//! `RESOURCE_EXHAUSTED` marker in the error body and mapped to its own
//! error variant so the UI can word the message differently.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::domain::errors::OracleError;
use crate::domain::models::{CompletionRequest, OracleConfig};
use crate::domain::ports::Oracle;

/// Marker the API places in quota-exhaustion error bodies.
const RESOURCE_EXHAUSTED_MARKER: &str = "RESOURCE_EXHAUSTED";

pub struct GeminiClient {
    http: Client,
    config: OracleConfig,
}

impl GeminiClient {
    pub fn new(config: OracleConfig) -> Result<Self, OracleError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| OracleError::Network(err.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl Oracle for GeminiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, OracleError> {
        let api_key = self
            .config
            .resolve_api_key()
            .ok_or(OracleError::MissingApiKey)?;

        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let body = GenerateContentRequest::from_completion(&request);

        debug!(model, turns = request.contents.len(), "sending oracle request");
        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| OracleError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 429 || body.contains(RESOURCE_EXHAUSTED_MARKER) {
                return Err(OracleError::RateLimited);
            }
            return Err(OracleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| OracleError::MalformedResponse(err.to_string()))?;

        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(text)
    }
}
