//! Outbound client for the Gemini generateContent endpoint

use std::time::Duration;
use url::Url;

use super::UpstreamError;
use crate::api::gemini::{GenerateContentRequest, GenerateContentResponse, ModelInfo, ModelsResponse};
use crate::config::UpstreamConfig;

/// Client for the Gemini API, holding the server-side credential
///
/// One instance is shared across all requests; every call is independent and
/// opens its own outbound request.
pub struct GeminiClient {
    http: reqwest::Client,
    base: Url,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from upstream config and a resolved API key
    pub fn new(config: &UpstreamConfig, api_key: String) -> Result<Self, Box<dyn std::error::Error>> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        let base = Url::parse(config.base_url())?;

        Ok(Self {
            http,
            base,
            model: config.model.clone(),
            api_key,
        })
    }

    /// Endpoint URL for `path` with the credential attached as a query parameter
    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }

    /// Send one prompt to generateContent and return the generated text
    ///
    /// The prompt goes into the request envelope unmodified. Non-success
    /// statuses have their body logged and are surfaced as
    /// [`UpstreamError::Status`]; a success body without a usable candidate is
    /// [`UpstreamError::InvalidShape`].
    pub async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = self.endpoint(&format!("/v1beta/models/{}:generateContent", self.model));
        let body = GenerateContentRequest::from_prompt(prompt);

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending generateContent request"
        );

        let response = self.http.post(url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                error_body = %error_body,
                "Gemini API returned an error"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let reply: GenerateContentResponse = match response.json().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Gemini response did not parse as generateContent JSON");
                return Err(UpstreamError::InvalidShape);
            }
        };

        match reply.first_text() {
            Some(text) => {
                tracing::debug!(response_len = text.len(), "Received generated text");
                Ok(text.to_string())
            }
            None => {
                tracing::error!("Gemini response is missing candidates or content parts");
                Err(UpstreamError::InvalidShape)
            }
        }
    }

    /// List available models; used by the CLI connectivity check
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, UpstreamError> {
        let url = self.endpoint("/v1beta/models");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                error_body = %error_body,
                "Gemini models listing failed"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let listing: ModelsResponse = match response.json().await {
            Ok(listing) => listing,
            Err(e) => {
                tracing::error!(error = %e, "Gemini models listing did not parse");
                return Err(UpstreamError::InvalidShape);
            }
        };

        Ok(listing.models)
    }
}
