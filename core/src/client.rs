use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use crate::config::PromokitConfig;
use crate::errors::{GenerateError, GenerateResult};
use crate::types::*;

/// Anything that can turn a prompt into generated text.
///
/// The seam between the generation cycle and the provider; panels are generic
/// over it so the cycle can be exercised without a live endpoint.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text from a prompt, one provider round trip per call
    async fn generate_text(&self, prompt: &str) -> GenerateResult<String>;
}

/// Client for the Gemini generateContent API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: PromokitConfig,
    model: GeminiModel,
}

impl GeminiClient {
    /// Create a new Gemini API client.
    ///
    /// Fails fast when no API key has been supplied; requests are never sent
    /// unauthenticated.
    pub fn new(config: PromokitConfig) -> GenerateResult<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            GenerateError::ConfigError(
                "API key is required to initialize the Gemini client".to_string(),
            )
        })?;

        let model = GeminiModel::new(api_key, config.model_name.clone());

        let client = Client::new();

        Ok(Self {
            client,
            config,
            model,
        })
    }

    /// Model identifier requests are sent to
    pub fn model_name(&self) -> &str {
        &self.model.model_name
    }

    /// Get the endpoint URL for the configured model
    fn endpoint_url(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model.model_name, self.model.api_key
        )
    }

    /// Wraps a prompt in the provider envelope: a single "user" turn
    pub(crate) fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        let generation_config = self.config.temperature.map(|temperature| GenerationConfig {
            temperature: Some(temperature),
            ..GenerationConfig::default()
        });

        GenerateContentRequest {
            contents: vec![Content::user(prompt.to_string())],
            generation_config,
        }
    }

    /// Issue one generateContent call. No retry; a failed round trip is
    /// reported and left to the caller to re-trigger.
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> GenerateResult<GenerateContentResponse> {
        let url = self.endpoint_url();

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Transport failure calling the Gemini API: {}", e);
                GenerateError::RequestError(format!("Failed to send request: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read Gemini API response body: {}", e);
            GenerateError::ResponseError(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "Gemini API returned an error status");
            return Err(GenerateError::HttpError {
                status_code: status.as_u16(),
                message: format!("API request failed: {}", body),
            });
        }

        serde_json::from_str::<GenerateContentResponse>(&body).map_err(|e| {
            debug!(body = %body, "Undecodable Gemini API response");
            GenerateError::ParsingError(format!("Failed to parse response: {}", e))
        })
    }

    /// Extracts the first text part of the first candidate
    pub fn extract_text(response: &GenerateContentResponse) -> GenerateResult<String> {
        let candidate = response.candidates.first().ok_or_else(|| {
            GenerateError::ResponseError("No candidates in response".to_string())
        })?;

        let content = candidate
            .content
            .as_ref()
            .ok_or_else(|| GenerateError::ResponseError("No content in candidate".to_string()))?;

        content
            .parts
            .iter()
            .find_map(|part| part.text.clone())
            .ok_or_else(|| GenerateError::ResponseError("No text part in content".to_string()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> GenerateResult<String> {
        let request = self.build_request(prompt);
        let response = self.generate_content(request).await?;
        Self::extract_text(&response)
    }
}
