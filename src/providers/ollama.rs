use std::time::Duration;
use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{ChatProvider, ChatRequest, ChatResponse};

/// Default endpoint of a local Ollama server
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Ollama client for interacting with a local Ollama server
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// HTTP client for making requests
    client: Client,
    /// Model name to use for generation
    model: String,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    /// Model name to use for generation
    model: String,
    /// Prompt to generate from
    prompt: String,
    /// System message to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Additional model parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<GenerationOptions>,
    /// Whether to stream the response
    stream: bool,
}

/// Model parameters for a generate request
#[derive(Debug, Serialize)]
pub struct GenerationOptions {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

/// Generate response from the Ollama API
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    /// Generated text
    pub response: String,
    /// Number of prompt tokens evaluated
    pub prompt_eval_count: Option<u64>,
    /// Number of tokens generated
    pub eval_count: Option<u64>,
}

impl Ollama {
    /// Create a new Ollama client for the given model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            model: model.into(),
        }
    }

    /// Set a custom server URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.base_url = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    /// Complete a generate request
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, ProviderError> {
        let api_url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Ollama API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ChatProvider for Ollama {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let options = if request.temperature.is_some() || request.max_output_tokens.is_some() {
            Some(GenerationOptions {
                temperature: request.temperature,
                num_predict: request.max_output_tokens,
            })
        } else {
            None
        };

        let api_request = GenerationRequest {
            model: self.model.clone(),
            prompt: request.user,
            system: if request.system.is_empty() {
                None
            } else {
                Some(request.system)
            },
            options,
            stream: false,
        };

        let api_response = self.generate(api_request).await?;

        Ok(ChatResponse {
            text: api_response.response,
            prompt_tokens: api_response.prompt_eval_count,
            completion_tokens: api_response.eval_count,
        })
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
