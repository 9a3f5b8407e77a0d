/*!
 * Provider implementations for different completion services.
 *
 * This module contains client implementations for various LLM providers:
 * - OpenAI: OpenAI chat-completions API integration
 * - Ollama: Local LLM server
 * - Mock: Scripted provider for testing
 */

use async_trait::async_trait;
use once_cell::sync::OnceCell;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::{ConfigError, ProviderError};

/// Environment variable holding the default provider's API credential
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// A single-turn chat completion request
///
/// Providers translate this into their own wire format. The system message
/// frames the task, the user message carries the text to act on.
#[derive(Debug, Clone, Default)]
pub struct ChatRequest {
    /// System instruction
    pub system: String,

    /// User message
    pub user: String,

    /// Temperature for generation
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate
    pub max_output_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new request from a system and user message
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            ..Default::default()
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }
}

/// A completion response with the extracted text payload
#[derive(Debug, Clone)]
pub struct ChatResponse {
    /// Text extracted from the provider response
    pub text: String,

    /// Number of prompt tokens, when the provider reports usage
    pub prompt_tokens: Option<u64>,

    /// Number of completion tokens, when the provider reports usage
    pub completion_tokens: Option<u64>,
}

/// Common trait for all LLM providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the translation
/// pipeline. It is object safe so providers can be selected at runtime.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug {
    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<ChatResponse, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;

    /// Human-readable provider name for diagnostics
    fn name(&self) -> &str;
}

static DEFAULT_PROVIDER: OnceCell<Arc<dyn ChatProvider>> = OnceCell::new();

/// Process-wide default provider, used when the caller supplies none.
///
/// Built lazily on first use from the `OPENAI_API_KEY` environment variable
/// and never mutated afterwards. Callers that want a different provider, a
/// different model, or full control over construction should pass their own
/// `ChatProvider` instead.
pub fn default_provider() -> Result<Arc<dyn ChatProvider>, ConfigError> {
    DEFAULT_PROVIDER
        .get_or_try_init(|| {
            let api_key = std::env::var(OPENAI_API_KEY_ENV).map_err(|_| {
                ConfigError::MissingApiKey(format!(
                    "{} is not set and no provider was supplied",
                    OPENAI_API_KEY_ENV
                ))
            })?;
            Ok(Arc::new(openai::OpenAI::new(api_key)) as Arc<dyn ChatProvider>)
        })
        .cloned()
}

pub mod mock;
pub mod ollama;
pub mod openai;
