/*!
 * Core translation service implementation.
 *
 * This module contains the main Translator struct and its implementation,
 * which is responsible for translating documents using AI providers.
 */

use std::sync::Arc;
use std::time::Duration;

use crate::app_config::{Config, TranslationProvider};
use crate::errors::{ConfigError, TranslationError};
use crate::providers::ollama::Ollama;
use crate::providers::openai::OpenAI;
use crate::providers::{ChatProvider, default_provider};
use crate::translation::TranslationRequest;
use crate::translation::pipeline::{PipelineConfig, TranslationPipeline};

/// Translation service over a chat completion provider.
///
/// Holds no per-request state; a single service may serve any number of
/// concurrent `translate` calls.
pub struct Translator {
    pipeline: TranslationPipeline,
}

impl Translator {
    /// Create a translator over an explicit provider with default settings
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self::with_pipeline_config(provider, PipelineConfig::default())
    }

    /// Create a translator over an explicit provider and pipeline settings
    pub fn with_pipeline_config(provider: Arc<dyn ChatProvider>, config: PipelineConfig) -> Self {
        Self {
            pipeline: TranslationPipeline::new(provider, config),
        }
    }

    /// Create a translator from the application configuration.
    ///
    /// The OpenAI API key falls back to the `OPENAI_API_KEY` environment
    /// variable when the config leaves it empty.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let provider_config = config.translation.active_provider_config().ok_or_else(|| {
            ConfigError::UnknownProvider(config.translation.provider.to_lowercase_string())
        })?;
        let timeout = Duration::from_secs(provider_config.timeout_secs);

        let provider: Arc<dyn ChatProvider> = match config.translation.provider {
            TranslationProvider::OpenAI => {
                let api_key = if provider_config.api_key.is_empty() {
                    std::env::var(crate::providers::OPENAI_API_KEY_ENV).map_err(|_| {
                        ConfigError::MissingApiKey(
                            "no api_key in config and OPENAI_API_KEY is not set".to_string(),
                        )
                    })?
                } else {
                    provider_config.api_key.clone()
                };

                let mut client = OpenAI::new(api_key).with_timeout(timeout);
                if !provider_config.model.is_empty() {
                    client = client.with_model(&provider_config.model);
                }
                if !provider_config.endpoint.is_empty() {
                    client = client.with_endpoint(&provider_config.endpoint);
                }
                Arc::new(client)
            }
            TranslationProvider::Ollama => {
                let mut client = Ollama::new(&provider_config.model).with_timeout(timeout);
                if !provider_config.endpoint.is_empty() {
                    client = client.with_endpoint(&provider_config.endpoint);
                }
                Arc::new(client)
            }
        };

        let pipeline_config = PipelineConfig {
            temperature: config.translation.common.temperature,
            max_output_tokens: config.translation.common.max_output_tokens,
        };

        Ok(Self::with_pipeline_config(provider, pipeline_config))
    }

    /// Translate a request.
    ///
    /// All-or-nothing: either the full pipeline completes and the final
    /// translation is returned, or the first failure propagates to the
    /// caller.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        request.validate()?;
        self.pipeline.run(request).await
    }
}

/// Translate a request with the process-wide default provider.
///
/// The default provider is built lazily from the environment on first use;
/// construct a [`Translator`] over an explicit provider for anything beyond
/// that.
pub async fn translate(request: &TranslationRequest) -> Result<String, TranslationError> {
    let provider = default_provider()?;
    Translator::new(provider).translate(request).await
}
