/*!
 * Document translation using AI providers.
 *
 * This module contains the core functionality for translating documents
 * through a draft, reflection and improvement loop. It is split into
 * several submodules:
 *
 * - `core`: Core translation service definition and entry points
 * - `planner`: Chunk size planning for long inputs
 * - `prompts`: Prompt templates and builders for the three passes
 * - `pipeline`: The three-pass pipeline and its orchestrator
 */

use crate::errors::ConfigError;

// Re-export main types for easier usage
pub use self::core::{Translator, translate};
pub use self::pipeline::{PipelineConfig, TranslationPipeline};
pub use self::planner::plan_chunk_size;
pub use self::prompts::LanguagePair;

// Submodules
pub mod core;
pub mod pipeline;
pub mod planner;
pub mod prompts;

/// Default number of tokens a text may hold before it is chunked
pub const DEFAULT_TOKEN_BUDGET: usize = 1000;

/// A single translation request.
///
/// Request-scoped and immutable once built; nothing about it persists
/// across calls.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Source language (ISO code or English name)
    pub source_lang: String,

    /// Target language (ISO code or English name)
    pub target_lang: String,

    /// The text to translate
    pub source_text: String,

    /// Target country for colloquial adaptation ("" = unspecified)
    pub country: String,

    /// Token count above which the text is split into chunks
    pub token_budget: usize,
}

impl TranslationRequest {
    /// Create a request with the default token budget and no country
    pub fn new(
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            source_text: source_text.into(),
            country: String::new(),
            token_budget: DEFAULT_TOKEN_BUDGET,
        }
    }

    /// Set the target country whose colloquial variant the translation
    /// should match
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the token budget
    pub fn token_budget(mut self, token_budget: usize) -> Self {
        self.token_budget = token_budget;
        self
    }

    /// Validate the request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token_budget == 0 {
            return Err(ConfigError::InvalidTokenBudget(self.token_budget));
        }
        Ok(())
    }
}
