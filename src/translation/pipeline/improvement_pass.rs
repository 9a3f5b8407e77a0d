/*!
 * Improvement pass: the final edit of the draft translation.
 */

use log::debug;

use crate::errors::ProviderError;
use crate::providers::{ChatProvider, ChatRequest};
use crate::translation::prompts::{self, LanguagePair};

use super::ChunkedDocument;

/// Edits a draft translation according to the reflection pass critique.
#[derive(Debug, Clone)]
pub struct ImprovementPass {
    /// Temperature for generation
    temperature: f32,
    /// Maximum number of tokens the model may generate
    max_output_tokens: u32,
}

impl ImprovementPass {
    /// Create an improvement pass with the given generation settings
    pub fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
        }
    }

    fn request(&self, (system, user): (String, String)) -> ChatRequest {
        ChatRequest::new(system, user)
            .temperature(self.temperature)
            .max_output_tokens(self.max_output_tokens)
    }

    /// Produce the final translation of a whole text
    pub async fn refine_text(
        &self,
        provider: &dyn ChatProvider,
        languages: &LanguagePair,
        source_text: &str,
        translation: &str,
        suggestions: &str,
    ) -> Result<String, ProviderError> {
        let prompt =
            prompts::improvement_prompt(languages, source_text, translation, suggestions);
        let response = provider.complete(self.request(prompt)).await?;
        debug!("Improvement pass produced {} chars", response.text.len());
        Ok(response.text)
    }

    /// Produce the final translation of the chunk at `index`, with the rest
    /// of the document as context
    pub async fn refine_chunk(
        &self,
        provider: &dyn ChatProvider,
        languages: &LanguagePair,
        document: &ChunkedDocument,
        index: usize,
        translation: &str,
        suggestions: &str,
    ) -> Result<String, ProviderError> {
        let delimited = document.delimited_document(index);
        let prompt = prompts::chunk_improvement_prompt(
            languages,
            &delimited,
            document.chunk(index),
            translation,
            suggestions,
        );
        let response = provider.complete(self.request(prompt)).await?;
        debug!(
            "Improvement pass produced {} chars for chunk {}",
            response.text.len(),
            index
        );
        Ok(response.text)
    }
}
