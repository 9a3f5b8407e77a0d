/*!
 * Reflection pass: critique of the draft translation.
 *
 * The critique is a plain-text list of itemized suggestions covering
 * accuracy, fluency, style and terminology. When a target country is set,
 * the pass additionally asks for the colloquial variant of the target
 * language spoken there.
 */

use log::debug;

use crate::errors::ProviderError;
use crate::providers::{ChatProvider, ChatRequest};
use crate::translation::prompts::{self, LanguagePair};

use super::ChunkedDocument;

/// Produces improvement suggestions for a draft translation.
#[derive(Debug, Clone)]
pub struct ReflectionPass {
    /// Temperature for generation
    temperature: f32,
    /// Maximum number of tokens the model may generate
    max_output_tokens: u32,
}

impl ReflectionPass {
    /// Create a reflection pass with the given generation settings
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

    /// Critique the translation of a whole text
    pub async fn critique_text(
        &self,
        provider: &dyn ChatProvider,
        languages: &LanguagePair,
        source_text: &str,
        translation: &str,
        country: &str,
    ) -> Result<String, ProviderError> {
        let prompt = prompts::reflection_prompt(languages, source_text, translation, country);
        let response = provider.complete(self.request(prompt)).await?;
        debug!("Reflection pass produced {} chars", response.text.len());
        Ok(response.text)
    }

    /// Critique the translation of the chunk at `index`, with the rest of
    /// the document as context
    pub async fn critique_chunk(
        &self,
        provider: &dyn ChatProvider,
        languages: &LanguagePair,
        document: &ChunkedDocument,
        index: usize,
        translation: &str,
        country: &str,
    ) -> Result<String, ProviderError> {
        let delimited = document.delimited_document(index);
        let prompt = prompts::chunk_reflection_prompt(
            languages,
            &delimited,
            document.chunk(index),
            translation,
            country,
        );
        let response = provider.complete(self.request(prompt)).await?;
        debug!(
            "Reflection pass produced {} chars for chunk {}",
            response.text.len(),
            index
        );
        Ok(response.text)
    }
}
