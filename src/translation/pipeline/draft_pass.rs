/*!
 * Draft pass: the initial translation.
 */

use log::debug;

use crate::errors::ProviderError;
use crate::providers::{ChatProvider, ChatRequest};
use crate::translation::prompts::{self, LanguagePair};

use super::ChunkedDocument;

/// Produces the first translation of a text or chunk.
#[derive(Debug, Clone)]
pub struct DraftPass {
    /// Temperature for generation
    temperature: f32,
    /// Maximum number of tokens the model may generate
    max_output_tokens: u32,
}

impl DraftPass {
    /// Create a draft pass with the given generation settings
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

    /// Translate a whole text in one shot
    pub async fn translate_text(
        &self,
        provider: &dyn ChatProvider,
        languages: &LanguagePair,
        source_text: &str,
    ) -> Result<String, ProviderError> {
        let prompt = prompts::draft_prompt(languages, source_text);
        let response = provider.complete(self.request(prompt)).await?;
        debug!("Draft pass produced {} chars", response.text.len());
        Ok(response.text)
    }

    /// Translate the chunk at `index`, with the rest of the document as
    /// context
    pub async fn translate_chunk(
        &self,
        provider: &dyn ChatProvider,
        languages: &LanguagePair,
        document: &ChunkedDocument,
        index: usize,
    ) -> Result<String, ProviderError> {
        let delimited = document.delimited_document(index);
        let prompt = prompts::chunk_draft_prompt(languages, &delimited, document.chunk(index));
        let response = provider.complete(self.request(prompt)).await?;
        debug!(
            "Draft pass produced {} chars for chunk {}",
            response.text.len(),
            index
        );
        Ok(response.text)
    }
}
