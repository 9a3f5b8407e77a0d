/*!
 * Pipeline orchestrator for coordinating translation passes.
 *
 * The orchestrator routes a request to the whole-text or chunked path based
 * on its token count, runs the three passes, and reassembles chunked output
 * in document order.
 */

use log::{debug, info};
use std::sync::Arc;

use crate::errors::TranslationError;
use crate::providers::ChatProvider;
use crate::token_utils::{count_tokens, split_by_token_target};
use crate::translation::TranslationRequest;
use crate::translation::planner::plan_chunk_size;
use crate::translation::prompts::LanguagePair;

use super::ChunkedDocument;
use super::draft_pass::DraftPass;
use super::improvement_pass::ImprovementPass;
use super::reflection_pass::ReflectionPass;

/// Configuration for the translation pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Temperature for all passes
    pub temperature: f32,

    /// Maximum number of tokens the model may generate per pass
    pub max_output_tokens: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_output_tokens: 4096,
        }
    }
}

/// The three-pass translation pipeline.
///
/// Passes run strictly in order, and chunks strictly one after another;
/// nothing is shared between concurrent `run` calls, so a pipeline may be
/// used from several tasks at once.
pub struct TranslationPipeline {
    provider: Arc<dyn ChatProvider>,
    draft: DraftPass,
    reflection: ReflectionPass,
    improvement: ImprovementPass,
}

impl TranslationPipeline {
    /// Create a pipeline over the given provider
    pub fn new(provider: Arc<dyn ChatProvider>, config: PipelineConfig) -> Self {
        Self {
            provider,
            draft: DraftPass::new(config.temperature, config.max_output_tokens),
            reflection: ReflectionPass::new(config.temperature, config.max_output_tokens),
            improvement: ImprovementPass::new(config.temperature, config.max_output_tokens),
        }
    }

    /// Translate a request, routing to the whole-text or chunked path by
    /// token count.
    ///
    /// All-or-nothing: the first failing pass aborts the call and no partial
    /// result is returned.
    pub async fn run(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let total_tokens = count_tokens(&request.source_text)?;
        info!(
            "Translating {} tokens with provider '{}' (budget {})",
            total_tokens,
            self.provider.name(),
            request.token_budget
        );

        let languages = LanguagePair::new(&request.source_lang, &request.target_lang);

        if total_tokens < request.token_budget {
            return self
                .translate_whole(&languages, &request.source_text, &request.country)
                .await;
        }

        let chunk_size = plan_chunk_size(total_tokens, request.token_budget);
        let chunks = split_by_token_target(&request.source_text, chunk_size)?;
        debug!(
            "Split {} tokens into {} chunks of ~{} tokens",
            total_tokens,
            chunks.len(),
            chunk_size
        );

        let document = ChunkedDocument::new(chunks);
        let translations = self
            .translate_chunks(&languages, &document, &request.country)
            .await?;

        // Chunks carry their own boundary whitespace, so plain concatenation
        // reassembles the document
        Ok(translations.concat())
    }

    /// Run the three passes over a whole text
    async fn translate_whole(
        &self,
        languages: &LanguagePair,
        source_text: &str,
        country: &str,
    ) -> Result<String, TranslationError> {
        let provider = self.provider.as_ref();

        let draft = self
            .draft
            .translate_text(provider, languages, source_text)
            .await?;
        let critique = self
            .reflection
            .critique_text(provider, languages, source_text, &draft, country)
            .await?;
        let improved = self
            .improvement
            .refine_text(provider, languages, source_text, &draft, &critique)
            .await?;

        Ok(improved)
    }

    /// Run the three passes over every chunk in order, returning one final
    /// translation per chunk, index-aligned with the input
    async fn translate_chunks(
        &self,
        languages: &LanguagePair,
        document: &ChunkedDocument,
        country: &str,
    ) -> Result<Vec<String>, TranslationError> {
        let provider = self.provider.as_ref();
        let mut translations = Vec::with_capacity(document.len());

        for index in 0..document.len() {
            info!("Translating chunk {}/{}", index + 1, document.len());

            let draft = self
                .draft
                .translate_chunk(provider, languages, document, index)
                .await?;
            let critique = self
                .reflection
                .critique_chunk(provider, languages, document, index, &draft, country)
                .await?;
            let improved = self
                .improvement
                .refine_chunk(provider, languages, document, index, &draft, &critique)
                .await?;

            translations.push(improved);
        }

        Ok(translations)
    }
}
