/*!
 * Translation pipeline for multi-pass document translation.
 *
 * The pipeline processes text through three passes:
 * 1. **Draft Pass**: Produce an initial translation
 * 2. **Reflection Pass**: Critique the draft with itemized suggestions
 * 3. **Improvement Pass**: Edit the draft according to the critique
 *
 * Long inputs are split into chunks first; each chunk then goes through
 * the same three passes with the full document as marked-up context.
 */

pub mod draft_pass;
pub mod improvement_pass;
pub mod orchestrator;
pub mod reflection_pass;

// Re-export types used externally
pub use orchestrator::{PipelineConfig, TranslationPipeline};

use crate::translation::prompts::{CHUNK_END, CHUNK_START};

/// An ordered sequence of contiguous document chunks.
///
/// Chunks are non-overlapping slices of the source text; concatenating them
/// in index order reproduces the original document exactly.
#[derive(Debug, Clone)]
pub struct ChunkedDocument {
    chunks: Vec<String>,
}

impl ChunkedDocument {
    /// Wrap a chunk sequence produced by the splitter
    pub fn new(chunks: Vec<String>) -> Self {
        Self { chunks }
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the document holds no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The chunk at `index`
    pub fn chunk(&self, index: usize) -> &str {
        &self.chunks[index]
    }

    /// The full document with the chunk at `index` wrapped between span
    /// markers.
    ///
    /// Chunks before and after the span are reproduced verbatim, so the
    /// model sees the whole document while being told to act only on the
    /// marked part.
    pub fn delimited_document(&self, index: usize) -> String {
        let mut document = String::new();
        for (i, chunk) in self.chunks.iter().enumerate() {
            if i == index {
                document.push_str(CHUNK_START);
                document.push_str(chunk);
                document.push_str(CHUNK_END);
            } else {
                document.push_str(chunk);
            }
        }
        document
    }
}
