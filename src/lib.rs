/*!
 * # redraft
 *
 * A Rust library for document translation using AI, with a draft,
 * reflection and improvement loop.
 *
 * ## Features
 *
 * - Three-pass translation: draft, itemized critique, final edit
 * - Long documents are split into token-bounded chunks; each chunk is
 *   translated with the full document as marked-up context
 * - Country-aware critique for colloquial language variants
 * - Multiple AI providers:
 *   - OpenAI API
 *   - Ollama (local LLM)
 * - Configurable token budget and generation parameters
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: AI-powered translation pipeline:
 *   - `translation::core`: Core translation service and entry points
 *   - `translation::planner`: Chunk size planning
 *   - `translation::prompts`: Prompt templates for the three passes
 *   - `translation::pipeline`: Pass implementations and the orchestrator
 * - `token_utils`: Token counting and token-bounded splitting
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for various LLM providers:
 *   - `providers::openai`: OpenAI API client
 *   - `providers::ollama`: Ollama API client
 *   - `providers::mock`: Scripted provider for testing
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod token_utils;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ConfigError, ProviderError, SplitError, TranslationError};
pub use language_utils::resolve_language_name;
pub use providers::{ChatProvider, ChatRequest, ChatResponse};
pub use translation::{TranslationRequest, Translator, translate};
