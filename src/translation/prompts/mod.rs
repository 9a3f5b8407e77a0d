/*!
 * Prompt construction for the translation pipeline.
 *
 * Each builder is a pure function from texts to an immutable
 * (system, user) instruction pair; no hidden state.
 */

use crate::language_utils::resolve_language_name;

pub mod templates;

use self::templates::{
    CHUNK_DRAFT_USER, CHUNK_IMPROVEMENT_USER, CHUNK_REFLECTION_USER, COUNTRY_CLAUSE, DRAFT_SYSTEM,
    DRAFT_USER, IMPROVEMENT_SYSTEM, IMPROVEMENT_USER, REFLECTION_SYSTEM, REFLECTION_USER,
};

pub use self::templates::PromptTemplate;

/// Marker opening the span a chunked prompt acts on
pub const CHUNK_START: &str = "<TRANSLATE_THIS>";

/// Marker closing the span a chunked prompt acts on
pub const CHUNK_END: &str = "</TRANSLATE_THIS>";

/// A resolved source/target language pair.
///
/// Inputs may be ISO codes or names; they are resolved once to English
/// names so every prompt reads the same way.
#[derive(Debug, Clone)]
pub struct LanguagePair {
    /// English name of the source language
    pub source: String,
    /// English name of the target language
    pub target: String,
}

impl LanguagePair {
    /// Resolve a language pair from codes or names
    pub fn new(source_lang: &str, target_lang: &str) -> Self {
        Self {
            source: resolve_language_name(source_lang),
            target: resolve_language_name(target_lang),
        }
    }
}

/// Render the locale clause for reflection prompts; empty when no country
/// is requested
fn country_clause(languages: &LanguagePair, country: &str) -> String {
    if country.is_empty() {
        String::new()
    } else {
        COUNTRY_CLAUSE.render(&[
            ("target_language", &languages.target),
            ("country", country),
        ])
    }
}

/// Build the draft-pass prompt for a whole text
pub fn draft_prompt(languages: &LanguagePair, source_text: &str) -> (String, String) {
    let vars = [
        ("source_language", languages.source.as_str()),
        ("target_language", languages.target.as_str()),
        ("source_text", source_text),
    ];
    (DRAFT_SYSTEM.render(&vars), DRAFT_USER.render(&vars))
}

/// Build the reflection-pass prompt for a whole text
pub fn reflection_prompt(
    languages: &LanguagePair,
    source_text: &str,
    translation: &str,
    country: &str,
) -> (String, String) {
    let clause = country_clause(languages, country);
    let vars = [
        ("source_language", languages.source.as_str()),
        ("target_language", languages.target.as_str()),
        ("country_clause", clause.as_str()),
        ("source_text", source_text),
        ("translation", translation),
    ];
    (REFLECTION_SYSTEM.render(&vars), REFLECTION_USER.render(&vars))
}

/// Build the improvement-pass prompt for a whole text
pub fn improvement_prompt(
    languages: &LanguagePair,
    source_text: &str,
    translation: &str,
    suggestions: &str,
) -> (String, String) {
    let vars = [
        ("source_language", languages.source.as_str()),
        ("target_language", languages.target.as_str()),
        ("source_text", source_text),
        ("translation", translation),
        ("suggestions", suggestions),
    ];
    (
        IMPROVEMENT_SYSTEM.render(&vars),
        IMPROVEMENT_USER.render(&vars),
    )
}

/// Build the draft-pass prompt for one chunk shown inside its full document
pub fn chunk_draft_prompt(
    languages: &LanguagePair,
    delimited_document: &str,
    chunk_text: &str,
) -> (String, String) {
    let vars = [
        ("source_language", languages.source.as_str()),
        ("target_language", languages.target.as_str()),
        ("chunk_start", CHUNK_START),
        ("chunk_end", CHUNK_END),
        ("delimited_document", delimited_document),
        ("chunk_text", chunk_text),
    ];
    (DRAFT_SYSTEM.render(&vars), CHUNK_DRAFT_USER.render(&vars))
}

/// Build the reflection-pass prompt for one chunk shown inside its full
/// document
pub fn chunk_reflection_prompt(
    languages: &LanguagePair,
    delimited_document: &str,
    chunk_text: &str,
    translation: &str,
    country: &str,
) -> (String, String) {
    let clause = country_clause(languages, country);
    let vars = [
        ("source_language", languages.source.as_str()),
        ("target_language", languages.target.as_str()),
        ("country_clause", clause.as_str()),
        ("chunk_start", CHUNK_START),
        ("chunk_end", CHUNK_END),
        ("delimited_document", delimited_document),
        ("chunk_text", chunk_text),
        ("translation", translation),
    ];
    (
        REFLECTION_SYSTEM.render(&vars),
        CHUNK_REFLECTION_USER.render(&vars),
    )
}

/// Build the improvement-pass prompt for one chunk shown inside its full
/// document
pub fn chunk_improvement_prompt(
    languages: &LanguagePair,
    delimited_document: &str,
    chunk_text: &str,
    translation: &str,
    suggestions: &str,
) -> (String, String) {
    let vars = [
        ("source_language", languages.source.as_str()),
        ("target_language", languages.target.as_str()),
        ("chunk_start", CHUNK_START),
        ("chunk_end", CHUNK_END),
        ("delimited_document", delimited_document),
        ("chunk_text", chunk_text),
        ("translation", translation),
        ("suggestions", suggestions),
    ];
    (
        IMPROVEMENT_SYSTEM.render(&vars),
        CHUNK_IMPROVEMENT_USER.render(&vars),
    )
}
