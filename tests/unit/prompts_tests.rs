/*!
 * Tests for prompt construction
 */

use redraft::translation::prompts::{
    CHUNK_END, CHUNK_START, LanguagePair, chunk_improvement_prompt, chunk_reflection_prompt,
    draft_prompt, improvement_prompt, reflection_prompt,
};

fn languages() -> LanguagePair {
    LanguagePair::new("en", "es")
}

/// Test that the draft prompt carries the source text and language names
#[test]
fn test_draftPrompt_shouldCarrySourceTextAndLanguages() {
    let (system, user) = draft_prompt(&languages(), "The cat sat on the mat.");

    assert!(system.contains("English"));
    assert!(system.contains("Spanish"));
    assert!(user.contains("The cat sat on the mat."));
    assert!(user.contains("Output only the translation"));
}

/// Test that a non-empty country shows up in the reflection instruction
#[test]
fn test_reflectionPrompt_withCountry_shouldContainCountry() {
    let (_, user) = reflection_prompt(&languages(), "Hello.", "Hola.", "Mexico");

    assert!(user.contains("Mexico"));
    assert!(user.contains("colloquially spoken"));
}

/// Test that an empty country leaves no locale adaptation clause behind
#[test]
fn test_reflectionPrompt_withoutCountry_shouldOmitLocaleClause() {
    let (_, user) = reflection_prompt(&languages(), "Hello.", "Hola.", "");

    assert!(!user.contains("colloquially spoken"));
    assert!(!user.contains("{country_clause}"));
}

/// Test that the improvement prompt carries all three inputs
#[test]
fn test_improvementPrompt_shouldCarryAllInputs() {
    let (_, user) = improvement_prompt(
        &languages(),
        "source words",
        "draft words",
        "suggestion words",
    );

    assert!(user.contains("source words"));
    assert!(user.contains("draft words"));
    assert!(user.contains("suggestion words"));
}

/// Test that chunked reflection prompts keep the span markers and context
#[test]
fn test_chunkReflectionPrompt_shouldKeepMarkersAndContext() {
    let delimited = format!(
        "before text {}chunk text{} after text",
        CHUNK_START, CHUNK_END
    );
    let (_, user) =
        chunk_reflection_prompt(&languages(), &delimited, "chunk text", "texto", "Mexico");

    assert!(user.contains(CHUNK_START));
    assert!(user.contains(CHUNK_END));
    assert!(user.contains("before text"));
    assert!(user.contains("after text"));
    assert!(user.contains("Mexico"));
}

/// Test that chunked improvement prompts carry draft and suggestions
#[test]
fn test_chunkImprovementPrompt_shouldCarryDraftAndSuggestions() {
    let delimited = format!("{}solo chunk{}", CHUNK_START, CHUNK_END);
    let (_, user) = chunk_improvement_prompt(
        &languages(),
        &delimited,
        "solo chunk",
        "draft translation",
        "expert suggestions",
    );

    assert!(user.contains("draft translation"));
    assert!(user.contains("expert suggestions"));
    assert!(user.contains("only the improved translation"));
}
