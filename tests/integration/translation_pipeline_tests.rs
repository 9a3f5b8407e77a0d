/*!
 * End-to-end translation pipeline tests using the scripted mock provider
 */

use std::sync::Arc;

use redraft::errors::{ConfigError, ProviderError, TranslationError};
use redraft::providers::mock::MockProvider;
use redraft::token_utils::{count_tokens, split_by_token_target};
use redraft::translation::prompts::CHUNK_START;
use redraft::translation::{TranslationRequest, Translator, plan_chunk_size};

use crate::common;

/// Short text, three scripted responses: the pipeline must run draft,
/// reflection and improvement exactly once and return the final edit
#[tokio::test]
async fn test_translate_shortText_shouldRunThreePassesAndReturnFinal() {
    let mock = MockProvider::scripted([
        "Bonjour le monde.",
        "no issues found",
        "Bonjour le monde.",
    ]);
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("English", "French", "Hello world.");
    let result = translator.translate(&request).await.unwrap();

    assert_eq!(result, "Bonjour le monde.");
    assert_eq!(mock.invocation_count(), 3);
}

/// The whole-text path must never mark up the prompt with span delimiters
#[tokio::test]
async fn test_translate_shortText_shouldUseWholeTextPrompts() {
    let mock = MockProvider::scripted(["draft", "critique", "final"]);
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("en", "de", "A single short sentence.");
    translator.translate(&request).await.unwrap();

    for invocation in mock.invocations() {
        assert!(!invocation.user.contains(CHUNK_START));
    }
}

/// The reflection prompt must carry the country when one is requested
#[tokio::test]
async fn test_translate_withCountry_shouldMentionCountryInReflection() {
    let mock = MockProvider::scripted(["draft", "critique", "final"]);
    let translator = Translator::new(Arc::new(mock.clone()));

    let request =
        TranslationRequest::new("en", "es", "See you tomorrow, friend.").country("Mexico");
    translator.translate(&request).await.unwrap();

    let invocations = mock.invocations();
    assert_eq!(invocations.len(), 3);
    assert!(!invocations[0].user.contains("Mexico"));
    assert!(invocations[1].user.contains("Mexico"));
}

/// Without a country, no invocation may carry a locale adaptation clause
#[tokio::test]
async fn test_translate_withoutCountry_shouldOmitLocaleClause() {
    let mock = MockProvider::scripted(["draft", "critique", "final"]);
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("en", "es", "See you tomorrow, friend.");
    translator.translate(&request).await.unwrap();

    for invocation in mock.invocations() {
        assert!(!invocation.user.contains("colloquially spoken"));
    }
}

/// Long input: every chunk runs the full three-pass pipeline and the final
/// result is the in-order concatenation of the per-chunk edits
#[tokio::test]
async fn test_translate_longText_shouldConcatenatePerChunkResults() {
    let text = common::long_document(40);
    let budget = 100;

    // The pipeline uses the same planner and splitter, so the expected
    // chunk count can be computed up front
    let total = count_tokens(&text).unwrap();
    assert!(total >= budget);
    let chunks = split_by_token_target(&text, plan_chunk_size(total, budget)).unwrap();
    let num_chunks = chunks.len();
    assert!(num_chunks > 1);

    // Script three responses per chunk; the improvement response is the one
    // that must survive into the output
    let mut responses = Vec::new();
    for index in 0..num_chunks {
        responses.push(format!("draft-{}", index));
        responses.push(format!("critique-{}", index));
        responses.push(format!("<final-{}>", index));
    }
    let mock = MockProvider::scripted(responses);
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("en", "fr", text).token_budget(budget);
    let result = translator.translate(&request).await.unwrap();

    let expected: String = (0..num_chunks).map(|i| format!("<final-{}>", i)).collect();
    assert_eq!(result, expected);
    assert_eq!(mock.invocation_count(), 3 * num_chunks);
}

/// Chunked prompts must mark the working span within the full document
#[tokio::test]
async fn test_translate_longText_shouldDelimitWorkingSpan() {
    let text = common::long_document(30);
    let budget = 100;
    assert!(count_tokens(&text).unwrap() >= budget);

    let mock = MockProvider::echoing();
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("en", "fr", text).token_budget(budget);
    translator.translate(&request).await.unwrap();

    let invocations = mock.invocations();
    assert!(!invocations.is_empty());
    for invocation in invocations {
        assert!(invocation.user.contains(CHUNK_START));
    }
}

/// A text exactly at the budget goes through the chunked path
#[tokio::test]
async fn test_translate_atBudgetBoundary_shouldUseChunkedPath() {
    let text = "Boundary case text for the router.";
    let total = count_tokens(text).unwrap();

    let mock = MockProvider::scripted(["draft", "critique", "final"]);
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("en", "it", text).token_budget(total);
    let result = translator.translate(&request).await.unwrap();

    // One chunk, three passes, chunked prompts
    assert_eq!(result, "final");
    assert_eq!(mock.invocation_count(), 3);
    assert!(mock.invocations()[0].user.contains(CHUNK_START));
}

/// A failure in the reflection pass aborts the call before the improvement
/// pass ever runs
#[tokio::test]
async fn test_translate_whenReflectionFails_shouldAbortWithoutThirdCall() {
    let mock = MockProvider::failing_at(2);
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("en", "fr", "Hello world.");
    let result = translator.translate(&request).await;

    assert!(matches!(
        result,
        Err(TranslationError::Provider(ProviderError::ApiError { .. }))
    ));
    assert_eq!(mock.invocation_count(), 2);
}

/// A zero token budget is rejected before any model call
#[tokio::test]
async fn test_translate_withZeroBudget_shouldRejectRequest() {
    let mock = MockProvider::echoing();
    let translator = Translator::new(Arc::new(mock.clone()));

    let request = TranslationRequest::new("en", "fr", "Hello.").token_budget(0);
    let result = translator.translate(&request).await;

    assert!(matches!(
        result,
        Err(TranslationError::Config(ConfigError::InvalidTokenBudget(0)))
    ));
    assert_eq!(mock.invocation_count(), 0);
}

/// Concurrent translate calls share nothing and both complete
#[tokio::test]
async fn test_translate_concurrentCalls_shouldNotInterfere() {
    let first = Translator::new(Arc::new(MockProvider::scripted(["a", "b", "c"])));
    let second = Translator::new(Arc::new(MockProvider::scripted(["x", "y", "z"])));

    let request_one = TranslationRequest::new("en", "fr", "First text.");
    let request_two = TranslationRequest::new("en", "de", "Second text.");

    let (result_one, result_two) = tokio::join!(
        first.translate(&request_one),
        second.translate(&request_two)
    );

    assert_eq!(result_one.unwrap(), "c");
    assert_eq!(result_two.unwrap(), "z");
}
