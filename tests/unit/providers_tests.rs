/*!
 * Tests for provider request construction and the mock provider
 */

use redraft::providers::mock::MockProvider;
use redraft::providers::{ChatProvider, ChatRequest, OPENAI_API_KEY_ENV, default_provider};

/// Test the chat request builder
#[test]
fn test_chatRequest_builder_shouldSetAllFields() {
    let request = ChatRequest::new("system text", "user text")
        .temperature(0.5)
        .max_output_tokens(256);

    assert_eq!(request.system, "system text");
    assert_eq!(request.user, "user text");
    assert_eq!(request.temperature, Some(0.5));
    assert_eq!(request.max_output_tokens, Some(256));
}

/// Test that the default request carries no sampling overrides
#[test]
fn test_chatRequest_default_shouldLeaveOptionsUnset() {
    let request = ChatRequest::default();

    assert!(request.temperature.is_none());
    assert!(request.max_output_tokens.is_none());
}

/// Test that the default provider reflects the environment credential
#[test]
fn test_defaultProvider_shouldFollowEnvironmentCredential() {
    match std::env::var(OPENAI_API_KEY_ENV) {
        Ok(_) => assert!(default_provider().is_ok()),
        Err(_) => assert!(default_provider().is_err()),
    }
}

/// Test that the mock provider reports a stable name and answers from a
/// synchronous test context
#[test]
fn test_mockProvider_name_shouldBeMock() {
    let provider = MockProvider::echoing();
    assert_eq!(provider.name(), "mock");

    let response =
        tokio_test::block_on(provider.complete(ChatRequest::new("sys", "ping"))).unwrap();
    assert!(response.text.contains("ping"));
}

/// Test scripted responses and invocation recording together
#[tokio::test]
async fn test_mockProvider_scripted_shouldRecordInvocations() {
    let provider = MockProvider::scripted(["uno", "dos"]);

    provider
        .complete(ChatRequest::new("first system", "first user"))
        .await
        .unwrap();
    provider
        .complete(ChatRequest::new("second system", "second user"))
        .await
        .unwrap();

    let invocations = provider.invocations();
    assert_eq!(invocations.len(), 2);
    assert_eq!(invocations[0].user, "first user");
    assert_eq!(invocations[1].user, "second user");
}
