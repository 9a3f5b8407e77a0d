/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::scripted(...)` - Replays a fixed sequence of responses
 * - `MockProvider::echoing()` - Always succeeds, echoing the user message
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::failing_at(n)` - Fails on the nth request (1-based)
 *
 * Every mock records the requests it receives so tests can assert on
 * invocation counts and prompt contents.
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{ChatProvider, ChatRequest, ChatResponse};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Replay queued responses in order, failing when the queue runs dry
    Scripted,
    /// Always succeed, echoing the user message back
    Echoing,
    /// Always fail with an error
    Failing,
    /// Fail on the nth request (1-based), succeed otherwise
    FailingAt { request: usize },
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Queued responses for scripted mode
    responses: Arc<Mutex<VecDeque<String>>>,
    /// Requests received so far
    invocations: Arc<Mutex<Vec<ChatRequest>>>,
    /// Request counter
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            responses: Arc::new(Mutex::new(VecDeque::new())),
            invocations: Arc::new(Mutex::new(Vec::new())),
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that replays the given responses in order
    pub fn scripted<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::new(MockBehavior::Scripted);
        provider
            .responses
            .lock()
            .expect("mock responses lock")
            .extend(responses.into_iter().map(Into::into));
        provider
    }

    /// Create a mock that echoes the user message back
    pub fn echoing() -> Self {
        Self::new(MockBehavior::Echoing)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that fails on the nth request (1-based)
    pub fn failing_at(request: usize) -> Self {
        Self::new(MockBehavior::FailingAt { request })
    }

    /// Number of requests received so far
    pub fn invocation_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the requests received so far
    pub fn invocations(&self) -> Vec<ChatRequest> {
        self.invocations
            .lock()
            .expect("mock invocations lock")
            .clone()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            responses: Arc::clone(&self.responses),
            invocations: Arc::clone(&self.invocations),
            request_count: Arc::clone(&self.request_count),
        }
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.invocations
            .lock()
            .expect("mock invocations lock")
            .push(request.clone());

        let text = match self.behavior {
            MockBehavior::Scripted => self
                .responses
                .lock()
                .expect("mock responses lock")
                .pop_front()
                .ok_or_else(|| {
                    ProviderError::RequestFailed(format!(
                        "mock script exhausted at request #{}",
                        count
                    ))
                })?,

            MockBehavior::Echoing => format!("[TRANSLATED] {}", request.user),

            MockBehavior::Failing => {
                return Err(ProviderError::ApiError {
                    status_code: 500,
                    message: "Simulated provider failure".to_string(),
                });
            }

            MockBehavior::FailingAt { request: fail_at } => {
                if count == fail_at {
                    return Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated failure on request #{}", count),
                    });
                }
                self.responses
                    .lock()
                    .expect("mock responses lock")
                    .pop_front()
                    .unwrap_or_else(|| format!("[TRANSLATED] {}", request.user))
            }
        };

        Ok(ChatResponse {
            text,
            prompt_tokens: Some(request.user.len() as u64),
            completion_tokens: Some((request.user.len() / 2) as u64),
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
