#![allow(clippy::missing_panics_doc)]
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use crate::chat::{ChatRequest, ChatResponse, LlmCanister, LlmError};

#[macro_export]
macro_rules! user {
    ($message:expr) => {
        $crate::chat::ChatMessage::new_user($message)
    };
}

#[macro_export]
macro_rules! system {
    ($message:expr) => {
        $crate::chat::ChatMessage::new_system($message)
    };
}

/// Builds a `ChatResponse` with optional text and `(id, name, [(arg, value)])` tool calls
#[macro_export]
macro_rules! chat_response {
    (tool_calls = [$(($id:expr, $name:expr, [$(($arg:expr, $value:expr)),*])),*]) => {{
        $crate::chat::ChatResponse::from_tool_calls(vec![$(
            $crate::chat::ToolCall::new(
                $id,
                $crate::chat::FunctionCall::new($name)$(.with_argument($arg, $value))*,
            )
        ),*])
    }};

    ($message:expr) => {
        $crate::chat::ChatResponse::from_text($message)
    };
}

type Expectations = Arc<Mutex<Vec<(ChatRequest, Result<ChatResponse, LlmError>)>>>;

/// An `LlmCanister` that replays expected requests in order.
///
/// Panics on an unexpected request, and on drop when expectations were not met.
#[derive(Clone)]
pub struct MockLlmCanister {
    expectations: Expectations,
    received: Arc<Mutex<Vec<ChatRequest>>>,
}

impl Default for MockLlmCanister {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmCanister {
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(Vec::new())),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn expect_chat(&self, request: ChatRequest, response: Result<ChatResponse, LlmError>) {
        let mut mutex = self.expectations.lock().unwrap();

        mutex.insert(0, (request, response));
    }

    /// Number of calls received so far
    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn received(&self) -> Vec<ChatRequest> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmCanister for MockLlmCanister {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let (expected_request, response) =
            self.expectations.lock().unwrap().pop().unwrap_or_else(|| {
                panic!(
                    "Received chat request, but no expectations are set\n{}",
                    pretty_request(request)
                )
            });

        assert_eq!(
            &expected_request,
            request,
            "Unexpected request\n{}",
            pretty_request(request)
        );

        self.received.lock().unwrap().push(request.clone());

        response
    }
}

impl Drop for MockLlmCanister {
    fn drop(&mut self) {
        // Still cloned, so do not check assertions yet
        if Arc::strong_count(&self.received) > 1 {
            return;
        }
        let Ok(expectations) = self.expectations.lock() else {
            return;
        };

        if expectations.is_empty() {
            let num_received = self.received.lock().map(|r| r.len()).unwrap_or_default();
            tracing::debug!("[MockLlmCanister] All {num_received} expectations were met");
        } else {
            let pending = expectations
                .iter()
                .map(|(request, _)| pretty_request(request))
                .collect::<Vec<_>>()
                .join("---\n");

            panic!("[MockLlmCanister] Not all expectations were met\npending:\n{pending}");
        }
    }
}

fn pretty_request(request: &ChatRequest) -> String {
    let mut output = format!(" model: {}\n", request.model());
    for message in request.messages() {
        output.push_str(&format!(" {message}\n"));
    }
    for tool in request.tools().unwrap_or_default() {
        output.push_str(&format!(" tool: {}\n", tool.name()));
    }
    output
}
