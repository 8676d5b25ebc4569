use candid::CandidType;
use serde::{Deserialize, Serialize};

use super::{chat_message::AssistantMessage, tool_call::ToolCall};

/// The reply of the LLM canister to a chat call
#[derive(CandidType, Clone, Deserialize, Serialize, Debug, PartialEq, Default)]
pub struct ChatResponse {
    pub message: AssistantMessage,
}

impl ChatResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            message: AssistantMessage {
                content: Some(text.into()),
                tool_calls: Vec::new(),
            },
        }
    }

    pub fn from_tool_calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            message: AssistantMessage {
                content: None,
                tool_calls,
            },
        }
    }

    /// The text content of the reply, if the model produced any
    pub fn text(&self) -> Option<&str> {
        self.message.content.as_deref()
    }

    /// The text content of the reply, or an empty string
    pub fn into_text(self) -> String {
        self.message.content.unwrap_or_default()
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.message.tool_calls
    }

    pub fn has_tool_calls(&self) -> bool {
        self.message.has_tool_calls()
    }

    pub fn into_message(self) -> AssistantMessage {
        self.message
    }
}

impl From<AssistantMessage> for ChatResponse {
    fn from(message: AssistantMessage) -> Self {
        Self { message }
    }
}
