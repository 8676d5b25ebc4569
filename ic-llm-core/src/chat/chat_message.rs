use candid::CandidType;
use serde::{Deserialize, Serialize};

use super::tool_call::ToolCall;

/// The reply of the model, and the shape of assistant turns sent back to it.
#[derive(CandidType, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct AssistantMessage {
    pub content: Option<String>,
    pub tool_calls: Vec<ToolCall>,
}

impl AssistantMessage {
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.tool_calls
    }

    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}

/// A message in a chat.
///
/// Exactly one role is populated per message. On the wire the role is the
/// variant tag, i.e. `{"user": {"content": "..."}}`.
#[derive(CandidType, Clone, strum_macros::EnumIs, PartialEq, Debug, Serialize, Deserialize)]
pub enum ChatMessage {
    #[serde(rename = "user")]
    User { content: String },
    #[serde(rename = "system")]
    System { content: String },
    #[serde(rename = "assistant")]
    Assistant(AssistantMessage),
    /// The result of a tool call, correlated by the id of a prior `ToolCall`
    #[serde(rename = "tool")]
    Tool {
        content: String,
        tool_call_id: String,
    },
}

impl std::fmt::Display for ChatMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatMessage::User { content } => write!(f, "User: \"{content}\""),
            ChatMessage::System { content } => write!(f, "System: \"{content}\""),
            ChatMessage::Assistant(message) => write!(
                f,
                "Assistant: \"{}\", tools: {}",
                message.content.as_deref().unwrap_or("None"),
                if message.tool_calls.is_empty() {
                    "None".to_string()
                } else {
                    message
                        .tool_calls
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                }
            ),
            ChatMessage::Tool {
                content,
                tool_call_id,
            } => write!(f, "Tool: \"{tool_call_id}\": \"{content}\""),
        }
    }
}

impl ChatMessage {
    pub fn new_user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: content.into(),
        }
    }

    pub fn new_system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: content.into(),
        }
    }

    pub fn new_assistant(content: Option<String>, tool_calls: Vec<ToolCall>) -> Self {
        ChatMessage::Assistant(AssistantMessage {
            content,
            tool_calls,
        })
    }

    pub fn new_tool(content: impl Into<String>, tool_call_id: impl Into<String>) -> Self {
        ChatMessage::Tool {
            content: content.into(),
            tool_call_id: tool_call_id.into(),
        }
    }

    /// Returns the text of the message, if any.
    ///
    /// Tool calls of assistant messages are not included.
    pub fn content(&self) -> Option<&str> {
        match self {
            ChatMessage::User { content }
            | ChatMessage::System { content }
            | ChatMessage::Tool { content, .. } => Some(content),
            ChatMessage::Assistant(message) => message.content.as_deref(),
        }
    }
}

impl From<AssistantMessage> for ChatMessage {
    fn from(message: AssistantMessage) -> Self {
        ChatMessage::Assistant(message)
    }
}
