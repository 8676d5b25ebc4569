use std::collections::HashSet;

use candid::CandidType;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::{chat_message::ChatMessage, errors::LlmError, tools::Tool};

/// The payload of a single chat call to the LLM canister.
///
/// Building a request checks that every `tool` message answers a tool call
/// introduced by an earlier assistant message, and that tools only require
/// parameters they declare.
#[derive(CandidType, Builder, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[builder(
    setter(into, strip_option),
    build_fn(validate = "Self::validate", error = LlmError)
)]
pub struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

impl ChatRequest {
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// `None` when no tools were offered
    pub fn tools(&self) -> Option<&[Tool]> {
        self.tools.as_deref()
    }
}

impl ChatRequestBuilder {
    fn validate(&self) -> Result<(), LlmError> {
        if let Some(messages) = &self.messages {
            validate_conversation(messages)?;
        }

        if let Some(Some(tools)) = &self.tools {
            validate_tools(tools)?;
        }

        Ok(())
    }
}

fn validate_conversation(messages: &[ChatMessage]) -> Result<(), LlmError> {
    let mut known_ids = HashSet::new();

    for (idx, message) in messages.iter().enumerate() {
        match message {
            ChatMessage::Assistant(assistant) => {
                known_ids.extend(assistant.tool_calls.iter().map(|tc| tc.id.as_str()));
            }
            ChatMessage::Tool { tool_call_id, .. }
                if !known_ids.contains(tool_call_id.as_str()) =>
            {
                return Err(LlmError::InvalidConversation(format!(
                    "tool message at position {idx} answers unknown tool call `{tool_call_id}`"
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

fn validate_tools(tools: &[Tool]) -> Result<(), LlmError> {
    for tool in tools {
        let Some(parameters) = &tool.function().parameters else {
            continue;
        };

        if let Some(parameter) = parameters.undeclared_required().next() {
            return Err(LlmError::UndeclaredRequiredParameter {
                tool: tool.name().to_string(),
                parameter: parameter.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{Function, FunctionCall, Parameters, ToolBuilder, ToolCall};

    fn lookup_call(id: &str) -> ToolCall {
        ToolCall::new(
            id,
            FunctionCall::new("lookup_icp_balance").with_argument("account", "abc"),
        )
    }

    #[test]
    fn test_builds_without_tools() {
        let request = ChatRequest::builder()
            .model("llama3.1:8b")
            .messages(vec![ChatMessage::new_user("hi")])
            .build()
            .unwrap();

        assert_eq!(request.model(), "llama3.1:8b");
        assert_eq!(request.messages(), &[ChatMessage::new_user("hi")]);
        assert!(request.tools().is_none());
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let err = ChatRequest::builder()
            .messages(vec![ChatMessage::new_user("hi")])
            .build()
            .unwrap_err();

        assert!(matches!(err, LlmError::UninitializedField(_)));
    }

    #[test]
    fn test_tool_message_after_matching_assistant() {
        let request = ChatRequest::builder()
            .model("qwen3:32b")
            .messages(vec![
                ChatMessage::new_user("What's the balance of abc?"),
                ChatMessage::new_assistant(None, vec![lookup_call("call_1")]),
                ChatMessage::new_tool("Balance of abc is 1 ICP", "call_1"),
            ])
            .tools(vec![ToolBuilder::new("lookup_icp_balance").build()])
            .build();

        assert!(request.is_ok());
    }

    #[test]
    fn test_tool_message_without_matching_call() {
        let err = ChatRequest::builder()
            .model("qwen3:32b")
            .messages(vec![
                ChatMessage::new_assistant(None, vec![lookup_call("call_1")]),
                ChatMessage::new_tool("Balance", "call_2"),
            ])
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid conversation: tool message at position 1 answers unknown tool call `call_2`"
        );
    }

    #[test]
    fn test_tool_message_before_assistant() {
        let err = ChatRequest::builder()
            .model("qwen3:32b")
            .messages(vec![
                ChatMessage::new_tool("Balance", "call_1"),
                ChatMessage::new_assistant(None, vec![lookup_call("call_1")]),
            ])
            .build()
            .unwrap_err();

        assert!(matches!(err, LlmError::InvalidConversation(_)));
    }

    #[test]
    fn test_undeclared_required_parameter() {
        let tool = Tool::Function(Function {
            name: "broken".to_string(),
            description: None,
            parameters: Some(Parameters {
                type_: "object".to_string(),
                properties: None,
                required: Some(vec!["ghost".to_string()]),
            }),
        });

        let err = ChatRequest::builder()
            .model("qwen3:32b")
            .messages(vec![ChatMessage::new_user("hi")])
            .tools(vec![tool])
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            LlmError::UndeclaredRequiredParameter { ref tool, ref parameter }
                if tool == "broken" && parameter == "ghost"
        ));
    }
}
