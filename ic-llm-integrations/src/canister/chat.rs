use async_trait::async_trait;
use ic_llm_core::chat::{ChatRequest, ChatResponse, LlmCanister, LlmError};

use super::IcLlm;

#[async_trait]
impl LlmCanister for IcLlm {
    #[tracing::instrument(skip_all, err, fields(method = %self.options.method))]
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        let canister = self.canister_principal()?;
        let method = &self.options.method;
        let args = encode_request(method, request)?;

        tracing::debug!(
            canister = %canister,
            model = request.model(),
            request = serde_json::to_string_pretty(request).unwrap_or_default(),
            "[IcLlm] Request to canister"
        );

        let reply = ic_cdk::api::call::call_raw(canister, method, args, 0)
            .await
            .map_err(|(code, message)| {
                LlmError::call_failed(method.as_str(), format!("{code:?}"), message)
            })?;

        let response = decode_response(method, &reply)?;

        tracing::debug!(
            response = serde_json::to_string_pretty(&response).unwrap_or_default(),
            "[IcLlm] Response from canister"
        );

        Ok(response)
    }
}

/// Candid encodes a request as the single argument of `method`.
///
/// # Errors
///
/// Errors if the request can not be encoded.
pub fn encode_request(method: &str, request: &ChatRequest) -> Result<Vec<u8>, LlmError> {
    candid::encode_one(request)
        .map_err(|err| LlmError::call_failed(method, "EncodeFailed", err.to_string()))
}

/// Decodes the reply of `method` into a response.
///
/// `v1_chat` replies with a `ChatResponse`, `v0_chat` with plain text. Text replies
/// become a response with only content.
///
/// # Errors
///
/// Errors if the reply is neither a Candid encoded `ChatResponse` nor text.
pub fn decode_response(method: &str, reply: &[u8]) -> Result<ChatResponse, LlmError> {
    candid::decode_one::<ChatResponse>(reply).or_else(|err| {
        candid::decode_one::<String>(reply)
            .map(ChatResponse::from_text)
            .map_err(|_| LlmError::call_failed(method, "DecodeFailed", err.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use ic_llm_core::chat::{
        ChatMessage, FunctionCall, ParameterBuilder, ParameterType, ToolBuilder, ToolCall,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_request_decodes_on_the_other_side() {
        let request = ChatRequest::builder()
            .model("qwen3:32b")
            .messages(vec![
                ChatMessage::new_system("You only look up balances"),
                ChatMessage::new_user("Balance of abc?"),
            ])
            .tools(vec![
                ToolBuilder::new("lookup_icp_balance")
                    .with_parameter(
                        ParameterBuilder::new("account", ParameterType::String).is_required(),
                    )
                    .build(),
            ])
            .build()
            .unwrap();

        let bytes = encode_request("v1_chat", &request).unwrap();
        let decoded: ChatRequest = candid::decode_one(&bytes).unwrap();

        assert_eq!(decoded, request);
    }

    #[test]
    fn test_decode_response_with_tool_calls() {
        let response = ChatResponse::from_tool_calls(vec![ToolCall::new(
            "call_1",
            FunctionCall::new("lookup_icp_balance").with_argument("account", "abc"),
        )]);
        let reply = candid::encode_one(&response).unwrap();

        let decoded = decode_response("v1_chat", &reply).unwrap();

        assert_eq!(decoded, response);
        assert_eq!(decoded.tool_calls()[0].function.get("account"), Some("abc"));
    }

    #[test]
    fn test_decode_plain_text_reply() {
        let reply = candid::encode_one("The sun is big".to_string()).unwrap();

        let decoded = decode_response("v0_chat", &reply).unwrap();

        assert_eq!(decoded, ChatResponse::from_text("The sun is big"));
        assert!(!decoded.has_tool_calls());
    }

    #[test]
    fn test_decode_garbage_is_a_call_failure() {
        let err = decode_response("v1_chat", b"not candid").unwrap_err();

        assert!(err.is_call_failure());
        assert!(err.to_string().starts_with("remote call to v1_chat failed (DecodeFailed)"));
    }
}
