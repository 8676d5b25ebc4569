//! A canister that forwards prompts and conversations to the LLM canister.
use ic_llm::{ChatBuilder, ChatMessage, IcLlm, LlmCanister, LlmError, Model};

const MODEL: Model = Model::Llama3_1_8B;

/// Sends the conversation as is and returns the text of the reply.
///
/// # Errors
///
/// Errors if the conversation is malformed or the call fails.
pub async fn reply(
    client: impl LlmCanister + 'static,
    messages: Vec<ChatMessage>,
) -> Result<String, LlmError> {
    tracing::debug!(messages = messages.len(), "Forwarding conversation");

    let response = ChatBuilder::new(client, MODEL)
        .with_messages(messages)
        .send()
        .await?;

    Ok(response.into_text())
}

#[ic_cdk::update]
async fn prompt(prompt_str: String) -> Result<String, String> {
    ic_llm::prompt(MODEL, prompt_str)
        .await
        .map_err(|err| err.to_string())
}

#[ic_cdk::update]
async fn chat(messages: Vec<ChatMessage>) -> Result<String, String> {
    reply(IcLlm::default(), messages)
        .await
        .map_err(|err| err.to_string())
}

ic_cdk::export_candid!();
