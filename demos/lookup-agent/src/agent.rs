use ic_llm::{
    ChatBuilder, ChatMessage, LlmCanister, LlmError, Model, ParameterType, Tool, ToolCall,
};
use indoc::indoc;

use crate::ledger::{BalanceLookup, lookup_account};

pub const SYSTEM_PROMPT: &str = indoc! {"
    You are an assistant that exclusively performs ICP balance lookups.
    Use the 'lookup_icp_balance' tool when asked for an account balance and report the balance back to the user.
    If the user asks about anything else, politely inform them that you can only look up ICP balances and offer to perform a lookup.
"};

pub const MODEL: Model = Model::Qwen3_32B;

pub const LOOKUP_TOOL: &str = "lookup_icp_balance";

pub fn lookup_tool() -> Tool {
    ic_llm::tool(LOOKUP_TOOL)
        .with_description("Lookup the balance of an ICP account.")
        .with_parameter(
            ic_llm::parameter("account", ParameterType::String)
                .with_description("The ICP account (64-character hex string) to look up.")
                .is_required(),
        )
        .build()
}

/// Answers the conversation, looking up balances when the model asks for them.
///
/// The system prompt is prepended to `messages`. If the first reply calls tools,
/// each call is executed in order, its result is added to the conversation, and
/// the model is asked once more for a final answer without tools.
///
/// # Errors
///
/// Errors if a call to the LLM canister fails.
pub async fn run_chat(
    client: Box<dyn LlmCanister>,
    ledger: &dyn BalanceLookup,
    messages: Vec<ChatMessage>,
) -> Result<String, LlmError> {
    let mut all_messages = vec![ChatMessage::new_system(SYSTEM_PROMPT)];
    all_messages.extend(messages);

    let response = ChatBuilder::new(client.clone(), MODEL)
        .with_messages(all_messages.clone())
        .with_tools(vec![lookup_tool()])
        .send()
        .await?;

    if !response.has_tool_calls() {
        tracing::debug!(?response, "Response without tool calls");
        return Ok(response.into_text());
    }

    let message = response.into_message();
    let tool_calls = message.tool_calls.clone();
    all_messages.push(message.into());

    for tool_call in &tool_calls {
        tracing::info!(%tool_call, "Calling tool");

        let tool_result = call_tool(ledger, tool_call).await;

        tracing::info!(%tool_result, "Tool finished");

        all_messages.push(ChatMessage::new_tool(tool_result, tool_call.id()));
    }

    let final_response = ChatBuilder::new(client, MODEL)
        .with_messages(all_messages)
        .send()
        .await?;

    tracing::debug!(?final_response, "Final response");

    Ok(final_response.into_text())
}

async fn call_tool(ledger: &dyn BalanceLookup, tool_call: &ToolCall) -> String {
    match tool_call.name() {
        LOOKUP_TOOL => match tool_call.function.get("account") {
            Some(account) => lookup_account(ledger, account).await,
            None => "The account argument is required".to_string(),
        },
        name => format!("Unknown tool: {name}"),
    }
}
