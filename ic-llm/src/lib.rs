//! # ic-llm
//!
//! Talk to the LLM canister on the Internet Computer from your own canister.
//!
//! Requests are built with typed builders, Candid encoded, and sent with a single
//! inter-canister call. Replies are unwrapped into plain text or an assistant
//! message with tool calls.
//!
//! ## Prompting
//!
//! ```no_run
//! use ic_llm::Model;
//!
//! # async fn prompt_example() -> Result<String, ic_llm::LlmError> {
//! ic_llm::prompt(Model::Llama3_1_8B, "What's the speed of light?").await
//! # }
//! ```
//!
//! ## Chatting with tools
//!
//! ```no_run
//! use ic_llm::{ChatMessage, Model, ParameterType, ChatResponse};
//!
//! # async fn chat_example() -> Result<ChatResponse, ic_llm::LlmError> {
//! ic_llm::chat(Model::Qwen3_32B)
//!     .with_messages(vec![
//!         ChatMessage::new_system("You are a helpful assistant"),
//!         ChatMessage::new_user("What's the balance of account abc123?"),
//!     ])
//!     .with_tools(vec![
//!         ic_llm::tool("icp_account_balance")
//!             .with_description("Lookup the balance of an ICP account")
//!             .with_parameter(
//!                 ic_llm::parameter("account", ParameterType::String)
//!                     .with_description("The ICP account to look up")
//!                     .is_required(),
//!             )
//!             .build(),
//!     ])
//!     .send()
//!     .await
//! # }
//! ```
//!
//! ## Feature flags
//!
//! - `canister` (default): send requests through `ic-cdk`. Without it, bring your own
//!   [`LlmCanister`] and use [`ChatBuilder::new`].
//! - `test-utils`: [`test_utils::MockLlmCanister`] and message macros.

#[doc(inline)]
pub use ic_llm_core::chat::*;
#[doc(inline)]
pub use ic_llm_core::{Model, prelude};

pub use candid;

/// Transports for the LLM canister.
pub mod integrations {
    #[doc(inline)]
    pub use ic_llm_integrations::*;
}

#[cfg(feature = "canister")]
#[doc(inline)]
pub use ic_llm_integrations::canister::{CHAT_METHOD, IcLlm, LLM_CANISTER};

#[doc(hidden)]
#[cfg(feature = "test-utils")]
pub mod test_utils {
    pub use ic_llm_core::test_utils::*;
    pub use ic_llm_core::{chat_response, system, user};
}

/// Creates a `ChatBuilder` that sends to the mainnet LLM canister.
///
/// Chain `with_messages` and `with_tools` before calling `send`.
#[cfg(feature = "canister")]
pub fn chat(model: Model) -> ChatBuilder {
    ChatBuilder::new(IcLlm::default(), model)
}

/// Sends a single user message to the mainnet LLM canister and returns the text reply.
///
/// Returns an empty string when the model replies without text.
///
/// # Errors
///
/// Errors with [`LlmError::CallFailed`] if the call to the canister fails.
#[cfg(feature = "canister")]
pub async fn prompt(model: Model, prompt: impl Into<String>) -> Result<String, LlmError> {
    prompt_with(IcLlm::default(), model, prompt).await
}

/// Creates a `ToolBuilder` for a function tool.
///
/// ```
/// use ic_llm::ParameterType;
///
/// let weather_tool = ic_llm::tool("get_weather")
///     .with_description("Get current weather for a location")
///     .with_parameter(
///         ic_llm::parameter("location", ParameterType::String)
///             .with_description("The location to get weather for")
///             .is_required(),
///     )
///     .build();
///
/// assert_eq!(weather_tool.name(), "get_weather");
/// ```
pub fn tool(name: impl Into<String>) -> ToolBuilder {
    ToolBuilder::new(name)
}

/// Creates a `ParameterBuilder` to add to a tool.
pub fn parameter(name: impl Into<String>, type_: ParameterType) -> ParameterBuilder {
    ParameterBuilder::new(name, type_)
}
