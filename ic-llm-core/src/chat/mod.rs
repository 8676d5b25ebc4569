//! Chat with the LLM canister
//!
//! A `ChatRequest` holds the model, the conversation as a list of `ChatMessage`, and
//! optionally the tools the model may call. An `LlmCanister` sends it and returns a
//! `ChatResponse` with the assistant message: text, tool calls, or both.
//!
//! `ChatBuilder` assembles and sends requests, `ToolBuilder` and `ParameterBuilder`
//! describe tools.
mod chat_builder;
mod chat_message;
mod chat_request;
mod chat_response;
pub mod errors;
mod tool_call;
mod tools;

// Re-exported in the root per convention
pub mod traits;

pub use chat_builder::*;
pub use chat_message::*;
pub use chat_request::*;
pub use chat_response::*;
pub use errors::LlmError;
pub use tool_call::*;
pub use tools::*;
pub use traits::*;
