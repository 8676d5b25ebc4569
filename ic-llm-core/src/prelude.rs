pub use async_trait::async_trait;
pub use derive_builder::Builder;
pub use std::sync::Arc;

pub use crate::chat::{
    ChatBuilder, ChatMessage, ChatRequest, ChatResponse, LlmCanister, LlmError,
    ParameterBuilder, ParameterType, Tool, ToolBuilder,
};
pub use crate::model::Model;
