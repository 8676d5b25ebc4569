use std::sync::Arc;

use async_trait::async_trait;
use dyn_clone::DynClone;

use super::{chat_request::ChatRequest, chat_response::ChatResponse, errors::LlmError};

/// A transport that delivers a `ChatRequest` to an LLM canister.
///
/// Implementations perform exactly one remote call per invocation and do
/// not retry. Encoding and the call itself are left to the host platform.
#[async_trait]
pub trait LlmCanister: Send + Sync + DynClone {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError>;

    fn boxed<'a>(self) -> Box<dyn LlmCanister + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self) as Box<dyn LlmCanister>
    }
}

#[async_trait]
impl LlmCanister for Box<dyn LlmCanister> {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        (**self).chat(request).await
    }
}

#[async_trait]
impl LlmCanister for Arc<dyn LlmCanister> {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        (**self).chat(request).await
    }
}

#[async_trait]
impl LlmCanister for &dyn LlmCanister {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, LlmError> {
        (**self).chat(request).await
    }
}

impl<C> From<&C> for Box<dyn LlmCanister>
where
    C: LlmCanister + Clone + 'static,
{
    fn from(client: &C) -> Self {
        Box::new(client.clone()) as Box<dyn LlmCanister>
    }
}

dyn_clone::clone_trait_object!(LlmCanister);
