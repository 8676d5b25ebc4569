use super::{
    chat_message::ChatMessage, chat_request::ChatRequest, chat_response::ChatResponse,
    errors::LlmError, tools::Tool, traits::LlmCanister,
};

/// Builder for creating and sending chat requests to an LLM canister.
///
/// Messages and tools are replaced, not appended, by `with_messages` and
/// `with_tools`. `send` consumes the builder and makes exactly one call.
#[derive(Clone)]
pub struct ChatBuilder {
    client: Box<dyn LlmCanister>,
    model: String,
    messages: Vec<ChatMessage>,
    tools: Vec<Tool>,
}

impl std::fmt::Debug for ChatBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatBuilder")
            .field("model", &self.model)
            .field("messages", &self.messages)
            .field("tools", &self.tools)
            .finish()
    }
}

impl ChatBuilder {
    pub fn new(client: impl LlmCanister + 'static, model: impl Into<String>) -> Self {
        Self {
            client: client.boxed(),
            model: model.into(),
            messages: Vec::new(),
            tools: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Assembles the request without sending it.
    ///
    /// An empty tool list is sent as no tools at all.
    ///
    /// # Errors
    ///
    /// Errors if the conversation or the tools are malformed, see [`ChatRequest`].
    pub fn build(&self) -> Result<ChatRequest, LlmError> {
        let mut request = ChatRequest::builder();
        request
            .model(self.model.clone())
            .messages(self.messages.clone());

        if !self.tools.is_empty() {
            request.tools(self.tools.clone());
        }

        request.build()
    }

    /// Sends the chat request to the canister.
    ///
    /// # Errors
    ///
    /// Errors if the request is malformed, or with [`LlmError::CallFailed`] if the
    /// remote call fails. Failures are not retried.
    pub async fn send(self) -> Result<ChatResponse, LlmError> {
        let request = self.build()?;

        tracing::debug!(
            model = request.model(),
            messages = request.messages().len(),
            tools = request.tools().map_or(0, <[Tool]>::len),
            "[ChatBuilder] Sending chat request"
        );

        self.client.chat(&request).await
    }
}

/// Sends a single user message and returns the text of the reply.
///
/// Returns an empty string if the model answered without text.
///
/// # Errors
///
/// Errors if the remote call fails.
pub async fn prompt_with(
    client: impl LlmCanister + 'static,
    model: impl Into<String>,
    prompt: impl Into<String>,
) -> Result<String, LlmError> {
    let response = ChatBuilder::new(client, model)
        .with_messages(vec![ChatMessage::new_user(prompt)])
        .send()
        .await?;

    Ok(response.into_text())
}
