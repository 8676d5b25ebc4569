use derive_builder::UninitializedFieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    /// The remote call was rejected or its reply could not be decoded
    #[error("remote call to {method} failed ({code}): {message}")]
    CallFailed {
        method: String,
        code: String,
        message: String,
    },

    #[error("invalid canister id {canister_id}: {message}")]
    InvalidCanisterId {
        canister_id: String,
        message: String,
    },

    #[error("invalid conversation: {0}")]
    InvalidConversation(String),

    #[error("tool {tool} requires parameter {parameter} which it does not declare")]
    UndeclaredRequiredParameter { tool: String, parameter: String },

    #[error(transparent)]
    UninitializedField(#[from] UninitializedFieldError),
}

impl LlmError {
    pub fn call_failed(
        method: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LlmError::CallFailed {
            method: method.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the error came from the remote call rather than from building the request
    pub fn is_call_failure(&self) -> bool {
        matches!(self, LlmError::CallFailed { .. })
    }
}
