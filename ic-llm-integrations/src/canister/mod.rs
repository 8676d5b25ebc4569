//! Calls the LLM canister from another canister.
//!
//! The request is Candid encoded and sent with a single inter-canister call
//! through `ic-cdk`. This only works when running inside a canister.
use candid::Principal;
use derive_builder::Builder;
use ic_llm_core::chat::LlmError;

mod chat;

pub use chat::{decode_response, encode_request};

/// The principal of the LLM canister on mainnet.
pub const LLM_CANISTER: &str = "w36hm-eqaaa-aaaal-qr76a-cai";

/// The chat method of the LLM canister. Older deployments expose `v0_chat`.
pub const CHAT_METHOD: &str = "v1_chat";

#[derive(Debug, Builder, Clone, Default)]
pub struct IcLlm {
    #[builder(default)]
    options: Options,
}

#[derive(Debug, Clone, Builder, PartialEq, Eq)]
#[builder(setter(into))]
pub struct Options {
    /// Textual principal of the canister to call
    #[builder(default = LLM_CANISTER.to_string())]
    pub canister_id: String,

    /// Method invoked on the canister
    #[builder(default = CHAT_METHOD.to_string())]
    pub method: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            canister_id: LLM_CANISTER.to_string(),
            method: CHAT_METHOD.to_string(),
        }
    }
}

impl Options {
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }
}

impl IcLlm {
    pub fn builder() -> IcLlmBuilder {
        IcLlmBuilder::default()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parses the configured canister id.
    ///
    /// # Errors
    ///
    /// Errors if the canister id is not a valid textual principal.
    pub fn canister_principal(&self) -> Result<Principal, LlmError> {
        Principal::from_text(&self.options.canister_id).map_err(|err| {
            LlmError::InvalidCanisterId {
                canister_id: self.options.canister_id.clone(),
                message: err.to_string(),
            }
        })
    }
}

impl IcLlmBuilder {
    /// Sets the principal of the canister to call.
    pub fn canister_id(&mut self, canister_id: impl Into<String>) -> &mut Self {
        self.options_mut().canister_id = canister_id.into();
        self
    }

    /// Sets the method to call, i.e. `v0_chat` for older deployments.
    pub fn method(&mut self, method: impl Into<String>) -> &mut Self {
        self.options_mut().method = method.into();
        self
    }

    fn options_mut(&mut self) -> &mut Options {
        self.options.get_or_insert_with(Options::default)
    }
}
