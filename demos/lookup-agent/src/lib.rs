//! A canister agent that looks up ICP balances on behalf of the user.
//!
//! The model is offered a single `lookup_icp_balance` tool. Balances are read
//! from the mainnet ICP ledger.
use ic_llm::{ChatMessage, IcLlm, LlmCanister as _};

mod agent;
pub mod ledger;

pub use agent::{LOOKUP_TOOL, MODEL, SYSTEM_PROMPT, lookup_tool, run_chat};

#[ic_cdk::update]
async fn chat(messages: Vec<ChatMessage>) -> Result<String, String> {
    run_chat(IcLlm::default().boxed(), &ledger::MainnetLedger, messages)
        .await
        .map_err(|err| err.to_string())
}

ic_cdk::export_candid!();
