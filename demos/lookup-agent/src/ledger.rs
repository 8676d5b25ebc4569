use anyhow::{Result, anyhow};
use async_trait::async_trait;
use ic_ledger_types::{
    AccountBalanceArgs, AccountIdentifier, MAINNET_LEDGER_CANISTER_ID, Tokens, account_balance,
};

/// Reads balances from an ICP ledger
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BalanceLookup: Send + Sync {
    async fn account_balance(&self, account: AccountIdentifier) -> Result<Tokens>;
}

/// The ICP ledger on mainnet, called from within a canister
#[derive(Debug, Clone, Copy, Default)]
pub struct MainnetLedger;

#[async_trait]
impl BalanceLookup for MainnetLedger {
    async fn account_balance(&self, account: AccountIdentifier) -> Result<Tokens> {
        account_balance(MAINNET_LEDGER_CANISTER_ID, AccountBalanceArgs { account })
            .await
            .map_err(|(code, message)| anyhow!("ledger call failed ({code:?}): {message}"))
    }
}

/// Looks up the balance of a hex encoded account and describes it for the model.
///
/// Problems with the input are reported back as text so the model can relay them.
pub async fn lookup_account(ledger: &dyn BalanceLookup, account: &str) -> String {
    if account.len() != 64 {
        tracing::warn!(
            account,
            len = account.len(),
            "Account must be 64 characters long"
        );
        return "Account must be 64 characters long".to_string();
    }

    let Ok(account) = AccountIdentifier::from_hex(account) else {
        return "Invalid account".to_string();
    };

    match ledger.account_balance(account).await {
        Ok(balance) => format!("Balance of {account} is {balance} ICP"),
        Err(err) => {
            tracing::error!(error = %err, "Failed to look up balance");
            format!("Failed to look up the balance of {account}")
        }
    }
}
