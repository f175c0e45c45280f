use riptide_core::errors::{RpcError, ACT_NOT_FOUND};
use riptide_core::RpcProvider;
use serde_json::{json, Value};

use crate::account_data::{
    AccountCurrencies, AccountData, Channel, NfToken, TrustLine,
};

/// How many history entries one aggregation pulls; deeper paging is the
/// caller's business.
const TX_HISTORY_LIMIT: u32 = 10;

// -----------------
// AccountInfoOutcome
// -----------------
/// Outcome of the account_info facet.
///
/// `actNotFound` is the one protocol error with a meaning of its own: the
/// address has never been funded. Every other error stays an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountInfoOutcome {
    Found(AccountData),
    NotFound,
}

pub async fn fetch_account_info<T: RpcProvider + ?Sized>(
    rpc: &T,
    account: &str,
) -> Result<AccountInfoOutcome, RpcError> {
    match rpc
        .request("account_info", json!({ "account": account }))
        .await
    {
        Ok(mut result) => {
            let data = result
                .get_mut("account_data")
                .map(Value::take)
                .unwrap_or(Value::Null);
            serde_json::from_value(data)
                .map(AccountInfoOutcome::Found)
                .map_err(malformed)
        }
        Err(RpcError::Protocol { code, .. }) if code == ACT_NOT_FOUND => {
            Ok(AccountInfoOutcome::NotFound)
        }
        Err(err) => Err(err),
    }
}

pub async fn fetch_transactions<T: RpcProvider + ?Sized>(
    rpc: &T,
    account: &str,
) -> Result<Vec<Value>, RpcError> {
    let result = rpc
        .request(
            "account_tx",
            json!({
                "account": account,
                "ledger_index_max": -1,
                "limit": TX_HISTORY_LIMIT,
            }),
        )
        .await?;
    Ok(take_array(result, "transactions"))
}

pub async fn fetch_objects<T: RpcProvider + ?Sized>(
    rpc: &T,
    account: &str,
) -> Result<Vec<Value>, RpcError> {
    let result = rpc
        .request("account_objects", json!({ "account": account }))
        .await?;
    Ok(take_array(result, "account_objects"))
}

pub async fn fetch_nfts<T: RpcProvider + ?Sized>(
    rpc: &T,
    account: &str,
) -> Result<Vec<NfToken>, RpcError> {
    let result = rpc
        .request("account_nfts", json!({ "account": account }))
        .await?;
    let items = take_array(result, "account_nfts");
    serde_json::from_value(Value::Array(items)).map_err(malformed)
}

pub async fn fetch_currencies<T: RpcProvider + ?Sized>(
    rpc: &T,
    account: &str,
) -> Result<AccountCurrencies, RpcError> {
    let result = rpc
        .request("account_currencies", json!({ "account": account }))
        .await?;
    serde_json::from_value(result).map_err(malformed)
}

pub async fn fetch_trust_lines<T: RpcProvider + ?Sized>(
    rpc: &T,
    account: &str,
) -> Result<Vec<TrustLine>, RpcError> {
    let result = rpc
        .request("account_lines", json!({ "account": account }))
        .await?;
    let items = take_array(result, "lines");
    serde_json::from_value(Value::Array(items)).map_err(malformed)
}

pub async fn fetch_channels<T: RpcProvider + ?Sized>(
    rpc: &T,
    account: &str,
) -> Result<Vec<Channel>, RpcError> {
    let result = rpc
        .request("account_channels", json!({ "account": account }))
        .await?;
    let items = take_array(result, "channels");
    serde_json::from_value(Value::Array(items)).map_err(malformed)
}

/// Pull an array field out of a result object; a missing field reads as
/// empty, matching how rippled omits empty pages.
fn take_array(mut result: Value, field: &str) -> Vec<Value> {
    match result.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

fn malformed(err: serde_json::Error) -> RpcError {
    RpcError::Transport(format!("malformed facet payload: {err}"))
}
