use riptide_core::errors::{RpcError, RpcResult};
use riptide_core::RpcProvider;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Reference taker/issuer pair for reading an XRP/USD quote off the DEX
/// order book.
const PRICE_TAKER: &str = "r3kmLJN5D28dHuH8vZNUZpMC43pEHpaocV";
const PRICE_USD_ISSUER: &str = "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B";

// -----------------
// LedgerFee
// -----------------
/// Current fee levels as reported by the `fee` method, in drops.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LedgerFee {
    pub base_fee: String,
    pub open_ledger_fee: String,
    pub ledger_current_index: u64,
}

pub async fn fetch_fee<T: RpcProvider + ?Sized>(rpc: &T) -> RpcResult<LedgerFee> {
    let result = rpc.request("fee", json!({})).await?;
    let drops = result.get("drops").cloned().unwrap_or(Value::Null);
    Ok(LedgerFee {
        base_fee: drops_field(&drops, "base_fee"),
        open_ledger_fee: drops_field(&drops, "open_ledger_fee"),
        ledger_current_index: result
            .get("ledger_current_index")
            .and_then(Value::as_u64)
            .unwrap_or(0),
    })
}

/// The ledger's base fee when a field is missing from the answer.
fn drops_field(drops: &Value, field: &str) -> String {
    drops
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or("10")
        .to_string()
}

// -----------------
// XrpPrice
// -----------------
/// XRP/USD read from the tip of the DEX order book.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct XrpPrice {
    pub usd: f64,
}

pub async fn fetch_xrp_price<T: RpcProvider + ?Sized>(
    rpc: &T,
) -> RpcResult<XrpPrice> {
    let result = rpc
        .request(
            "book_offers",
            json!({
                "taker": PRICE_TAKER,
                "taker_gets": { "currency": "XRP" },
                "taker_pays": { "currency": "USD", "issuer": PRICE_USD_ISSUER },
                "limit": 1,
            }),
        )
        .await?;
    let quality = result
        .get("offers")
        .and_then(|offers| offers.get(0))
        .and_then(|offer| offer.get("quality"))
        .and_then(Value::as_str)
        .and_then(|quality| quality.parse::<f64>().ok())
        .ok_or_else(|| {
            RpcError::Transport("book has no usable offer".to_string())
        })?;
    // quality is USD-per-drop; scale to whole XRP
    Ok(XrpPrice {
        usd: quality * 1_000_000.0,
    })
}

pub async fn fetch_server_info<T: RpcProvider + ?Sized>(
    rpc: &T,
) -> RpcResult<Value> {
    rpc.request("server_info", json!({})).await
}
