use riptide_core::errors::RpcError;
use serde_json::{json, Value};

/// A funded account (the well-known genesis address).
pub const ACTIVE_ADDRESS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
/// ACCOUNT_ZERO, a valid address nobody can fund deliberately.
pub const UNFUNDED_ADDRESS: &str = "rrrrrrrrrrrrrrrrrrrrrhoLvTp";
/// A counterparty for trust lines and channels.
pub const PEER_ADDRESS: &str = "rrrrrrrrrrrrrrrrrrrrBZbvji";

pub fn act_not_found() -> RpcError {
    RpcError::Protocol {
        code: "actNotFound".to_string(),
        message: "Account not found.".to_string(),
    }
}

pub fn account_info_result(
    address: &str,
    balance_drops: u64,
    sequence: u32,
) -> Value {
    json!({
        "account_data": {
            "Account": address,
            "Balance": balance_drops.to_string(),
            "Sequence": sequence,
            "OwnerCount": 2,
            "Flags": 0,
        },
        "ledger_current_index": 80_000_000,
        "validated": true,
    })
}

pub fn account_tx_result(count: usize) -> Value {
    let transactions: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "tx": {
                    "TransactionType": "Payment",
                    "Account": ACTIVE_ADDRESS,
                    "Sequence": index,
                },
                "meta": { "TransactionResult": "tesSUCCESS" },
                "validated": true,
            })
        })
        .collect();
    json!({ "transactions": transactions })
}

pub fn account_objects_result(count: usize) -> Value {
    let objects: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "LedgerEntryType": "RippleState",
                "PreviousTxnLgrSeq": index,
            })
        })
        .collect();
    json!({ "account_objects": objects })
}

pub fn account_nfts_result(count: usize) -> Value {
    let nfts: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "Flags": 8,
                "Issuer": ACTIVE_ADDRESS,
                "NFTokenID": format!("00080000{index:056X}"),
                "NFTokenTaxon": 0,
                "URI": "697066733A2F2F6578616D706C65",
                "nft_serial": index,
            })
        })
        .collect();
    json!({ "account_nfts": nfts })
}

pub fn account_currencies_result() -> Value {
    json!({
        "receive_currencies": ["USD", "EUR"],
        "send_currencies": ["USD"],
    })
}

pub fn account_lines_result(count: usize) -> Value {
    let lines: Vec<Value> = (0..count)
        .map(|_| {
            json!({
                "account": PEER_ADDRESS,
                "balance": "100",
                "currency": "USD",
                "limit": "1000000000",
                "limit_peer": "0",
                "no_ripple": true,
            })
        })
        .collect();
    json!({ "lines": lines })
}

pub fn account_channels_result(count: usize) -> Value {
    let channels: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "account": ACTIVE_ADDRESS,
                "destination_account": PEER_ADDRESS,
                "amount": "1000000",
                "balance": "0",
                "channel_id": format!("{index:064X}"),
                "settle_delay": 3600,
            })
        })
        .collect();
    json!({ "channels": channels })
}

pub fn fee_result() -> Value {
    json!({
        "drops": {
            "base_fee": "10",
            "open_ledger_fee": "12",
        },
        "ledger_current_index": 80_000_000,
    })
}

pub fn book_offers_result(quality: &str) -> Value {
    json!({ "offers": [ { "quality": quality } ] })
}
