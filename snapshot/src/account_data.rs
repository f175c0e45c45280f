use serde::{Deserialize, Serialize};

// -----------------
// AccountData
// -----------------
/// The account root returned by account_info.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountData {
    #[serde(rename = "Account")]
    pub account: String,
    /// XRP balance in drops.
    #[serde(rename = "Balance")]
    pub balance: String,
    #[serde(rename = "Sequence")]
    pub sequence: u32,
    #[serde(rename = "OwnerCount", default)]
    pub owner_count: u32,
    #[serde(rename = "Flags", default)]
    pub flags: u32,
    #[serde(rename = "Domain", default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl AccountData {
    /// Balance converted from drops to whole XRP.
    pub fn balance_xrp(&self) -> f64 {
        self.balance.parse::<f64>().unwrap_or(0.0) / 1_000_000.0
    }
}

// -----------------
// NfToken
// -----------------
/// One entry of the account_nfts page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NfToken {
    #[serde(rename = "NFTokenID")]
    pub nftoken_id: String,
    #[serde(rename = "Issuer")]
    pub issuer: String,
    #[serde(rename = "URI", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "Flags", default)]
    pub flags: u32,
    #[serde(rename = "NFTokenTaxon", default)]
    pub taxon: u32,
    #[serde(rename = "nft_serial", default)]
    pub serial: u32,
}

// -----------------
// TrustLine
// -----------------
/// A trust line as reported by account_lines: the relationship permitting
/// this account to hold an issued currency up to a limit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrustLine {
    pub account: String,
    pub balance: String,
    pub currency: String,
    pub limit: String,
    #[serde(default)]
    pub limit_peer: String,
    #[serde(default)]
    pub no_ripple: bool,
}

// -----------------
// Channel
// -----------------
/// A payment channel as reported by account_channels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Channel {
    pub account: String,
    pub destination_account: String,
    pub amount: String,
    #[serde(default)]
    pub balance: String,
    pub channel_id: String,
    #[serde(default)]
    pub settle_delay: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

// -----------------
// AccountCurrencies
// -----------------
/// Currencies the account can send and receive, from account_currencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccountCurrencies {
    #[serde(default)]
    pub send_currencies: Vec<String>,
    #[serde(default)]
    pub receive_currencies: Vec<String>,
}
