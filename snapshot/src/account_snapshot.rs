use std::collections::HashMap;

use riptide_core::errors::RpcError;
use riptide_core::{ActivationState, FacetName};
use riptide_networks::Network;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::account_data::{
    AccountCurrencies, AccountData, Channel, NfToken, TrustLine,
};

/// Point-in-time merge of all requested facets for one account on one
/// network.
///
/// A `None` payload field was not requested. A requested collection facet
/// that failed is defaulted to empty and listed in `errors`; a facet that
/// succeeded with an empty result is not an error. Snapshots are never
/// mutated after construction: refreshing produces a new one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccountSnapshot {
    pub address: String,
    pub network: Network,
    pub activation: ActivationState,
    pub account: Option<AccountData>,
    pub transactions: Option<Vec<Value>>,
    pub objects: Option<Vec<Value>>,
    pub nfts: Option<Vec<NfToken>>,
    pub currencies: Option<AccountCurrencies>,
    pub trust_lines: Option<Vec<TrustLine>>,
    pub channels: Option<Vec<Channel>>,
    /// Facets that failed, with their underlying cause. Derived
    /// independently of `activation`: an unactivated account is a semantic
    /// negative, not a fetch failure, and adds no entry here.
    pub errors: HashMap<FacetName, RpcError>,
    /// Set when the requested network identifier was unknown and the
    /// aggregation fell back to Mainnet.
    pub network_fallback: bool,
}

impl AccountSnapshot {
    /// A snapshot assembled while one or more facets failed.
    pub fn is_degraded(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn facet_failed(&self, facet: FacetName) -> bool {
        self.errors.contains_key(&facet)
    }

    pub fn balance_xrp(&self) -> Option<f64> {
        self.account.as_ref().map(AccountData::balance_xrp)
    }
}
