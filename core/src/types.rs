use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// -----------------
// FacetName
// -----------------
/// One category of account data obtainable through a single RPC method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum FacetName {
    AccountInfo,
    Transactions,
    Objects,
    Nfts,
    Currencies,
    TrustLines,
    Channels,
}

impl FacetName {
    pub const ALL: [FacetName; 7] = [
        FacetName::AccountInfo,
        FacetName::Transactions,
        FacetName::Objects,
        FacetName::Nfts,
        FacetName::Currencies,
        FacetName::TrustLines,
        FacetName::Channels,
    ];

    /// The rippled method serving this facet.
    pub fn method(&self) -> &'static str {
        match self {
            FacetName::AccountInfo => "account_info",
            FacetName::Transactions => "account_tx",
            FacetName::Objects => "account_objects",
            FacetName::Nfts => "account_nfts",
            FacetName::Currencies => "account_currencies",
            FacetName::TrustLines => "account_lines",
            FacetName::Channels => "account_channels",
        }
    }
}

impl fmt::Display for FacetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

// -----------------
// FacetSet
// -----------------
/// The facets requested for one aggregation call.
///
/// The empty set is shorthand for "everything": [`FacetSet::effective`]
/// expands it to all facets at aggregation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSet {
    requested: HashSet<FacetName>,
}

impl FacetSet {
    pub fn all() -> Self {
        FacetName::ALL.into_iter().collect()
    }

    pub fn contains(&self, facet: FacetName) -> bool {
        self.requested.contains(&facet)
    }

    pub fn len(&self) -> usize {
        self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// The set actually fetched: an empty request expands to all facets.
    pub fn effective(&self) -> FacetSet {
        if self.is_empty() {
            FacetSet::all()
        } else {
            self.clone()
        }
    }
}

impl FromIterator<FacetName> for FacetSet {
    fn from_iter<I: IntoIterator<Item = FacetName>>(iter: I) -> Self {
        Self {
            requested: iter.into_iter().collect(),
        }
    }
}

// -----------------
// ActivationState
// -----------------
/// Whether the account exists on ledger.
///
/// Kept as an explicit tri-state: an account-info fetch that never answered
/// must not be mistaken for a proof of non-existence.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize,
)]
pub enum ActivationState {
    /// account_info answered: the account is funded and on ledger.
    Active,
    /// account_info answered `actNotFound`: the address was never funded.
    Inactive,
    /// account_info could not be evaluated (timeout, transport failure).
    #[default]
    Unknown,
}

impl ActivationState {
    pub fn is_active(&self) -> bool {
        matches!(self, ActivationState::Active)
    }

    pub fn is_inactive(&self) -> bool {
        matches!(self, ActivationState::Inactive)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ActivationState::Unknown)
    }
}
