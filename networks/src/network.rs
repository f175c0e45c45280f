use serde::{Deserialize, Serialize};
use url::Url;

use crate::consts::*;

// -----------------
// NetworkKind
// -----------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum NetworkKind {
    Mainnet,
    Testnet,
    Devnet,
    Sidechain,
    SidechainTest,
}

// -----------------
// Network
// -----------------
/// A known ledger network, or a custom endpoint pair.
///
/// The table covers the XRPL clusters plus the Xahau sidechain; `Custom`
/// carries an explicit (http, ws) endpoint pair for anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Xahau,
    XahauTestnet,
    Custom(String, String),
}

impl Network {
    pub fn url(&self) -> &str {
        match self {
            Network::Mainnet => MAINNET,
            Network::Testnet => TESTNET,
            Network::Devnet => DEVNET,
            Network::Xahau => XAHAU,
            Network::XahauTestnet => XAHAU_TESTNET,
            Network::Custom(url, _) => url,
        }
    }

    pub fn ws_url(&self) -> &str {
        match self {
            Network::Mainnet => WS_MAINNET,
            Network::Testnet => WS_TESTNET,
            Network::Devnet => WS_DEVNET,
            Network::Xahau => WS_XAHAU,
            Network::XahauTestnet => WS_XAHAU_TESTNET,
            Network::Custom(_, ws_url) => ws_url,
        }
    }

    /// Classification of the known networks. `Custom` endpoints carry none.
    pub fn kind(&self) -> Option<NetworkKind> {
        match self {
            Network::Mainnet => Some(NetworkKind::Mainnet),
            Network::Testnet => Some(NetworkKind::Testnet),
            Network::Devnet => Some(NetworkKind::Devnet),
            Network::Xahau => Some(NetworkKind::Sidechain),
            Network::XahauTestnet => Some(NetworkKind::SidechainTest),
            Network::Custom(..) => None,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
            Network::Devnet => "Devnet",
            Network::Xahau => "Xahau Network",
            Network::XahauTestnet => "Xahau Testnet",
            Network::Custom(url, _) => url,
        }
    }

    pub fn known() -> [Network; 5] {
        [
            Network::Mainnet,
            Network::Testnet,
            Network::Devnet,
            Network::Xahau,
            Network::XahauTestnet,
        ]
    }

    /// Resolve an identifier to a known network.
    ///
    /// Accepts an exact endpoint URL (WebSocket or HTTP, compared after URL
    /// normalization so trailing slashes don't matter) or a logical name.
    /// Unknown identifiers are recoverable: callers fall back to
    /// [`Network::Mainnet`] and surface that they did so.
    pub fn resolve(identifier: &str) -> Option<Network> {
        if let Ok(url) = Url::parse(identifier) {
            return Network::known().into_iter().find(|network| {
                Url::parse(network.ws_url()).ok().as_ref() == Some(&url)
                    || Url::parse(network.url()).ok().as_ref() == Some(&url)
            });
        }
        match identifier.to_ascii_lowercase().as_str() {
            "mainnet" | "xrpl" => Some(Network::Mainnet),
            "testnet" => Some(Network::Testnet),
            "devnet" => Some(Network::Devnet),
            "xahau" => Some(Network::Xahau),
            "xahau-testnet" | "xahau-test" => Some(Network::XahauTestnet),
            _ => None,
        }
    }
}
