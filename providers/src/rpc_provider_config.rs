use std::time::Duration;

use riptide_networks::Network;

/// Connection settings for one RPC provider.
#[derive(Debug, Default, Clone)]
pub struct RpcProviderConfig {
    network: Network,
    request_timeout: Option<Duration>,
}

impl RpcProviderConfig {
    /// Bound on a single RPC round trip, kept well under the aggregation
    /// deadline so one slow facet cannot starve the others.
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(network: Network, request_timeout: Option<Duration>) -> Self {
        Self {
            network,
            request_timeout,
        }
    }

    pub fn mainnet() -> Self {
        Self::new(Network::Mainnet, None)
    }

    pub fn testnet() -> Self {
        Self::new(Network::Testnet, None)
    }

    pub fn devnet() -> Self {
        Self::new(Network::Devnet, None)
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn url(&self) -> &str {
        self.network.url()
    }

    pub fn ws_url(&self) -> &str {
        self.network.ws_url()
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
            .unwrap_or(Self::DEFAULT_REQUEST_TIMEOUT)
    }
}
