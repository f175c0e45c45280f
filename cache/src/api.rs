use std::sync::Arc;
use std::time::Duration;

use log::*;
use riptide_core::errors::RpcResult;
use riptide_core::FacetSet;
use riptide_networks::Network;
use riptide_providers::http_rpc_provider::HttpRpcProvider;
use riptide_snapshot::account_snapshot::AccountSnapshot;
use riptide_snapshot::errors::SnapshotResult;
use riptide_snapshot::ledger_meta::{self, LedgerFee, XrpPrice};
use riptide_snapshot::RpcProviderConfig;
use serde_json::Value;

use crate::snapshot_cache::{CacheConfig, SnapshotCache};
use crate::snapshot_fetcher::{RemoteSnapshotFetcher, SnapshotFetcher};
use crate::ttl_map::TtlMap;

/// Fee quotes move with every ledger; keep them barely cached.
const FEE_FRESHNESS: Duration = Duration::from_secs(10);
const PRICE_FRESHNESS: Duration = Duration::from_secs(30);

/// The API that serves consolidated account data for XRPL networks.
///
/// Snapshots are cached per (address, network) with in-flight deduplication
/// and stale-while-revalidate; see [`SnapshotCache`]. Network identifiers
/// resolve through the registry and fall back to Mainnet (saying so on the
/// snapshot) when unknown.
pub struct Riptide<F: SnapshotFetcher + 'static = RemoteSnapshotFetcher> {
    fetcher: Arc<F>,
    cache: SnapshotCache<Arc<F>>,
    fees: TtlMap<Network, LedgerFee>,
    price: TtlMap<(), XrpPrice>,
}

impl Riptide<RemoteSnapshotFetcher> {
    pub fn new() -> Self {
        Self::with_fetcher(RemoteSnapshotFetcher::default())
    }
}

impl Default for Riptide<RemoteSnapshotFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: SnapshotFetcher + 'static> Riptide<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self::with_cache_config(fetcher, CacheConfig::default())
    }

    pub fn with_cache_config(fetcher: F, config: CacheConfig) -> Self {
        let fetcher = Arc::new(fetcher);
        Self {
            cache: SnapshotCache::with_config(fetcher.clone(), config),
            fetcher,
            fees: TtlMap::new(FEE_FRESHNESS),
            price: TtlMap::new(PRICE_FRESHNESS),
        }
    }

    /// Aggregate a fresh snapshot, bypassing the cache.
    pub async fn aggregate(
        &self,
        address: &str,
        network: &str,
        facets: &FacetSet,
    ) -> SnapshotResult<AccountSnapshot> {
        let (network, fell_back) = resolve_network(network);
        let mut snapshot =
            self.fetcher.fetch_snapshot(address, &network, facets).await?;
        snapshot.network_fallback = fell_back;
        Ok(snapshot)
    }

    /// Cached lookup; see [`SnapshotCache::get_or_fetch`].
    pub async fn get_or_fetch(
        &self,
        address: &str,
        network: &str,
        facets: &FacetSet,
    ) -> SnapshotResult<Arc<AccountSnapshot>> {
        let (network, fell_back) = resolve_network(network);
        let snapshot =
            self.cache.get_or_fetch(address, &network, facets).await?;
        if fell_back {
            // cached snapshots are shared; only this caller asked through
            // the unknown identifier
            let mut patched = (*snapshot).clone();
            patched.network_fallback = true;
            return Ok(Arc::new(patched));
        }
        Ok(snapshot)
    }

    /// Drop the cached snapshot so the next read reflects fresh state.
    /// Call after submitting a transaction for the account.
    pub fn invalidate(&self, address: &str, network: &str) {
        let (network, _) = resolve_network(network);
        self.cache.invalidate(address, &network);
    }

    /// Force a fetch and replace the cached snapshot.
    pub async fn refresh(
        &self,
        address: &str,
        network: &str,
        facets: &FacetSet,
    ) -> SnapshotResult<Arc<AccountSnapshot>> {
        let (network, _) = resolve_network(network);
        self.cache.refresh(address, &network, facets).await
    }

    /// Current fee levels for a network.
    pub async fn fee(&self, network: &str) -> RpcResult<LedgerFee> {
        let (network, _) = resolve_network(network);
        if let Some(fee) = self.fees.get(&network) {
            return Ok(fee);
        }
        let rpc =
            HttpRpcProvider::new(RpcProviderConfig::new(network.clone(), None));
        let fee = ledger_meta::fetch_fee(&rpc).await?;
        self.fees.insert(network, fee.clone());
        Ok(fee)
    }

    /// Raw server_info for a network, uncached.
    pub async fn server_info(&self, network: &str) -> RpcResult<Value> {
        let (network, _) = resolve_network(network);
        let rpc = HttpRpcProvider::new(RpcProviderConfig::new(network, None));
        ledger_meta::fetch_server_info(&rpc).await
    }

    /// XRP/USD from the Mainnet DEX order book.
    pub async fn xrp_price(&self) -> RpcResult<XrpPrice> {
        if let Some(price) = self.price.get(&()) {
            return Ok(price);
        }
        let rpc = HttpRpcProvider::mainnet();
        let price = ledger_meta::fetch_xrp_price(&rpc).await?;
        self.price.insert((), price);
        Ok(price)
    }
}

fn resolve_network(identifier: &str) -> (Network, bool) {
    match Network::resolve(identifier) {
        Some(network) => (network, false),
        None => {
            warn!(
                "unknown network identifier {identifier:?}, falling back to Mainnet"
            );
            (Network::Mainnet, true)
        }
    }
}
