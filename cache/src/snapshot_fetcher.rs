use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use riptide_core::FacetSet;
use riptide_networks::Network;
use riptide_providers::http_rpc_provider::HttpRpcProvider;
use riptide_snapshot::account_snapshot::AccountSnapshot;
use riptide_snapshot::account_snapshot_provider::AccountSnapshotProvider;
use riptide_snapshot::errors::SnapshotResult;
use riptide_snapshot::RpcProviderConfig;

/// Produces a fresh snapshot for one (address, network) pair.
///
/// The cache reaches the network only through this trait, which keeps it
/// testable with a stub fetcher.
#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    async fn fetch_snapshot(
        &self,
        address: &str,
        network: &Network,
        facets: &FacetSet,
    ) -> SnapshotResult<AccountSnapshot>;
}

#[async_trait]
impl<F: SnapshotFetcher + ?Sized> SnapshotFetcher for Arc<F> {
    async fn fetch_snapshot(
        &self,
        address: &str,
        network: &Network,
        facets: &FacetSet,
    ) -> SnapshotResult<AccountSnapshot> {
        (**self).fetch_snapshot(address, network, facets).await
    }
}

/// Fetcher backed by a fresh HTTP provider per call, keeping connection
/// lifetime bounded to the aggregation.
#[derive(Debug, Default)]
pub struct RemoteSnapshotFetcher {
    aggregation_timeout: Option<Duration>,
}

impl RemoteSnapshotFetcher {
    pub fn new(aggregation_timeout: Option<Duration>) -> Self {
        Self {
            aggregation_timeout,
        }
    }
}

#[async_trait]
impl SnapshotFetcher for RemoteSnapshotFetcher {
    async fn fetch_snapshot(
        &self,
        address: &str,
        network: &Network,
        facets: &FacetSet,
    ) -> SnapshotResult<AccountSnapshot> {
        let rpc =
            HttpRpcProvider::new(RpcProviderConfig::new(network.clone(), None));
        let provider = match self.aggregation_timeout {
            Some(timeout) => AccountSnapshotProvider::with_timeout(
                rpc,
                network.clone(),
                timeout,
            ),
            None => AccountSnapshotProvider::new(rpc, network.clone()),
        };
        provider.try_fetch_snapshot_of_account(address, facets).await
    }
}
