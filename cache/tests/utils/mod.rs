use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use riptide_cache::snapshot_fetcher::SnapshotFetcher;
use riptide_core::{ActivationState, FacetSet};
use riptide_networks::Network;
use riptide_snapshot::account_snapshot::AccountSnapshot;
use riptide_snapshot::errors::SnapshotResult;
use serde_json::json;

/// Counting fetcher answering minimal successful snapshots. Each fetch
/// stamps its ordinal into the transactions slot so tests can tell
/// refreshed snapshots apart.
pub struct SnapshotFetcherStub {
    fetch_count: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl SnapshotFetcherStub {
    pub fn new() -> Self {
        Self {
            fetch_count: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new()
        }
    }

    pub fn fetch_counter(&self) -> Arc<AtomicUsize> {
        self.fetch_count.clone()
    }
}

#[async_trait]
impl SnapshotFetcher for SnapshotFetcherStub {
    async fn fetch_snapshot(
        &self,
        address: &str,
        network: &Network,
        _facets: &FacetSet,
    ) -> SnapshotResult<AccountSnapshot> {
        let ordinal = self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(AccountSnapshot {
            address: address.to_string(),
            network: network.clone(),
            activation: ActivationState::Active,
            account: None,
            transactions: Some(vec![json!({ "fetch": ordinal })]),
            objects: None,
            nfts: None,
            currencies: None,
            trust_lines: None,
            channels: None,
            errors: HashMap::new(),
            network_fallback: false,
        })
    }
}

/// The ordinal stamped into a stub snapshot.
pub fn fetch_ordinal(snapshot: &AccountSnapshot) -> u64 {
    snapshot.transactions.as_ref().and_then(|transactions| {
        transactions.first().and_then(|entry| entry["fetch"].as_u64())
    })
    .unwrap_or(u64::MAX)
}
