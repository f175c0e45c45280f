use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use log::*;
use riptide_core::{FacetName, FacetSet};
use riptide_networks::Network;
use riptide_snapshot::account_snapshot::AccountSnapshot;
use riptide_snapshot::errors::SnapshotResult;

use crate::snapshot_fetcher::SnapshotFetcher;

// -----------------
// CacheConfig
// -----------------
/// Freshness windows per facet class: a balance-style probe (account info
/// alone) moves slowly and may stay cached longer than a full snapshot.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub snapshot_freshness: Duration,
    pub probe_freshness: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            snapshot_freshness: Duration::from_secs(60),
            probe_freshness: Duration::from_secs(120),
        }
    }
}

impl CacheConfig {
    fn freshness_for(&self, facets: &FacetSet) -> Duration {
        let effective = facets.effective();
        if effective.len() == 1 && effective.contains(FacetName::AccountInfo) {
            self.probe_freshness
        } else {
            self.snapshot_freshness
        }
    }
}

// -----------------
// SnapshotCache
// -----------------
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    address: String,
    network: Network,
}

struct CacheEntry {
    snapshot: Arc<AccountSnapshot>,
    fetched_at: Instant,
    freshness: Duration,
}

impl CacheEntry {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() < self.freshness
    }
}

type SharedFetch =
    Shared<BoxFuture<'static, SnapshotResult<Arc<AccountSnapshot>>>>;

#[derive(Default)]
struct Slot {
    entry: Option<CacheEntry>,
    inflight: Option<SharedFetch>,
    // bumped by invalidation; a completing fetch from an older generation
    // must not repopulate the entry
    generation: u64,
}

struct CacheInner<F> {
    fetcher: F,
    config: CacheConfig,
    slots: Mutex<HashMap<CacheKey, Slot>>,
}

/// Snapshot cache keyed by (address, network).
///
/// Concurrent callers for the same key share one in-flight aggregation. A
/// stale entry is served immediately while a revalidation runs in the
/// background, so a slow network never blocks a reader that has any data
/// at all.
pub struct SnapshotCache<F: SnapshotFetcher + 'static> {
    inner: Arc<CacheInner<F>>,
}

impl<F: SnapshotFetcher + 'static> Clone for SnapshotCache<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

enum Lookup {
    Hit(Arc<AccountSnapshot>),
    Wait(SharedFetch),
}

impl<F: SnapshotFetcher + 'static> SnapshotCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_config(fetcher, CacheConfig::default())
    }

    pub fn with_config(fetcher: F, config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                fetcher,
                config,
                slots: Mutex::new(HashMap::new()),
            }),
        }
    }

    pub async fn get_or_fetch(
        &self,
        address: &str,
        network: &Network,
        facets: &FacetSet,
    ) -> SnapshotResult<Arc<AccountSnapshot>> {
        let key = CacheKey {
            address: address.to_string(),
            network: network.clone(),
        };
        // decide under the lock, await outside it
        let lookup = {
            let mut slots = lock(&self.inner.slots);
            let slot = slots.entry(key.clone()).or_default();
            let cached = slot
                .entry
                .as_ref()
                .map(|entry| (entry.snapshot.clone(), entry.is_fresh()));
            match cached {
                Some((snapshot, true)) => Lookup::Hit(snapshot),
                Some((snapshot, false)) => {
                    // stale: serve what we have, revalidate in the background
                    if slot.inflight.is_none() {
                        let fetch = make_fetch(
                            self.inner.clone(),
                            key.clone(),
                            facets.clone(),
                            slot.generation,
                        );
                        slot.inflight = Some(fetch.clone());
                        debug!(
                            "revalidating stale snapshot for {}",
                            key.address
                        );
                        tokio::spawn(async move {
                            let _ = fetch.await;
                        });
                    }
                    Lookup::Hit(snapshot)
                }
                None => {
                    let fetch = if let Some(fetch) = slot.inflight.clone() {
                        fetch
                    } else {
                        let fetch = make_fetch(
                            self.inner.clone(),
                            key.clone(),
                            facets.clone(),
                            slot.generation,
                        );
                        slot.inflight = Some(fetch.clone());
                        fetch
                    };
                    Lookup::Wait(fetch)
                }
            }
        };
        match lookup {
            Lookup::Hit(snapshot) => Ok(snapshot),
            Lookup::Wait(fetch) => fetch.await,
        }
    }

    /// Drop the entry for (address, network) so the next read re-aggregates.
    /// Call after a state-changing submission for the account.
    pub fn invalidate(&self, address: &str, network: &Network) {
        let key = CacheKey {
            address: address.to_string(),
            network: network.clone(),
        };
        let mut slots = lock(&self.inner.slots);
        if let Some(slot) = slots.get_mut(&key) {
            slot.entry = None;
            slot.inflight = None;
            slot.generation += 1;
        }
    }

    /// Force a fetch and replace the entry, returning the new snapshot.
    pub async fn refresh(
        &self,
        address: &str,
        network: &Network,
        facets: &FacetSet,
    ) -> SnapshotResult<Arc<AccountSnapshot>> {
        let key = CacheKey {
            address: address.to_string(),
            network: network.clone(),
        };
        let fetch = {
            let mut slots = lock(&self.inner.slots);
            let slot = slots.entry(key.clone()).or_default();
            // an aggregation already in flight is as fresh as it gets
            if let Some(fetch) = slot.inflight.clone() {
                fetch
            } else {
                let fetch = make_fetch(
                    self.inner.clone(),
                    key,
                    facets.clone(),
                    slot.generation,
                );
                slot.inflight = Some(fetch.clone());
                fetch
            }
        };
        fetch.await
    }
}

fn make_fetch<F: SnapshotFetcher + 'static>(
    inner: Arc<CacheInner<F>>,
    key: CacheKey,
    facets: FacetSet,
    generation: u64,
) -> SharedFetch {
    async move {
        let result = inner
            .fetcher
            .fetch_snapshot(&key.address, &key.network, &facets)
            .await;
        let mut slots = lock(&inner.slots);
        let slot = slots.entry(key).or_default();
        let current = slot.generation == generation;
        if current {
            slot.inflight = None;
        }
        match result {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                if current {
                    slot.entry = Some(CacheEntry {
                        snapshot: snapshot.clone(),
                        fetched_at: Instant::now(),
                        freshness: inner.config.freshness_for(&facets),
                    });
                }
                Ok(snapshot)
            }
            // a failed revalidation keeps whatever entry was there
            Err(err) => Err(err),
        }
    }
    .boxed()
    .shared()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
