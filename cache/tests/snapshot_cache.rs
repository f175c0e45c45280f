use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use riptide_cache::snapshot_cache::{CacheConfig, SnapshotCache};
use riptide_core::FacetSet;
use riptide_networks::Network;

mod utils;
use utils::{fetch_ordinal, SnapshotFetcherStub};

const ADDRESS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

fn short_freshness() -> CacheConfig {
    CacheConfig {
        snapshot_freshness: Duration::from_millis(200),
        probe_freshness: Duration::from_millis(200),
    }
}

// N concurrent callers for one cold key trigger exactly one aggregation.
#[tokio::test]
async fn test_concurrent_get_or_fetch_deduplicates() {
    let fetcher = SnapshotFetcherStub::with_delay(Duration::from_millis(50));
    let counter = fetcher.fetch_counter();
    let cache = SnapshotCache::new(fetcher);

    let facets = FacetSet::default();
    let lookups = (0..8).map(|_| {
        cache.get_or_fetch(ADDRESS, &Network::Mainnet, &facets)
    });
    let snapshots = join_all(lookups).await;

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    let first = snapshots[0].as_ref().unwrap();
    for snapshot in &snapshots {
        assert!(Arc::ptr_eq(first, snapshot.as_ref().unwrap()));
    }
}

// A repeat lookup within the freshness window is served from memory.
#[tokio::test]
async fn test_fresh_entry_is_served_without_refetch() {
    let fetcher = SnapshotFetcherStub::new();
    let counter = fetcher.fetch_counter();
    let cache = SnapshotCache::new(fetcher);

    let first = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    let second = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

// A stale entry is served immediately; the refresh happens behind the
// caller's back and lands before the next read.
#[tokio::test]
async fn test_stale_entry_is_served_while_revalidating() {
    let fetcher = SnapshotFetcherStub::new();
    let counter = fetcher.fetch_counter();
    let cache = SnapshotCache::with_config(fetcher, short_freshness());

    let first = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    assert_eq!(fetch_ordinal(&first), 0);

    tokio::time::sleep(Duration::from_millis(250)).await;

    // stale read: still the old snapshot, no waiting
    let stale = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    assert_eq!(fetch_ordinal(&stale), 0);

    // give the background revalidation time to land
    tokio::time::sleep(Duration::from_millis(50)).await;
    let refreshed = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    assert_eq!(fetch_ordinal(&refreshed), 1);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_invalidate_forces_a_refetch() {
    let fetcher = SnapshotFetcherStub::new();
    let counter = fetcher.fetch_counter();
    let cache = SnapshotCache::new(fetcher);

    let first = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    cache.invalidate(ADDRESS, &Network::Mainnet);
    let second = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(fetch_ordinal(&first), 0);
    assert_eq!(fetch_ordinal(&second), 1);
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_refresh_replaces_a_fresh_entry() {
    let fetcher = SnapshotFetcherStub::new();
    let counter = fetcher.fetch_counter();
    let cache = SnapshotCache::new(fetcher);

    cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    let refreshed = cache
        .refresh(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    let read_back = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(fetch_ordinal(&refreshed), 1);
    assert!(Arc::ptr_eq(&refreshed, &read_back));
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

// (address, network) tuples are distinct keys.
#[tokio::test]
async fn test_networks_do_not_share_entries() {
    let fetcher = SnapshotFetcherStub::new();
    let counter = fetcher.fetch_counter();
    let cache = SnapshotCache::new(fetcher);

    let mainnet = cache
        .get_or_fetch(ADDRESS, &Network::Mainnet, &FacetSet::default())
        .await
        .unwrap();
    let testnet = cache
        .get_or_fetch(ADDRESS, &Network::Testnet, &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 2);
    assert_eq!(mainnet.network, Network::Mainnet);
    assert_eq!(testnet.network, Network::Testnet);
}
