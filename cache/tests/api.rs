use riptide_cache::Riptide;
use riptide_core::FacetSet;
use riptide_networks::Network;

mod utils;
use utils::{fetch_ordinal, SnapshotFetcherStub};

const ADDRESS: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";

#[tokio::test]
async fn test_known_identifiers_resolve_without_fallback() {
    let riptide = Riptide::with_fetcher(SnapshotFetcherStub::new());

    let snapshot = riptide
        .aggregate(ADDRESS, "xahau", &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(snapshot.network, Network::Xahau);
    assert!(!snapshot.network_fallback);
}

#[tokio::test]
async fn test_unknown_identifier_falls_back_to_mainnet() {
    let riptide = Riptide::with_fetcher(SnapshotFetcherStub::new());

    let snapshot = riptide
        .aggregate(ADDRESS, "wss://unknown.example", &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(snapshot.network, Network::Mainnet);
    assert!(snapshot.network_fallback);
}

#[tokio::test]
async fn test_fallback_is_surfaced_on_cached_lookups_too() {
    let riptide = Riptide::with_fetcher(SnapshotFetcherStub::new());

    let snapshot = riptide
        .get_or_fetch(ADDRESS, "moonnet", &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(snapshot.network, Network::Mainnet);
    assert!(snapshot.network_fallback);
}

// The facade invalidation reaches the cache: the next read re-aggregates.
#[tokio::test]
async fn test_invalidate_after_a_submission() {
    let fetcher = SnapshotFetcherStub::new();
    let riptide = Riptide::with_fetcher(fetcher);

    let before = riptide
        .get_or_fetch(ADDRESS, "mainnet", &FacetSet::default())
        .await
        .unwrap();
    riptide.invalidate(ADDRESS, "mainnet");
    let after = riptide
        .get_or_fetch(ADDRESS, "mainnet", &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(fetch_ordinal(&before), 0);
    assert_eq!(fetch_ordinal(&after), 1);
}

// An identifier written as the websocket endpoint resolves like the
// logical name and shares its cache entry.
#[tokio::test]
async fn test_url_and_name_identifiers_share_one_entry() {
    let fetcher = SnapshotFetcherStub::new();
    let counter = fetcher.fetch_counter();
    let riptide = Riptide::with_fetcher(fetcher);

    riptide
        .get_or_fetch(ADDRESS, "wss://xrplcluster.com", &FacetSet::default())
        .await
        .unwrap();
    riptide
        .get_or_fetch(ADDRESS, "mainnet", &FacetSet::default())
        .await
        .unwrap();

    assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 1);
}
