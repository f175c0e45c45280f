use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use log::*;
use riptide_core::address::is_plausible_address;
use riptide_core::errors::RpcError;
use riptide_core::{ActivationState, FacetName, FacetSet, RpcProvider};
use riptide_networks::Network;
use tokio::time::{timeout_at, Instant};

use crate::account_snapshot::AccountSnapshot;
use crate::errors::{SnapshotError, SnapshotResult};
use crate::facets::{self, AccountInfoOutcome};

/// Default bound on one whole aggregation, shared by every facet fetch.
pub const DEFAULT_AGGREGATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Fans one account's facet fetches out against a single endpoint and
/// merges whatever settled into an [`AccountSnapshot`].
///
/// Facets are independent: they run concurrently, none blocks another, and
/// an individual failure becomes an `errors` entry instead of cancelling its
/// siblings. The whole operation shares one deadline; a facet still pending
/// when it expires is dropped (aborting its request) and recorded as timed
/// out.
pub struct AccountSnapshotProvider<T: RpcProvider> {
    rpc: T,
    network: Network,
    aggregation_timeout: Duration,
}

impl<T: RpcProvider> AccountSnapshotProvider<T> {
    pub fn new(rpc: T, network: Network) -> Self {
        Self::with_timeout(rpc, network, DEFAULT_AGGREGATION_TIMEOUT)
    }

    pub fn with_timeout(
        rpc: T,
        network: Network,
        aggregation_timeout: Duration,
    ) -> Self {
        Self {
            rpc,
            network,
            aggregation_timeout,
        }
    }

    pub async fn try_fetch_snapshot_of_account(
        &self,
        address: &str,
        facets: &FacetSet,
    ) -> SnapshotResult<AccountSnapshot> {
        // Malformed input is the caller's bug and fails the whole call;
        // everything past this point degrades per facet instead.
        if !is_plausible_address(address) {
            return Err(SnapshotError::ImplausibleAddress(address.to_string()));
        }
        let requested = facets.effective();
        let deadline = Instant::now() + self.aggregation_timeout;
        debug!(
            "aggregating {} facet(s) for {} on {}",
            requested.len(),
            address,
            self.network.display_name()
        );

        // One concurrent fetch per requested facet, all against the same
        // endpoint, settled together regardless of individual failure.
        let (info, transactions, objects, nfts, currencies, trust_lines, channels) = tokio::join!(
            run_facet(
                requested.contains(FacetName::AccountInfo),
                deadline,
                facets::fetch_account_info(&self.rpc, address),
            ),
            run_facet(
                requested.contains(FacetName::Transactions),
                deadline,
                facets::fetch_transactions(&self.rpc, address),
            ),
            run_facet(
                requested.contains(FacetName::Objects),
                deadline,
                facets::fetch_objects(&self.rpc, address),
            ),
            run_facet(
                requested.contains(FacetName::Nfts),
                deadline,
                facets::fetch_nfts(&self.rpc, address),
            ),
            run_facet(
                requested.contains(FacetName::Currencies),
                deadline,
                facets::fetch_currencies(&self.rpc, address),
            ),
            run_facet(
                requested.contains(FacetName::TrustLines),
                deadline,
                facets::fetch_trust_lines(&self.rpc, address),
            ),
            run_facet(
                requested.contains(FacetName::Channels),
                deadline,
                facets::fetch_channels(&self.rpc, address),
            ),
        );

        let mut errors = HashMap::new();

        // account_info is the only facet whose failure modes differ: a
        // verbatim actNotFound is a semantic negative, not a fetch failure,
        // and a fetch failure must not masquerade as non-existence.
        let (activation, account) = match info {
            None => (ActivationState::Unknown, None),
            Some(Ok(AccountInfoOutcome::Found(data))) => {
                (ActivationState::Active, Some(data))
            }
            Some(Ok(AccountInfoOutcome::NotFound)) => {
                (ActivationState::Inactive, None)
            }
            Some(Err(err)) => {
                warn!("account_info failed for {address}: {err}");
                errors.insert(FacetName::AccountInfo, err);
                (ActivationState::Unknown, None)
            }
        };

        let snapshot = AccountSnapshot {
            address: address.to_string(),
            network: self.network.clone(),
            activation,
            account,
            transactions: merge_facet(
                FacetName::Transactions,
                transactions,
                &mut errors,
            ),
            objects: merge_facet(FacetName::Objects, objects, &mut errors),
            nfts: merge_facet(FacetName::Nfts, nfts, &mut errors),
            currencies: merge_facet(
                FacetName::Currencies,
                currencies,
                &mut errors,
            ),
            trust_lines: merge_facet(
                FacetName::TrustLines,
                trust_lines,
                &mut errors,
            ),
            channels: merge_facet(FacetName::Channels, channels, &mut errors),
            errors,
            network_fallback: false,
        };
        if snapshot.is_degraded() {
            info!(
                "snapshot for {address} degraded: {} facet(s) failed",
                snapshot.errors.len()
            );
        }
        Ok(snapshot)
    }
}

/// Run one facet fetch against the shared deadline.
///
/// Expiry drops the in-flight future, which aborts its request; the facet
/// settles as timed out without touching its siblings.
async fn run_facet<F, P>(
    requested: bool,
    deadline: Instant,
    fetch: F,
) -> Option<Result<P, RpcError>>
where
    F: Future<Output = Result<P, RpcError>>,
{
    if !requested {
        return None;
    }
    match timeout_at(deadline, fetch).await {
        Ok(outcome) => Some(outcome),
        Err(_) => Some(Err(RpcError::Timeout)),
    }
}

/// Fold one settled facet into its snapshot slot: unrequested stays absent,
/// success keeps its payload, failure is recorded and defaulted.
fn merge_facet<P: Default>(
    facet: FacetName,
    outcome: Option<Result<P, RpcError>>,
    errors: &mut HashMap<FacetName, RpcError>,
) -> Option<P> {
    match outcome {
        None => None,
        Some(Ok(payload)) => Some(payload),
        Some(Err(err)) => {
            warn!("{facet} failed: {err}");
            errors.insert(facet, err);
            Some(P::default())
        }
    }
}
