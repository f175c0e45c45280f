use thiserror::Error;

pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;

/// Failure of a whole aggregation call.
///
/// Individual facet failures are not errors at this level; they travel as
/// data inside the snapshot. Only a violated precondition fails the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("implausible account address: {0:?}")]
    ImplausibleAddress(String),
}
