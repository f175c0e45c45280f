use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RpcResult<T> = std::result::Result<T, RpcError>;

/// rippled error code answered when the queried account has never been
/// funded. The account-info facet is the only place where this code is
/// interpreted semantically instead of being treated as a failure.
pub const ACT_NOT_FOUND: &str = "actNotFound";

/// Failure of a single RPC request, normalized across transports.
///
/// Protocol codes are preserved verbatim so callers can interpret them.
/// The type is plain data (cloneable, serializable) because facet failures
/// travel inside snapshots instead of being raised.
#[derive(Error, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum RpcError {
    /// Network unreachable, non-2xx status, or a malformed response body.
    #[error("transport error: {0}")]
    Transport(String),
    /// Well-formed error envelope answered by the ledger node.
    #[error("rpc error {code}: {message}")]
    Protocol { code: String, message: String },
    /// The request did not complete before its deadline.
    #[error("request timed out")]
    Timeout,
}
