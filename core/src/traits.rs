use async_trait::async_trait;
use serde_json::Value;

use crate::errors::RpcResult;

/// A single ledger RPC endpoint.
///
/// Implementations unwrap the rippled response envelope: the returned value
/// is the inner `result` object, and well-formed error envelopes surface as
/// [`crate::errors::RpcError::Protocol`] with the code kept verbatim.
#[async_trait]
pub trait RpcProvider: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> RpcResult<Value>;
}
