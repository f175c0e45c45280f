use async_trait::async_trait;
use log::*;
use reqwest::Client;
use riptide_core::errors::{RpcError, RpcResult};
use riptide_core::RpcProvider;
use serde_json::{json, Value};

use crate::envelope::parse_http_envelope;
use crate::rpc_provider_config::RpcProviderConfig;

/// JSON-RPC over HTTP(S) against a single rippled endpoint.
///
/// Connection pooling is reqwest's; one provider can serve any number of
/// concurrent requests.
pub struct HttpRpcProvider {
    client: Client,
    config: RpcProviderConfig,
}

impl HttpRpcProvider {
    pub fn new(config: RpcProviderConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn mainnet() -> Self {
        Self::new(RpcProviderConfig::mainnet())
    }

    pub fn testnet() -> Self {
        Self::new(RpcProviderConfig::testnet())
    }
}

#[async_trait]
impl RpcProvider for HttpRpcProvider {
    async fn request(&self, method: &str, params: Value) -> RpcResult<Value> {
        let body = json!({ "method": method, "params": [params] });
        trace!("POST {} {}", self.config.url(), method);
        let response = self
            .client
            .post(self.config.url())
            .timeout(self.config.request_timeout())
            .json(&body)
            .send()
            .await
            .map_err(into_rpc_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Transport(format!("HTTP {status}")));
        }
        let body: Value = response.json().await.map_err(into_rpc_error)?;
        parse_http_envelope(body)
    }
}

fn into_rpc_error(err: reqwest::Error) -> RpcError {
    if err.is_timeout() {
        RpcError::Timeout
    } else {
        RpcError::Transport(err.to_string())
    }
}
