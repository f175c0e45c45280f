use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use log::*;
use riptide_core::errors::{RpcError, RpcResult};
use riptide_core::RpcProvider;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::envelope::parse_ws_envelope;
use crate::rpc_provider_config::RpcProviderConfig;

type LedgerWebSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// JSON-RPC over a single reused WebSocket connection.
///
/// The connection is established lazily on the first request, requests are
/// correlated by id, and the stream is dropped after a transport failure or
/// timeout so the next request reconnects from a clean state.
pub struct WsRpcProvider {
    config: RpcProviderConfig,
    stream: Mutex<Option<LedgerWebSocket>>,
    next_id: AtomicU64,
}

impl WsRpcProvider {
    pub fn new(config: RpcProviderConfig) -> Self {
        Self {
            config,
            stream: Mutex::new(None),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn mainnet() -> Self {
        Self::new(RpcProviderConfig::mainnet())
    }

    async fn round_trip(&self, request: &Value, id: u64) -> RpcResult<Value> {
        let mut guard = self.stream.lock().await;
        if guard.is_none() {
            debug!("connecting to {}", self.config.ws_url());
            let (stream, _) = connect_async(self.config.ws_url())
                .await
                .map_err(|err| RpcError::Transport(err.to_string()))?;
            *guard = Some(stream);
        }
        let result = match guard.as_mut() {
            Some(stream) => exchange(stream, request, id).await,
            None => Err(RpcError::Transport("connection unavailable".to_string())),
        };
        // a stream that failed mid-exchange may hold half a frame; protocol
        // errors leave it healthy
        if matches!(result, Err(RpcError::Transport(_)) | Err(RpcError::Timeout)) {
            *guard = None;
        }
        result
    }
}

#[async_trait]
impl RpcProvider for WsRpcProvider {
    async fn request(&self, method: &str, params: Value) -> RpcResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        // the WebSocket API flattens params into the request frame
        let mut request = match params {
            Value::Object(map) => Value::Object(map),
            Value::Null => json!({}),
            _ => {
                return Err(RpcError::Transport(
                    "request params must be an object".to_string(),
                ))
            }
        };
        request["id"] = json!(id);
        request["command"] = json!(method);

        match timeout(
            self.config.request_timeout(),
            self.round_trip(&request, id),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => {
                // a late reply on the old stream would desync id correlation
                *self.stream.lock().await = None;
                Err(RpcError::Timeout)
            }
        }
    }
}

async fn exchange(
    stream: &mut LedgerWebSocket,
    request: &Value,
    id: u64,
) -> RpcResult<Value> {
    stream
        .send(Message::Text(request.to_string()))
        .await
        .map_err(|err| RpcError::Transport(err.to_string()))?;
    while let Some(message) = stream.next().await {
        let message = message.map_err(|err| RpcError::Transport(err.to_string()))?;
        match message {
            Message::Text(text) => {
                let frame: Value = serde_json::from_str(&text).map_err(|err| {
                    RpcError::Transport(format!("malformed frame: {err}"))
                })?;
                if frame.get("id").and_then(Value::as_u64) == Some(id) {
                    return parse_ws_envelope(frame);
                }
                // unrelated frame (subscription stream etc), keep reading
            }
            // tungstenite queues the pong reply itself
            Message::Ping(_) | Message::Pong(_) => {}
            Message::Close(_) => {
                return Err(RpcError::Transport("connection closed".to_string()))
            }
            _ => {}
        }
    }
    Err(RpcError::Transport(
        "connection closed before response".to_string(),
    ))
}
