use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use riptide_core::errors::{RpcError, RpcResult};
use riptide_core::RpcProvider;
use serde_json::Value;

type Handler = dyn Fn(&str, &Value) -> RpcResult<Value> + Send + Sync;

/// Scriptable in-memory [`RpcProvider`].
///
/// Canned responses are registered per method; a handler closure takes over
/// when the answer has to depend on the request itself. Delays simulate a
/// slow endpoint for deadline tests.
#[derive(Default)]
pub struct RpcProviderStub {
    responses: Mutex<HashMap<String, Canned>>,
    handler: Option<Box<Handler>>,
    delay: Option<Duration>,
    request_count: Arc<AtomicUsize>,
}

struct Canned {
    response: RpcResult<Value>,
    delay: Option<Duration>,
}

impl RpcProviderStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler(
        handler: impl Fn(&str, &Value) -> RpcResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Some(Box::new(handler)),
            ..Self::default()
        }
    }

    pub fn add(&mut self, method: &str, response: RpcResult<Value>) {
        self.add_delayed(method, response, None);
    }

    /// Register a response that answers only after `delay`.
    pub fn add_delayed(
        &mut self,
        method: &str,
        response: RpcResult<Value>,
        delay: Option<Duration>,
    ) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(method.to_string(), Canned { response, delay });
    }

    /// Delay applied to every request without its own delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = Some(delay);
    }

    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    pub fn request_counter(&self) -> Arc<AtomicUsize> {
        self.request_count.clone()
    }
}

#[async_trait]
impl RpcProvider for RpcProviderStub {
    async fn request(&self, method: &str, params: Value) -> RpcResult<Value> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        let canned = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(method)
            .map(|canned| (canned.response.clone(), canned.delay));
        let (response, delay) = match canned {
            Some((response, delay)) => (Some(response), delay.or(self.delay)),
            None => (None, self.delay),
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(response) = response {
            return response;
        }
        if let Some(handler) = &self.handler {
            return handler(method, &params);
        }
        Err(RpcError::Transport(format!(
            "no canned response for {method}"
        )))
    }
}
