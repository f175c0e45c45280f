use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Tiny freshness-bounded map for fast-churning lookups (fee, price).
pub(crate) struct TtlMap<K, V> {
    ttl: Duration,
    values: Mutex<HashMap<K, (Instant, V)>>,
}

impl<K: Eq + Hash, V: Clone> TtlMap<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            values: Mutex::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.get(key).and_then(|(stored_at, value)| {
            (stored_at.elapsed() < self.ttl).then(|| value.clone())
        })
    }

    pub fn insert(&self, key: K, value: V) {
        let mut values =
            self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key, (Instant::now(), value));
    }
}
