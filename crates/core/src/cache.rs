use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use serde_json::Value;

/// Result of a cache lookup, mirroring the tool wire shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CacheLookup {
    pub hit: bool,
    pub key: String,
    pub value: Option<Value>,
}

#[derive(Clone, Debug)]
struct CacheSlot {
    value: Value,
    // Accepted for forward compatibility; eviction is not enforced.
    #[allow(dead_code)]
    ttl_seconds: Option<u64>,
}

/// Explicitly constructed key/value cache.
///
/// Callers own an instance and pass it where caching is wanted; there is
/// no process-wide cache, so tests get an isolated store per run.
#[derive(Debug, Default)]
pub struct MemoryCache {
    slots: Mutex<HashMap<String, CacheSlot>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> CacheLookup {
        let slots = self.lock();
        let value = slots.get(key).map(|slot| slot.value.clone());
        CacheLookup { hit: value.is_some(), key: key.to_string(), value }
    }

    pub fn set(&self, key: impl Into<String>, value: Value, ttl_seconds: Option<u64>) {
        self.lock().insert(key.into(), CacheSlot { value, ttl_seconds });
    }

    pub fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheSlot>> {
        match self.slots.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
