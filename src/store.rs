use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Storage capability consumed by the HTTP layer
///
/// Implementations must be safe to call from many request tasks at once.
/// A key that was never set (or was deleted) reads back as the empty string;
/// callers cannot tell it apart from a key explicitly set to `""`.
#[async_trait]
pub trait Store: Send + Sync {
    /// Return the value stored under `key`, or `""` if there is none
    async fn get(&self, key: &str) -> Result<String>;

    /// Assign `value` to `key`, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// In-process store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &str) -> Result<String> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned().unwrap_or_default())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        tracing::debug!("Set key in memory store: {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        if self.entries.write().await.remove(key).is_none() {
            tracing::debug!("Delete of missing key ignored: {}", key);
        }
        Ok(())
    }
}
