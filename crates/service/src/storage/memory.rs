use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::SnapshotBackend;
use crate::errors::ServiceError;

/// Process-local backend. Nothing survives a restart.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Start with `raw` already stored under `key`.
    pub fn seeded(key: &str, raw: &str) -> Arc<Self> {
        let map = HashMap::from([(key.to_string(), raw.to_string())]);
        Arc::new(Self { inner: Arc::new(RwLock::new(map)) })
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.inner.read().await.get(key).cloned()
    }
}

#[async_trait]
impl SnapshotBackend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.raw(key).await)
    }

    async fn write(&self, key: &str, raw: &str) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_overwrites_per_key() -> Result<(), anyhow::Error> {
        let backend = MemoryBackend::seeded("a", "1");
        assert_eq!(backend.read("a").await?, Some("1".to_string()));
        assert_eq!(backend.read("b").await?, None);

        backend.write("a", "2").await?;
        backend.write("b", "3").await?;
        assert_eq!(backend.raw("a").await.as_deref(), Some("2"));
        assert_eq!(backend.raw("b").await.as_deref(), Some("3"));
        Ok(())
    }
}
