//! Persistence backends for the content store.
//!
//! A backend is a passive key/value sink holding raw snapshot documents.
//! Parsing and default-merging stay in the store so every backend reports
//! corruption the same way.

use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod memory;
pub mod file;
pub mod remote;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use remote::{RemoteTableBackend, RemoteTableConfig};

#[async_trait]
pub trait SnapshotBackend: Send + Sync {
    /// Raw document stored under `key`, or `None` when nothing was ever written.
    async fn read(&self, key: &str) -> Result<Option<String>, ServiceError>;
    /// Replace the document stored under `key`.
    async fn write(&self, key: &str, raw: &str) -> Result<(), ServiceError>;
}
