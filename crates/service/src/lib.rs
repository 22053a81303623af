//! Content store for the portfolio site.
//! - Owns the in-memory snapshot and its mutation operations.
//! - Persists full snapshots through pluggable backends (memory, file, remote table).
//! - Derives the public read model consumed by the render surface.

pub mod errors;
pub mod observability;
pub mod storage;
pub mod content;

pub use content::{ContentStore, PortfolioView};
pub use errors::ServiceError;
pub use storage::SnapshotBackend;
