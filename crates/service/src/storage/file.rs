use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::SnapshotBackend;
use crate::errors::ServiceError;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Initialize the backend rooted at `dir`, creating the directory if missing.
    pub async fn new<P: Into<PathBuf>>(dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| ServiceError::storage(&format!("cannot create {}", dir.display()), e))?;
        Ok(Arc::new(Self { dir }))
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl SnapshotBackend for FileBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let path = self.path_for(key);
        match fs::read(&path).await {
            // invalid UTF-8 is left for the JSON parser to reject as corruption
            Ok(bytes) => Ok(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::storage(&format!("read {}", path.display()), e)),
        }
    }

    async fn write(&self, key: &str, raw: &str) -> Result<(), ServiceError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .await
            .map_err(|e| ServiceError::storage(&format!("write {}", tmp.display()), e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| ServiceError::storage(&format!("rename into {}", path.display()), e))?;
        debug!(path = %path.display(), bytes = raw.len(), "snapshot file replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn file_backend_persists_across_instances() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("portfolio_file_backend_{}", Uuid::new_v4()));
        let backend = FileBackend::new(&dir).await?;

        // missing file reads as absent
        assert_eq!(backend.read("portfolio_data_v1").await?, None);

        backend.write("portfolio_data_v1", r#"{"location":"Jakarta"}"#).await?;
        backend.write("portfolio_data_v1", r#"{"location":"Bandung"}"#).await?;

        let reopened = FileBackend::new(&dir).await?;
        assert_eq!(
            reopened.read("portfolio_data_v1").await?.as_deref(),
            Some(r#"{"location":"Bandung"}"#)
        );
        assert!(!reopened.path_for("portfolio_data_v1").with_extension("json.tmp").exists());

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }
}
