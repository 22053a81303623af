use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::SnapshotBackend;
use crate::errors::ServiceError;

/// Connection settings for a PostgREST-style table with the columns
/// `key text primary key`, `data jsonb`, `updated_at timestamptz`.
#[derive(Clone, Debug)]
pub struct RemoteTableConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
    pub timeout: Duration,
}

/// Remote table backend (Supabase REST or any PostgREST server).
///
/// Writes are upserts on `key`; concurrent writers are last-write-wins.
#[derive(Clone, Debug)]
pub struct RemoteTableBackend {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
struct SnapshotRow {
    data: Value,
}

#[derive(Serialize)]
struct SnapshotUpsert<'a> {
    key: &'a str,
    data: Value,
    updated_at: DateTime<Utc>,
}

impl RemoteTableBackend {
    pub fn new(cfg: RemoteTableConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| ServiceError::storage("build http client", e))?;
        let endpoint = format!("{}/rest/v1/{}", cfg.url.trim_end_matches('/'), cfg.table);
        Ok(Self { client, endpoint, api_key: cfg.api_key })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key).bearer_auth(&self.api_key)
    }

    async fn send(&self, req: RequestBuilder, op: &str) -> Result<Response, ServiceError> {
        let resp = self
            .authorized(req)
            .send()
            .await
            .map_err(|e| ServiceError::storage(&format!("remote {op}"), e))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Storage(format!("remote {op} returned {status}: {body}")));
        }
        Ok(resp)
    }
}

#[async_trait]
impl SnapshotBackend for RemoteTableBackend {
    async fn read(&self, key: &str) -> Result<Option<String>, ServiceError> {
        let req = self
            .client
            .get(&self.endpoint)
            .query(&[("key", format!("eq.{key}")), ("select", "data".to_string())]);
        let rows: Vec<SnapshotRow> = self
            .send(req, "read")
            .await?
            .json()
            .await
            .map_err(|e| ServiceError::storage("decode remote rows", e))?;
        debug!(endpoint = %self.endpoint, key, rows = rows.len(), "remote snapshot fetched");
        Ok(rows
            .into_iter()
            .next()
            .map(|row| row.data)
            .filter(|data| !data.is_null())
            .map(|data| data.to_string()))
    }

    async fn write(&self, key: &str, raw: &str) -> Result<(), ServiceError> {
        let data: Value = serde_json::from_str(raw)?;
        let body = [SnapshotUpsert { key, data, updated_at: Utc::now() }];
        let req = self
            .client
            .post(&self.endpoint)
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&body);
        self.send(req, "write").await?;
        debug!(endpoint = %self.endpoint, key, "remote snapshot upserted");
        Ok(())
    }
}
