use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// Request body cap for editor routes; inline data-URL images land here.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            worker_threads: Some(4),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    File,
    Memory,
    Remote,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_storage_key")]
    pub key: String,
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            data_dir: default_data_dir(),
            key: default_storage_key(),
            remote: RemoteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    /// Shared editor password. Empty disables the editor routes.
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

fn default_data_dir() -> String {
    "data".into()
}

fn default_storage_key() -> String {
    "portfolio_data_v1".into()
}

fn default_table() -> String {
    "portfolio".into()
}

fn default_timeout() -> u64 {
    10
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `$CONFIG_PATH` (or `config.toml`); a missing file means all
    /// defaults plus env overrides.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.server.normalize()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.admin.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            self.worker_threads = Some(w);
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("server.max_body_bytes must be positive"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 {
                self.worker_threads = Some(4);
            }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        // remote credentials usually come from the environment rather than the TOML file
        if self.remote.url.trim().is_empty() {
            if let Ok(url) = std::env::var("SUPABASE_URL") {
                self.remote.url = url;
            }
        }
        if self.remote.anon_key.trim().is_empty() {
            if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
                self.remote.anon_key = key;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let key_ok = !self.key.is_empty()
            && self.key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !key_ok {
            return Err(anyhow!("storage.key may only contain ASCII letters, digits, '_' and '-'"));
        }
        match self.backend {
            BackendKind::File if self.data_dir.trim().is_empty() => {
                Err(anyhow!("storage.data_dir is required for the file backend"))
            }
            BackendKind::Remote => self.remote.validate(),
            _ => Ok(()),
        }
    }
}

impl RemoteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() || self.anon_key.trim().is_empty() {
            return Err(anyhow!(
                "storage.remote.url and storage.remote.anon_key are required; set them in config.toml or SUPABASE_URL / SUPABASE_ANON_KEY"
            ));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("storage.remote.url must start with http(s)"));
        }
        if self.table.trim().is_empty() {
            return Err(anyhow!("storage.remote.table is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("storage.remote.timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}

impl AdminConfig {
    pub fn normalize_from_env(&mut self) {
        if self.password.is_empty() {
            if let Ok(password) = std::env::var("PORTFOLIO_ADMIN_PASSWORD") {
                self.password = password;
            }
        }
    }

    pub fn enabled(&self) -> bool {
        !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.storage.backend, BackendKind::File);
        assert_eq!(cfg.storage.key, "portfolio_data_v1");
        assert_eq!(cfg.storage.remote.table, "portfolio");
        assert_eq!(cfg.logging.format, LogFormat::Compact);
        assert!(!cfg.admin.enabled());
    }

    #[test]
    fn full_document_parses() {
        let cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [storage]
            backend = "remote"
            key = "portfolio_data_v1"

            [storage.remote]
            url = "https://abc.supabase.co"
            anon_key = "anon"
            timeout_secs = 3

            [admin]
            password = "letmein"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.storage.backend, BackendKind::Remote);
        assert_eq!(cfg.storage.remote.timeout_secs, 3);
        assert!(cfg.storage.validate().is_ok());
        assert!(cfg.admin.enabled());
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn remote_backend_requires_credentials() {
        let storage = StorageConfig { backend: BackendKind::Remote, ..Default::default() };
        assert!(storage.validate().is_err());

        let mut storage = storage;
        storage.remote.url = "ftp://abc".into();
        storage.remote.anon_key = "anon".into();
        assert!(storage.validate().is_err());
    }

    #[test]
    fn storage_key_must_be_path_safe() {
        let storage = StorageConfig { key: "../etc/passwd".into(), ..Default::default() };
        assert!(storage.validate().is_err());
        assert!(StorageConfig::default().validate().is_ok());
    }

    #[test]
    fn body_limit_defaults_and_overrides() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg.server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);

        let cfg = load_from_str("[server]\nhost = \"0.0.0.0\"\nport = 80\nmax_body_bytes = 1024").unwrap();
        assert_eq!(cfg.server.max_body_bytes, 1024);

        let mut server = ServerConfig { max_body_bytes: 0, ..Default::default() };
        assert!(server.normalize().is_err());
    }

    #[test]
    fn zero_worker_threads_fall_back() {
        let mut server = ServerConfig { worker_threads: Some(0), ..Default::default() };
        server.normalize().unwrap();
        assert_eq!(server.worker_threads, Some(4));
    }
}
