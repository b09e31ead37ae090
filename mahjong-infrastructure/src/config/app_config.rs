use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use mahjong_domain::{DbConfig, GatewayConfig, RuntimeConfig, StorageBackend};

use super::validation::{validate_http_uri, validate_mongodb_uri};

pub const CONFIG_PATH_ENV: &str = "MAHJONG_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub storage_backend: String,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub gateway_uri: String,
    pub gateway_timeout_seconds: u64,
    pub max_body_bytes: u64,
    pub max_batch_size: usize,
    pub request_timeout_seconds: u64,
    pub log_level: String,
    pub log_format: String,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:7237".to_string(),
            api_token: None,
            storage_backend: "mongodb".to_string(),
            mongodb_uri: "mongodb://localhost:27017/".to_string(),
            mongodb_database: "majsoul".to_string(),
            gateway_uri: "http://localhost:7236".to_string(),
            gateway_timeout_seconds: 10,
            max_body_bytes: 1024 * 1024,
            max_batch_size: 1000,
            request_timeout_seconds: 15,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &str) -> Result<Self> {
        let file_path = Path::new(path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(file_path.parent());
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(log_dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, log_dir));
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(log_dir) = &self.log_dir {
            if log_dir.trim().is_empty() {
                self.log_dir = None;
            }
        }
        self.gateway_uri = self.gateway_uri.trim().trim_end_matches('/').to_string();
        self.mongodb_uri = self.mongodb_uri.trim().to_string();
        self.mongodb_database = self.mongodb_database.trim().to_string();
        self.storage_backend = self.storage_backend.trim().to_lowercase();
        self.log_format = self.log_format.trim().to_lowercase();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        let backend = StorageBackend::parse(&self.storage_backend)
            .ok_or_else(|| anyhow!("unknown storage_backend '{}'", self.storage_backend))?;
        if backend == StorageBackend::MongoDb {
            validate_mongodb_uri(&self.mongodb_uri)?;
            if self.mongodb_database.is_empty() {
                return Err(anyhow!("mongodb_database must not be empty"));
            }
        }
        validate_http_uri("gateway_uri", &self.gateway_uri)?;
        if self.gateway_timeout_seconds == 0 || self.request_timeout_seconds == 0 {
            return Err(anyhow!("timeouts must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.max_batch_size == 0 {
            return Err(anyhow!("max_batch_size must be greater than 0"));
        }
        if self.log_format != "text" && self.log_format != "json" {
            return Err(anyhow!("log_format must be 'text' or 'json'"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            max_body_bytes: self.max_body_bytes,
            max_batch_size: self.max_batch_size,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            backend: StorageBackend::parse(&self.storage_backend).unwrap_or(StorageBackend::MongoDb),
            mongodb_uri: self.mongodb_uri.clone(),
            mongodb_database: self.mongodb_database.clone(),
        }
    }

    pub fn to_gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            gateway_uri: self.gateway_uri.clone(),
            timeout_seconds: self.gateway_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("MAHJONG_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("MAHJONG_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = lookup("MAHJONG_STORAGE_BACKEND") {
            self.storage_backend = value;
        }
        if let Some(value) = lookup("MAHJONG_MONGODB_URI") {
            self.mongodb_uri = value;
        }
        if let Some(value) = lookup("MAHJONG_MONGODB_DATABASE") {
            self.mongodb_database = value;
        }
        if let Some(value) = lookup("MAHJONG_GATEWAY_URI") {
            self.gateway_uri = value;
        }
        if let Some(value) = lookup("MAHJONG_GATEWAY_TIMEOUT_SECONDS") {
            self.gateway_timeout_seconds = value.parse().unwrap_or(self.gateway_timeout_seconds);
        }
        if let Some(value) = lookup("MAHJONG_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("MAHJONG_MAX_BATCH_SIZE") {
            self.max_batch_size = value.parse().unwrap_or(self.max_batch_size);
        }
        if let Some(value) = lookup("MAHJONG_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("MAHJONG_LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some(value) = lookup("MAHJONG_LOG_FORMAT") {
            self.log_format = value;
        }
        if let Some(value) = lookup("MAHJONG_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
