use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::AccountId;

#[derive(Debug, Deserialize, Clone)]
pub struct NicknameBatchRequest {
    #[serde(default)]
    pub account_ids: Vec<AccountId>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NicknameQuery {
    pub nickname: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NicknamesBatchRequest {
    #[serde(default)]
    pub nicknames: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecordAccountRequest {
    pub nickname: String,
    #[serde(default)]
    pub first_seen_at: i64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReplayHeadQuery {
    pub contest_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExecuteRequest {
    pub func: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Serialize, Clone)]
pub struct NicknameResponse {
    pub account_id: AccountId,
    pub nickname: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct NicknameBatchResponse {
    pub nicknames: HashMap<AccountId, Option<String>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct AccountIdsResponse {
    pub nickname: String,
    pub account_ids: Vec<AccountId>,
}

#[derive(Debug, Serialize, Clone)]
pub struct AccountIdsBatchResponse {
    pub accounts: HashMap<String, HashMap<AccountId, i64>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RecordAccountResponse {
    pub account_id: AccountId,
    pub created: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct ZoneResponse {
    pub account_id: AccountId,
    pub zone: String,
    pub symbol: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct DecodeResponse {
    pub raw: i64,
    pub account_id: AccountId,
    pub zone: String,
}

#[derive(Debug, Serialize, Clone, Default)]
pub struct ReadinessReport {
    pub database: bool,
    pub gateway: bool,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub max_body_bytes: u64,
    pub max_batch_size: usize,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDb,
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "mongodb",
            StorageBackend::Memory => "memory",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => Some(StorageBackend::MongoDb),
            "memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub backend: StorageBackend,
    pub mongodb_uri: String,
    pub mongodb_database: String,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub gateway_uri: String,
    pub timeout_seconds: u64,
}
