use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{json, Value};

use mahjong_domain::{
    AccountId, AccountRecord, AccountRepository, GatewayClient, GatewayReply, HealthCheckService,
    ReplayRecord, ReplayRepository, RuntimeConfig,
};

use crate::{AccountDirectory, AppState, GatewayPassthrough, Metrics, ReplayHeadCache};

#[derive(Default)]
pub struct FakeAccountRepo {
    pub records: Mutex<HashMap<AccountId, AccountRecord>>,
    pub queries: AtomicUsize,
    pub last_batch: Mutex<Vec<AccountId>>,
    pub fail: AtomicBool,
}

impl FakeAccountRepo {
    pub fn with_records(records: Vec<AccountRecord>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.records.lock().expect("lock");
            for record in records {
                map.insert(record.account_id, record);
            }
        }
        repo
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin(&self) -> anyhow::Result<()> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(anyhow!("store unreachable"));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for FakeAccountRepo {
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }

    async fn find_account(&self, account_id: AccountId) -> anyhow::Result<Option<AccountRecord>> {
        self.begin()?;
        Ok(self.records.lock().expect("lock").get(&account_id).cloned())
    }

    async fn find_accounts(&self, account_ids: &[AccountId]) -> anyhow::Result<Vec<AccountRecord>> {
        self.begin()?;
        *self.last_batch.lock().expect("lock") = account_ids.to_vec();
        let map = self.records.lock().expect("lock");
        Ok(account_ids.iter().filter_map(|id| map.get(id).cloned()).collect())
    }

    async fn find_accounts_by_nickname(&self, nickname: &str) -> anyhow::Result<Vec<AccountRecord>> {
        self.begin()?;
        let map = self.records.lock().expect("lock");
        Ok(map.values().filter(|r| r.nickname == nickname).cloned().collect())
    }

    async fn find_accounts_by_nicknames(
        &self,
        nicknames: &[String],
    ) -> anyhow::Result<Vec<AccountRecord>> {
        self.begin()?;
        let map = self.records.lock().expect("lock");
        Ok(map
            .values()
            .filter(|r| nicknames.contains(&r.nickname))
            .cloned()
            .collect())
    }

    async fn insert_account_if_absent(&self, record: &AccountRecord) -> anyhow::Result<bool> {
        self.begin()?;
        let mut map = self.records.lock().expect("lock");
        if map.contains_key(&record.account_id) {
            return Ok(false);
        }
        map.insert(record.account_id, record.clone());
        Ok(true)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.begin()
    }
}

#[derive(Default)]
pub struct FakeReplayRepo {
    pub records: Mutex<HashMap<String, ReplayRecord>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl FakeReplayRepo {
    pub fn get(&self, uuid: &str) -> Option<ReplayRecord> {
        self.records.lock().expect("lock").get(uuid).cloned()
    }

    pub async fn wait_for(&self, uuid: &str) -> Option<ReplayRecord> {
        for _ in 0..200 {
            if let Some(record) = self.get(uuid) {
                return Some(record);
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        None
    }

    pub async fn wait_for_writes(&self, expected: usize) {
        for _ in 0..200 {
            if self.writes.load(Ordering::SeqCst) >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl ReplayRepository for FakeReplayRepo {
    async fn find_replay(&self, uuid: &str) -> anyhow::Result<Option<ReplayRecord>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(anyhow!("store unreachable"));
        }
        Ok(self.get(uuid))
    }

    async fn create_replay(&self, record: &ReplayRecord) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("write rejected"));
        }
        self.records
            .lock()
            .expect("lock")
            .insert(record.uuid.clone(), record.clone());
        Ok(())
    }
}

/// Gateway double that replays scripted bodies and records every call.
#[derive(Default)]
pub struct FakeGateway {
    pub calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
    pub scripted: Mutex<VecDeque<anyhow::Result<Value>>>,
}

impl FakeGateway {
    pub fn push_body(&self, body: Value) {
        self.scripted.lock().expect("lock").push_back(Ok(body));
    }

    pub fn push_transport_error(&self) {
        self.scripted
            .lock()
            .expect("lock")
            .push_back(Err(anyhow!("connection refused")));
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls
            .lock()
            .expect("lock")
            .iter()
            .filter(|(p, _)| p == path)
            .count()
    }

    pub fn last_call(&self) -> Option<(String, Vec<(String, String)>)> {
        self.calls.lock().expect("lock").last().cloned()
    }

    fn respond(&self, path: &str, params: Vec<(&str, String)>) -> anyhow::Result<GatewayReply> {
        self.calls.lock().expect("lock").push((
            path.to_string(),
            params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        ));
        let next = self
            .scripted
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Ok(json!({})));
        next.map(GatewayReply::from_body)
    }
}

#[async_trait]
impl GatewayClient for FakeGateway {
    async fn fetch_replay_head(&self, uuid: &str) -> anyhow::Result<GatewayReply> {
        self.respond("/paipu_head", vec![("uuid", uuid.to_string())])
    }

    async fn fetch_replay(&self, uuid: &str) -> anyhow::Result<GatewayReply> {
        self.respond("/paipu", vec![("uuid", uuid.to_string())])
    }

    async fn fetch_ob_token(&self, uuid: &str) -> anyhow::Result<GatewayReply> {
        self.respond("/token", vec![("uuid", uuid.to_string())])
    }

    async fn fetch_live_list(&self, fid: &str) -> anyhow::Result<GatewayReply> {
        self.respond("/livelist", vec![("id", fid.to_string())])
    }

    async fn fetch_contest(&self, fid: &str) -> anyhow::Result<GatewayReply> {
        self.respond(
            "/execute",
            vec![
                ("func", "fetchCustomizedContestByContestId".to_string()),
                ("data", json!({ "contest_id": fid }).to_string()),
            ],
        )
    }

    async fn execute(&self, func: &str, data: &Value) -> anyhow::Result<GatewayReply> {
        self.respond(
            "/execute",
            vec![("func", func.to_string()), ("data", data.to_string())],
        )
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct FakeHealth;

#[async_trait]
impl HealthCheckService for FakeHealth {
    async fn check_database(&self) -> anyhow::Result<bool> {
        Ok(true)
    }

    async fn check_gateway(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub fn app_state(
    accounts: Arc<FakeAccountRepo>,
    replays: Arc<FakeReplayRepo>,
    gateway: Arc<FakeGateway>,
) -> AppState {
    let metrics = Arc::new(Metrics::default());
    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: None,
            max_body_bytes: 1024 * 1024,
            max_batch_size: 4,
            request_timeout_seconds: 5,
        },
        directory: AccountDirectory::new(accounts, metrics.clone()),
        replays: ReplayHeadCache::new(replays, gateway.clone(), metrics.clone()),
        gateway: GatewayPassthrough::new(gateway, metrics.clone()),
        health: Arc::new(FakeHealth),
        metrics,
    }
}
