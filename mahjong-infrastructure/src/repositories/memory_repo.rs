use std::collections::hash_map::Entry;
use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use mahjong_domain::ports::{AccountRepository, ReplayRepository};
use mahjong_domain::{AccountId, AccountRecord, ReplayRecord};

/// Process-local store used by the `memory` backend and by tests. Contents
/// are lost on restart.
#[derive(Default)]
pub struct MemoryRepo {
    accounts: RwLock<HashMap<AccountId, AccountRecord>>,
    replays: RwLock<HashMap<String, ReplayRecord>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn replay_count(&self) -> usize {
        self.replays.read().await.len()
    }
}

#[async_trait]
impl AccountRepository for MemoryRepo {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn find_account(&self, account_id: AccountId) -> Result<Option<AccountRecord>> {
        Ok(self.accounts.read().await.get(&account_id).cloned())
    }

    async fn find_accounts(&self, account_ids: &[AccountId]) -> Result<Vec<AccountRecord>> {
        let accounts = self.accounts.read().await;
        Ok(account_ids
            .iter()
            .filter_map(|id| accounts.get(id).cloned())
            .collect())
    }

    async fn find_accounts_by_nickname(&self, nickname: &str) -> Result<Vec<AccountRecord>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .filter(|record| record.nickname == nickname)
            .cloned()
            .collect())
    }

    async fn find_accounts_by_nicknames(&self, nicknames: &[String]) -> Result<Vec<AccountRecord>> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .filter(|record| nicknames.iter().any(|name| *name == record.nickname))
            .cloned()
            .collect())
    }

    async fn insert_account_if_absent(&self, record: &AccountRecord) -> Result<bool> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(record.account_id) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                Ok(true)
            }
        }
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl ReplayRepository for MemoryRepo {
    async fn find_replay(&self, uuid: &str) -> Result<Option<ReplayRecord>> {
        Ok(self.replays.read().await.get(uuid).cloned())
    }

    async fn create_replay(&self, record: &ReplayRecord) -> Result<()> {
        self.replays
            .write()
            .await
            .entry(record.uuid.clone())
            .or_insert_with(|| record.clone());
        Ok(())
    }
}
