use async_trait::async_trait;

use crate::entities::{AccountRecord, ReplayRecord};
use crate::value_objects::AccountId;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn ensure_schema(&self) -> anyhow::Result<()>;
    async fn find_account(&self, account_id: AccountId) -> anyhow::Result<Option<AccountRecord>>;
    /// One round trip for the whole key set.
    async fn find_accounts(&self, account_ids: &[AccountId]) -> anyhow::Result<Vec<AccountRecord>>;
    async fn find_accounts_by_nickname(&self, nickname: &str) -> anyhow::Result<Vec<AccountRecord>>;
    async fn find_accounts_by_nicknames(
        &self,
        nicknames: &[String],
    ) -> anyhow::Result<Vec<AccountRecord>>;
    /// Stores `record` only when its id is unknown. Returns `true` when this
    /// call created the document.
    async fn insert_account_if_absent(&self, record: &AccountRecord) -> anyhow::Result<bool>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait ReplayRepository: Send + Sync {
    async fn find_replay(&self, uuid: &str) -> anyhow::Result<Option<ReplayRecord>>;
    async fn create_replay(&self, record: &ReplayRecord) -> anyhow::Result<()>;
}
