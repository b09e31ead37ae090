use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::debug;

use mahjong_domain::ports::AccountRepository;
use mahjong_domain::{AccountId, AccountRecord};

use crate::{AppError, Metrics};

/// Nickname and account id mapping, read straight from the store.
#[derive(Clone)]
pub struct AccountDirectory {
    repo: Arc<dyn AccountRepository>,
    metrics: Arc<Metrics>,
}

impl AccountDirectory {
    pub fn new(repo: Arc<dyn AccountRepository>, metrics: Arc<Metrics>) -> Self {
        Self { repo, metrics }
    }

    pub async fn lookup_nickname(&self, account_id: AccountId) -> Result<Option<String>, AppError> {
        let record = self
            .repo
            .find_account(account_id)
            .await
            .map_err(AppError::Store)?;
        Ok(record.map(|record| record.nickname))
    }

    /// Every requested id is present in the result, `None` when unknown.
    pub async fn lookup_nicknames_batch(
        &self,
        account_ids: &[AccountId],
    ) -> Result<HashMap<AccountId, Option<String>>, AppError> {
        if account_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let keys = account_ids.iter().copied().collect::<BTreeSet<_>>();
        let mut result = keys
            .iter()
            .map(|id| (*id, None))
            .collect::<HashMap<AccountId, Option<String>>>();

        let keys = keys.into_iter().collect::<Vec<_>>();
        let records = self
            .repo
            .find_accounts(&keys)
            .await
            .map_err(AppError::Store)?;
        for record in records {
            if let Some(slot) = result.get_mut(&record.account_id) {
                *slot = Some(record.nickname);
            }
        }
        Ok(result)
    }

    pub async fn lookup_account_ids_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Vec<AccountId>, AppError> {
        let records = self
            .repo
            .find_accounts_by_nickname(nickname)
            .await
            .map_err(AppError::Store)?;
        Ok(records.into_iter().map(|record| record.account_id).collect())
    }

    /// nickname -> (account id -> first seen). Every requested nickname is
    /// present, possibly with an empty inner map.
    pub async fn lookup_multi_by_nicknames(
        &self,
        nicknames: &[String],
    ) -> Result<HashMap<String, HashMap<AccountId, i64>>, AppError> {
        if nicknames.is_empty() {
            return Ok(HashMap::new());
        }
        let keys = nicknames.iter().cloned().collect::<BTreeSet<_>>();
        let mut result = keys
            .iter()
            .map(|nickname| (nickname.clone(), HashMap::new()))
            .collect::<HashMap<String, HashMap<AccountId, i64>>>();

        let keys = keys.into_iter().collect::<Vec<_>>();
        let records = self
            .repo
            .find_accounts_by_nicknames(&keys)
            .await
            .map_err(AppError::Store)?;
        for record in records {
            if let Some(accounts) = result.get_mut(&record.nickname) {
                accounts.insert(record.account_id, record.first_seen_at);
            }
        }
        Ok(result)
    }

    /// First writer wins; later calls for the same id are no-ops.
    pub async fn record_if_absent(
        &self,
        account_id: AccountId,
        nickname: &str,
        first_seen_at: i64,
    ) -> Result<bool, AppError> {
        let record = AccountRecord::new(account_id, nickname, first_seen_at);
        let created = self
            .repo
            .insert_account_if_absent(&record)
            .await
            .map_err(AppError::Store)?;
        if created {
            self.metrics.record_account_created();
            debug!(account_id, nickname, "account recorded");
        }
        Ok(created)
    }
}
