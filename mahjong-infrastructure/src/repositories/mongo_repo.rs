use anyhow::Result;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, UpdateOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::{debug, info};

use mahjong_domain::ports::{AccountRepository, ReplayRepository};
use mahjong_domain::{AccountId, AccountRecord, DbConfig, ReplayRecord};

pub const ACCOUNT_MAP_COLLECTION: &str = "account_map";
pub const PAIPU_HEAD_COLLECTION: &str = "paipu_head";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoRepo {
    database: Database,
}

impl MongoRepo {
    pub fn new(client: Client, database: &str) -> Self {
        Self {
            database: client.database(database),
        }
    }

    /// The driver connects lazily; call `ping` to confirm the server is reachable.
    pub async fn connect(config: &DbConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        info!(database = %config.mongodb_database, "mongodb client ready");
        Ok(Self::new(client, &config.mongodb_database))
    }

    fn accounts(&self) -> Collection<AccountRecord> {
        self.database.collection(ACCOUNT_MAP_COLLECTION)
    }

    fn replays(&self) -> Collection<ReplayRecord> {
        self.database.collection(PAIPU_HEAD_COLLECTION)
    }
}

#[async_trait]
impl AccountRepository for MongoRepo {
    async fn ensure_schema(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "nickname": 1 })
            .options(
                IndexOptions::builder()
                    .name("nickname_1".to_string())
                    .build(),
            )
            .build();
        self.accounts().create_index(index, None).await?;
        Ok(())
    }

    async fn find_account(&self, account_id: AccountId) -> Result<Option<AccountRecord>> {
        let record = self
            .accounts()
            .find_one(doc! { "_id": account_id }, None)
            .await?;
        Ok(record)
    }

    async fn find_accounts(&self, account_ids: &[AccountId]) -> Result<Vec<AccountRecord>> {
        let cursor = self
            .accounts()
            .find(doc! { "_id": { "$in": account_ids.to_vec() } }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_accounts_by_nickname(&self, nickname: &str) -> Result<Vec<AccountRecord>> {
        let cursor = self
            .accounts()
            .find(doc! { "nickname": nickname }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_accounts_by_nicknames(&self, nicknames: &[String]) -> Result<Vec<AccountRecord>> {
        let cursor = self
            .accounts()
            .find(doc! { "nickname": { "$in": nicknames.to_vec() } }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert_account_if_absent(&self, record: &AccountRecord) -> Result<bool> {
        let filter = doc! { "_id": record.account_id };
        let update = doc! {
            "$setOnInsert": {
                "nickname": record.nickname.clone(),
                "starttime": record.first_seen_at,
            }
        };
        let options = UpdateOptions::builder().upsert(true).build();
        match self.accounts().update_one(filter, update, options).await {
            Ok(result) => Ok(result.upserted_id.is_some()),
            // two upserts racing on the same _id: the loser sees 11000
            Err(err) if is_duplicate_key(&err) => {
                debug!(account_id = record.account_id, "account already recorded");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

#[async_trait]
impl ReplayRepository for MongoRepo {
    async fn find_replay(&self, uuid: &str) -> Result<Option<ReplayRecord>> {
        let record = self.replays().find_one(doc! { "_id": uuid }, None).await?;
        Ok(record)
    }

    async fn create_replay(&self, record: &ReplayRecord) -> Result<()> {
        match self.replays().insert_one(record, None).await {
            Ok(_) => Ok(()),
            Err(err) if is_duplicate_key(&err) => {
                debug!(uuid = %record.uuid, "replay head already cached");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
