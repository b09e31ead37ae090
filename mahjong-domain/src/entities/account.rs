// Account entity
// One nickname per account id, as first observed

use serde::{Deserialize, Serialize};

use crate::value_objects::AccountId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "_id")]
    pub account_id: AccountId,
    pub nickname: String,
    #[serde(rename = "starttime", default)]
    pub first_seen_at: i64,
}

impl AccountRecord {
    pub fn new(account_id: AccountId, nickname: impl Into<String>, first_seen_at: i64) -> Self {
        Self {
            account_id,
            nickname: nickname.into(),
            first_seen_at,
        }
    }
}
