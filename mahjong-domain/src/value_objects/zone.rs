// Zone value object

use serde::{Deserialize, Serialize};

use super::AccountId;

/// Server region implied by the high bits of an account id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Zone {
    CN,
    JP,
    EN,
    UNKNOWN,
}

impl Zone {
    pub fn from_account_id(account_id: AccountId) -> Self {
        Self::from_prefix(account_id >> 23)
    }

    pub fn from_prefix(prefix: i64) -> Self {
        match prefix {
            0..=6 => Zone::CN,
            7..=12 => Zone::JP,
            13..=15 => Zone::EN,
            _ => Zone::UNKNOWN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::CN => "CN",
            Zone::JP => "JP",
            Zone::EN => "EN",
            Zone::UNKNOWN => "UNKNOWN",
        }
    }

    /// Circled letter shown next to nicknames in chat output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Zone::CN => "Ⓒ",
            Zone::JP => "Ⓙ",
            Zone::EN => "Ⓔ",
            Zone::UNKNOWN => "Ⓝ",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
