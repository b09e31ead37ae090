use crate::value_objects::{AccountId, Zone};

const RAW_ID_OFFSET: i64 = 10_000_000;
const LOW_BITS_MASK: u32 = 0x3FF_FFFF;
const ROUND_MASK: u32 = 0x1_FFFF;
const ROUNDS: usize = 5;
const XOR_KEY: u32 = 6_139_246;

pub fn classify_zone(account_id: AccountId) -> Zone {
    Zone::from_account_id(account_id)
}

/// Recovers the real account id from the obfuscated value the game client
/// sends over the wire. Anything that does not fit the client's 32-bit word
/// after removing the offset decodes to `0`.
pub fn decode_account_id(raw: i64) -> AccountId {
    let Some(e) = raw.checked_sub(RAW_ID_OFFSET) else {
        return 0;
    };
    if e <= 0 {
        return 0;
    }
    let Ok(e) = u32::try_from(e) else {
        return 0;
    };

    let mut t = e & LOW_BITS_MASK;
    for _ in 0..ROUNDS {
        t = ((t & ROUND_MASK) << 9) | (t >> 17);
    }

    AccountId::from((e & !LOW_BITS_MASK) ^ t ^ XOR_KEY)
}
