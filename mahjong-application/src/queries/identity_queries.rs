use mahjong_domain::{classify_zone, decode_account_id, AccountId, DecodeResponse, ZoneResponse};

pub fn zone_of(account_id: AccountId) -> ZoneResponse {
    let zone = classify_zone(account_id);
    ZoneResponse {
        account_id,
        zone: zone.to_string(),
        symbol: zone.symbol().to_string(),
    }
}

pub fn decode(raw: i64) -> DecodeResponse {
    let account_id = decode_account_id(raw);
    DecodeResponse {
        raw,
        account_id,
        zone: classify_zone(account_id).to_string(),
    }
}
