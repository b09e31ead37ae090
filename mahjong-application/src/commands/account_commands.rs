use crate::{AppError, AppState};
use mahjong_domain::{AccountId, RecordAccountRequest, RecordAccountResponse};

pub async fn record_account(
    state: &AppState,
    account_id: AccountId,
    payload: RecordAccountRequest,
) -> Result<RecordAccountResponse, AppError> {
    if payload.nickname.trim().is_empty() {
        return Err(AppError::BadRequest("nickname is required".to_string()));
    }
    let created = state
        .directory
        .record_if_absent(account_id, &payload.nickname, payload.first_seen_at)
        .await?;
    Ok(RecordAccountResponse {
        account_id,
        created,
    })
}
