use crate::{AppError, AppState};
use mahjong_domain::{GatewayReply, ReplayHeadQuery};

pub async fn get_replay_head(
    state: &AppState,
    uuid: &str,
    query: ReplayHeadQuery,
) -> Result<GatewayReply, AppError> {
    let uuid = normalize_uuid(uuid)?;
    state
        .replays
        .get_replay_head(uuid, query.contest_id.as_deref())
        .await
}

pub(crate) fn normalize_uuid(value: &str) -> Result<&str, AppError> {
    let uuid = value.trim();
    if uuid.is_empty() {
        return Err(AppError::BadRequest("uuid must not be empty".to_string()));
    }
    Ok(uuid)
}
