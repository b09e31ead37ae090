use crate::queries::replay_queries::normalize_uuid;
use crate::{AppError, AppState};
use mahjong_domain::{ExecuteRequest, GatewayReply};

pub async fn get_replay(state: &AppState, uuid: &str) -> Result<GatewayReply, AppError> {
    state.gateway.get_replay(normalize_uuid(uuid)?).await
}

pub async fn get_ob_token(state: &AppState, uuid: &str) -> Result<GatewayReply, AppError> {
    state.gateway.get_ob_token(normalize_uuid(uuid)?).await
}

pub async fn get_live_list(state: &AppState, fid: &str) -> Result<GatewayReply, AppError> {
    state.gateway.get_live_list(normalize_fid(fid)?).await
}

pub async fn get_contest(state: &AppState, fid: &str) -> Result<GatewayReply, AppError> {
    state.gateway.get_contest(normalize_fid(fid)?).await
}

pub async fn execute(state: &AppState, request: ExecuteRequest) -> Result<GatewayReply, AppError> {
    let func = request.func.trim();
    if func.is_empty() {
        return Err(AppError::BadRequest("func is required".to_string()));
    }
    state.gateway.execute(func, &request.data).await
}

fn normalize_fid(value: &str) -> Result<&str, AppError> {
    let fid = value.trim();
    if fid.is_empty() {
        return Err(AppError::BadRequest("contest id must not be empty".to_string()));
    }
    Ok(fid)
}
