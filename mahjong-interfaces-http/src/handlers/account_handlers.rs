use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;

use mahjong_application::commands::account_commands;
use mahjong_application::queries::account_queries;
use mahjong_application::AppState;
use mahjong_domain::{
    AccountId, AccountIdsBatchResponse, AccountIdsResponse, NicknameBatchRequest,
    NicknameBatchResponse, NicknameQuery, NicknameResponse, NicknamesBatchRequest,
    RecordAccountRequest, RecordAccountResponse,
};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_nickname(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(account_id): Path<AccountId>,
) -> Result<Json<NicknameResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = account_queries::get_nickname(&state, account_id).await?;
    Ok(Json(response))
}

pub async fn get_nicknames(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NicknameBatchRequest>,
) -> Result<Json<NicknameBatchResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = account_queries::get_nicknames(&state, payload).await?;
    Ok(Json(response))
}

pub async fn get_account_ids(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<NicknameQuery>,
) -> Result<Json<AccountIdsResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = account_queries::get_account_ids(&state, query).await?;
    Ok(Json(response))
}

pub async fn get_account_ids_batch(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NicknamesBatchRequest>,
) -> Result<Json<AccountIdsBatchResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = account_queries::get_account_ids_batch(&state, payload).await?;
    Ok(Json(response))
}

pub async fn record_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(account_id): Path<AccountId>,
    Json(payload): Json<RecordAccountRequest>,
) -> Result<Json<RecordAccountResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = account_commands::record_account(&state, account_id, payload).await?;
    Ok(Json(response))
}
