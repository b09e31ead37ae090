use tracing::error;

use crate::{AppError, AppState};
use mahjong_domain::{
    AccountId, AccountIdsBatchResponse, AccountIdsResponse, NicknameBatchRequest,
    NicknameBatchResponse, NicknameQuery, NicknameResponse, NicknamesBatchRequest,
};

pub async fn get_nickname(
    state: &AppState,
    account_id: AccountId,
) -> Result<NicknameResponse, AppError> {
    let nickname = state.directory.lookup_nickname(account_id).await?;
    Ok(NicknameResponse {
        account_id,
        nickname,
    })
}

pub async fn get_nicknames(
    state: &AppState,
    request: NicknameBatchRequest,
) -> Result<NicknameBatchResponse, AppError> {
    check_batch_size(state, request.account_ids.len())?;
    let nicknames = state
        .directory
        .lookup_nicknames_batch(&request.account_ids)
        .await
        .map_err(|err| {
            error!("failed to fetch nicknames: {}", err);
            err
        })?;
    Ok(NicknameBatchResponse { nicknames })
}

pub async fn get_account_ids(
    state: &AppState,
    query: NicknameQuery,
) -> Result<AccountIdsResponse, AppError> {
    if query.nickname.trim().is_empty() {
        return Err(AppError::BadRequest("nickname is required".to_string()));
    }
    let account_ids = state
        .directory
        .lookup_account_ids_by_nickname(&query.nickname)
        .await?;
    Ok(AccountIdsResponse {
        nickname: query.nickname,
        account_ids,
    })
}

pub async fn get_account_ids_batch(
    state: &AppState,
    request: NicknamesBatchRequest,
) -> Result<AccountIdsBatchResponse, AppError> {
    check_batch_size(state, request.nicknames.len())?;
    if request.nicknames.iter().any(|name| name.trim().is_empty()) {
        return Err(AppError::BadRequest("nicknames must not be empty".to_string()));
    }
    let accounts = state
        .directory
        .lookup_multi_by_nicknames(&request.nicknames)
        .await
        .map_err(|err| {
            error!("failed to fetch accounts by nickname: {}", err);
            err
        })?;
    Ok(AccountIdsBatchResponse { accounts })
}

fn check_batch_size(state: &AppState, len: usize) -> Result<(), AppError> {
    if len > state.config.max_batch_size {
        return Err(AppError::BadRequest(format!(
            "batch of {} exceeds limit {}",
            len, state.config.max_batch_size
        )));
    }
    Ok(())
}
