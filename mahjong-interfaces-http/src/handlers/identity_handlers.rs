use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;

use mahjong_application::queries::identity_queries;
use mahjong_application::AppState;
use mahjong_domain::{AccountId, DecodeResponse, ZoneResponse};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_zone(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(account_id): Path<AccountId>,
) -> Result<Json<ZoneResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(identity_queries::zone_of(account_id)))
}

pub async fn decode_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(raw): Path<i64>,
) -> Result<Json<DecodeResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(identity_queries::decode(raw)))
}
