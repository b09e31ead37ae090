use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use mahjong_application::queries::{gateway_queries, replay_queries};
use mahjong_application::AppState;
use mahjong_domain::ReplayHeadQuery;

use crate::error::HttpError;
use crate::middleware::authorize;

/// Gateway replies go out verbatim with 200; callers check for `err`.
pub async fn get_replay_head(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
    Query(query): Query<ReplayHeadQuery>,
) -> Result<Json<Value>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reply = replay_queries::get_replay_head(&state, &uuid, query).await?;
    Ok(Json(reply.into_body()))
}

pub async fn get_replay(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Result<Json<Value>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reply = gateway_queries::get_replay(&state, &uuid).await?;
    Ok(Json(reply.into_body()))
}

pub async fn get_ob_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Result<Json<Value>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reply = gateway_queries::get_ob_token(&state, &uuid).await?;
    Ok(Json(reply.into_body()))
}
