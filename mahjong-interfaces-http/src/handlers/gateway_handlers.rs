use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;

use mahjong_application::queries::gateway_queries;
use mahjong_application::AppState;
use mahjong_domain::ExecuteRequest;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_contest(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(fid): Path<String>,
) -> Result<Json<Value>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reply = gateway_queries::get_contest(&state, &fid).await?;
    Ok(Json(reply.into_body()))
}

pub async fn get_live_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(fid): Path<String>,
) -> Result<Json<Value>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reply = gateway_queries::get_live_list(&state, &fid).await?;
    Ok(Json(reply.into_body()))
}

pub async fn execute(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ExecuteRequest>,
) -> Result<Json<Value>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let reply = gateway_queries::execute(&state, payload).await?;
    Ok(Json(reply.into_body()))
}
