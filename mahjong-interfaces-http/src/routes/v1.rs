use axum::routing::{get, post, put};
use axum::Router;

use mahjong_application::AppState;

use crate::handlers::{
    account_handlers, gateway_handlers, identity_handlers, ops_handlers, replay_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/identity/zone/:account_id",
            get(identity_handlers::get_zone),
        )
        .route(
            "/v1/identity/decode/:raw",
            get(identity_handlers::decode_account),
        )
        .route(
            "/v1/accounts/nicknames",
            post(account_handlers::get_nicknames),
        )
        .route(
            "/v1/accounts/by-nickname",
            get(account_handlers::get_account_ids),
        )
        .route(
            "/v1/accounts/by-nicknames",
            post(account_handlers::get_account_ids_batch),
        )
        .route(
            "/v1/accounts/:account_id",
            put(account_handlers::record_account),
        )
        .route(
            "/v1/accounts/:account_id/nickname",
            get(account_handlers::get_nickname),
        )
        .route(
            "/v1/replays/:uuid",
            get(replay_handlers::get_replay),
        )
        .route(
            "/v1/replays/:uuid/head",
            get(replay_handlers::get_replay_head),
        )
        .route(
            "/v1/replays/:uuid/ob-token",
            get(replay_handlers::get_ob_token),
        )
        .route(
            "/v1/contests/:fid",
            get(gateway_handlers::get_contest),
        )
        .route(
            "/v1/contests/:fid/live-list",
            get(gateway_handlers::get_live_list),
        )
        .route(
            "/v1/gateway/execute",
            post(gateway_handlers::execute),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
