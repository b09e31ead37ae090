use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tokio::time::{timeout, Duration};
use tracing::error;

use mahjong_application::AppState;
use mahjong_domain::ReadinessReport;

use crate::middleware::authorize;

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);
    let report = match timeout(timeout_duration, state.health.readiness()).await {
        Ok(report) => report,
        Err(_) => {
            error!("ready check timeout after {}s", timeout_secs);
            ReadinessReport::default()
        }
    };
    if report.database && report.gateway {
        (StatusCode::OK, Json(report))
    } else {
        error!(
            database = report.database,
            gateway = report.gateway,
            "ready check failed"
        );
        (StatusCode::SERVICE_UNAVAILABLE, Json(report))
    }
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorize(&state.config, &headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized".to_string()).into_response();
    }
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
