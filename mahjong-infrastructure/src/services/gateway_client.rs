use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use mahjong_domain::ports::GatewayClient;
use mahjong_domain::{GatewayConfig, GatewayReply};

const FETCH_CONTEST_FUNC: &str = "fetchCustomizedContestByContestId";

/// Talks to the game gateway over plain HTTP GET. Status codes are ignored;
/// the JSON body alone decides success.
#[derive(Clone)]
pub struct HttpGatewayClient {
    client: Client,
    base_uri: String,
}

impl HttpGatewayClient {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()?;
        Ok(Self {
            client,
            base_uri: config.gateway_uri.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<GatewayReply> {
        let url = format!("{}{}", self.base_uri, path);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("gateway request {} failed", path))?;
        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .map_err(|err| anyhow!("gateway {} returned non-JSON body ({}): {}", path, status, err))?;
        debug!(path, %status, "gateway reply");
        Ok(GatewayReply::from_body(body))
    }
}

#[async_trait]
impl GatewayClient for HttpGatewayClient {
    async fn fetch_replay_head(&self, uuid: &str) -> Result<GatewayReply> {
        self.get("/paipu_head", &[("uuid", uuid)]).await
    }

    async fn fetch_replay(&self, uuid: &str) -> Result<GatewayReply> {
        self.get("/paipu", &[("uuid", uuid)]).await
    }

    async fn fetch_ob_token(&self, uuid: &str) -> Result<GatewayReply> {
        self.get("/token", &[("uuid", uuid)]).await
    }

    async fn fetch_live_list(&self, fid: &str) -> Result<GatewayReply> {
        self.get("/livelist", &[("id", fid)]).await
    }

    async fn fetch_contest(&self, fid: &str) -> Result<GatewayReply> {
        let data = json!({ "contest_id": fid }).to_string();
        self.get("/execute", &[("func", FETCH_CONTEST_FUNC), ("data", data.as_str())])
            .await
    }

    async fn execute(&self, func: &str, data: &Value) -> Result<GatewayReply> {
        let data = data.to_string();
        self.get("/execute", &[("func", func), ("data", data.as_str())]).await
    }

    /// Any HTTP response counts as reachable.
    async fn ping(&self) -> Result<()> {
        self.client
            .get(&self.base_uri)
            .send()
            .await
            .context("gateway unreachable")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Query, State};
    use axum::http::{StatusCode, Uri};
    use axum::response::IntoResponse;
    use axum::Router;

    type Seen = Arc<Mutex<Vec<(String, HashMap<String, String>)>>>;

    async fn record(
        State(seen): State<Seen>,
        uri: Uri,
        Query(params): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        let path = uri.path().to_string();
        seen.lock().expect("lock").push((path.clone(), params.clone()));
        match path.as_str() {
            "/paipu_head" => (
                StatusCode::OK,
                axum::Json(json!({"uuid": params.get("uuid"), "end_time": 1})),
            )
                .into_response(),
            "/token" => (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({"err": true, "message": "not live"})),
            )
                .into_response(),
            "/paipu" => (StatusCode::OK, "<html>oops</html>").into_response(),
            _ => (StatusCode::OK, axum::Json(json!({"ok": path}))).into_response(),
        }
    }

    async fn fake_gateway() -> (String, Seen) {
        let seen: Seen = Arc::default();
        let app = Router::new().fallback(record).with_state(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        (format!("http://{}", addr), seen)
    }

    fn client(base: &str) -> HttpGatewayClient {
        HttpGatewayClient::new(&GatewayConfig {
            gateway_uri: format!("{}/", base),
            timeout_seconds: 5,
        })
        .expect("client")
    }

    #[tokio::test]
    async fn replay_head_sends_uuid() {
        let (base, seen) = fake_gateway().await;
        let reply = client(&base)
            .fetch_replay_head("231014-abc")
            .await
            .expect("reply");
        assert_eq!(reply, GatewayReply::Ok(json!({"uuid": "231014-abc", "end_time": 1})));

        let calls = seen.lock().expect("lock");
        assert_eq!(calls[0].0, "/paipu_head");
        assert_eq!(calls[0].1.get("uuid").map(String::as_str), Some("231014-abc"));
    }

    #[tokio::test]
    async fn contest_and_execute_string_encode_data() {
        let (base, seen) = fake_gateway().await;
        let gateway = client(&base);
        gateway.fetch_contest("917120").await.expect("contest");
        gateway
            .execute("fetchContestGameRecords", &json!({"unique_id": 5, "limit": 10}))
            .await
            .expect("execute");
        gateway.fetch_live_list("fid-9").await.expect("livelist");

        let calls = seen.lock().expect("lock");
        assert_eq!(calls[0].0, "/execute");
        assert_eq!(
            calls[0].1.get("func").map(String::as_str),
            Some("fetchCustomizedContestByContestId")
        );
        assert_eq!(
            calls[0].1.get("data").map(String::as_str),
            Some(r#"{"contest_id":"917120"}"#)
        );
        let data: Value =
            serde_json::from_str(calls[1].1.get("data").expect("data")).expect("json data");
        assert_eq!(data, json!({"unique_id": 5, "limit": 10}));
        assert_eq!(calls[2].0, "/livelist");
        assert_eq!(calls[2].1.get("id").map(String::as_str), Some("fid-9"));
    }

    #[tokio::test]
    async fn err_body_is_a_failure_reply_regardless_of_status() {
        let (base, _) = fake_gateway().await;
        let reply = client(&base).fetch_ob_token("u").await.expect("reply");
        assert_eq!(
            reply,
            GatewayReply::Err(json!({"err": true, "message": "not live"}))
        );
    }

    #[tokio::test]
    async fn non_json_body_is_a_transport_error() {
        let (base, _) = fake_gateway().await;
        assert!(client(&base).fetch_replay("u").await.is_err());
    }

    #[tokio::test]
    async fn unreachable_gateway_fails() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);
        let gateway = client(&format!("http://{}", addr));
        assert!(gateway.ping().await.is_err());
        assert!(gateway.fetch_replay_head("u").await.is_err());
    }

    #[tokio::test]
    async fn ping_accepts_any_response() {
        let (base, _) = fake_gateway().await;
        client(&base).ping().await.expect("reachable");
    }
}
