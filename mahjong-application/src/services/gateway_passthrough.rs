use std::sync::Arc;

use serde_json::Value;

use mahjong_domain::ports::GatewayClient;
use mahjong_domain::GatewayReply;

use crate::{AppError, Metrics};

/// Uncached gateway operations. Replies are handed back as received.
#[derive(Clone)]
pub struct GatewayPassthrough {
    gateway: Arc<dyn GatewayClient>,
    metrics: Arc<Metrics>,
}

impl GatewayPassthrough {
    pub fn new(gateway: Arc<dyn GatewayClient>, metrics: Arc<Metrics>) -> Self {
        Self { gateway, metrics }
    }

    pub async fn get_replay(&self, uuid: &str) -> Result<GatewayReply, AppError> {
        self.observe(self.gateway.fetch_replay(uuid).await)
    }

    pub async fn get_ob_token(&self, uuid: &str) -> Result<GatewayReply, AppError> {
        self.observe(self.gateway.fetch_ob_token(uuid).await)
    }

    pub async fn get_live_list(&self, fid: &str) -> Result<GatewayReply, AppError> {
        self.observe(self.gateway.fetch_live_list(fid).await)
    }

    pub async fn get_contest(&self, fid: &str) -> Result<GatewayReply, AppError> {
        self.observe(self.gateway.fetch_contest(fid).await)
    }

    pub async fn execute(&self, func: &str, data: &Value) -> Result<GatewayReply, AppError> {
        self.observe(self.gateway.execute(func, data).await)
    }

    fn observe(&self, result: anyhow::Result<GatewayReply>) -> Result<GatewayReply, AppError> {
        let reply = result.map_err(AppError::Gateway)?;
        if !reply.is_ok() {
            self.metrics.record_gateway_failure();
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGateway;
    use serde_json::json;

    fn passthrough() -> (Arc<FakeGateway>, Arc<Metrics>, GatewayPassthrough) {
        let gateway = Arc::new(FakeGateway::default());
        let metrics = Arc::new(Metrics::default());
        let passthrough = GatewayPassthrough::new(gateway.clone(), metrics.clone());
        (gateway, metrics, passthrough)
    }

    #[tokio::test]
    async fn every_call_reaches_gateway() {
        let (gateway, _, passthrough) = passthrough();
        for _ in 0..2 {
            passthrough.get_replay("uuid-1").await.expect("replay");
        }
        passthrough.get_ob_token("uuid-1").await.expect("token");
        passthrough.get_live_list("fid-1").await.expect("livelist");
        assert_eq!(gateway.call_count("/paipu"), 2);
        assert_eq!(gateway.call_count("/token"), 1);
        assert_eq!(gateway.call_count("/livelist"), 1);
    }

    #[tokio::test]
    async fn contest_lookup_encodes_contest_id() {
        let (gateway, _, passthrough) = passthrough();
        passthrough.get_contest("917120").await.expect("contest");
        let (path, params) = gateway.last_call().expect("call");
        assert_eq!(path, "/execute");
        assert_eq!(
            params,
            vec![
                ("func".to_string(), "fetchCustomizedContestByContestId".to_string()),
                ("data".to_string(), r#"{"contest_id":"917120"}"#.to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn failure_reply_passes_through_unchanged() {
        let (gateway, metrics, passthrough) = passthrough();
        gateway.push_body(json!({"err": "no such function"}));
        let reply = passthrough
            .execute("fetchNothing", &json!({"a": 1}))
            .await
            .expect("reply");
        assert_eq!(reply, GatewayReply::Err(json!({"err": "no such function"})));
        assert!(metrics
            .render_prometheus()
            .contains("mahjong_gateway_failures_total 1\n"));
    }
}
