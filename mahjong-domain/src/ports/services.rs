use async_trait::async_trait;
use serde_json::Value;

use crate::entities::{GatewayReply, ReadinessReport};

/// Remote gateway in front of the game backend. Every call is a GET with
/// query parameters; the reply body decides success.
#[async_trait]
pub trait GatewayClient: Send + Sync {
    async fn fetch_replay_head(&self, uuid: &str) -> anyhow::Result<GatewayReply>;
    async fn fetch_replay(&self, uuid: &str) -> anyhow::Result<GatewayReply>;
    async fn fetch_ob_token(&self, uuid: &str) -> anyhow::Result<GatewayReply>;
    async fn fetch_live_list(&self, fid: &str) -> anyhow::Result<GatewayReply>;
    async fn fetch_contest(&self, fid: &str) -> anyhow::Result<GatewayReply>;
    async fn execute(&self, func: &str, data: &Value) -> anyhow::Result<GatewayReply>;
    async fn ping(&self) -> anyhow::Result<()>;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_database(&self) -> anyhow::Result<bool>;
    async fn check_gateway(&self) -> anyhow::Result<bool>;

    async fn readiness(&self) -> ReadinessReport {
        ReadinessReport {
            database: self.check_database().await.unwrap_or(false),
            gateway: self.check_gateway().await.unwrap_or(false),
        }
    }
}
