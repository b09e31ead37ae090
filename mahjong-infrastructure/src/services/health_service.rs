use std::sync::Arc;

use async_trait::async_trait;
use mahjong_domain::ports::{GatewayClient, HealthCheckService};
use mahjong_domain::AccountRepository;

pub struct DefaultHealthService {
    account_repo: Arc<dyn AccountRepository>,
    gateway: Arc<dyn GatewayClient>,
}

impl DefaultHealthService {
    pub fn new(account_repo: Arc<dyn AccountRepository>, gateway: Arc<dyn GatewayClient>) -> Self {
        Self {
            account_repo,
            gateway,
        }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_database(&self) -> anyhow::Result<bool> {
        self.account_repo.ping().await.map(|_| true)
    }

    async fn check_gateway(&self) -> anyhow::Result<bool> {
        self.gateway.ping().await.map(|_| true)
    }
}
