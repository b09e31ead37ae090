use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use mahjong_application::{
    AccountDirectory, AppState, GatewayPassthrough, Metrics, ReplayHeadCache,
};
use mahjong_domain::{
    AccountRepository, GatewayClient, ReplayRepository, RuntimeConfig, StorageBackend,
};
use mahjong_infrastructure::{
    AppConfig, DefaultHealthService, HttpGatewayClient, MemoryRepo, MongoRepo,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let (account_repo, replay_repo) = match db_config.backend {
            StorageBackend::MongoDb => {
                let repo = Arc::new(MongoRepo::connect(&db_config).await?);
                let accounts: Arc<dyn AccountRepository> = repo.clone();
                let replays: Arc<dyn ReplayRepository> = repo;
                (accounts, replays)
            }
            StorageBackend::Memory => {
                warn!("using in-memory storage, data is lost on restart");
                let repo = Arc::new(MemoryRepo::new());
                let accounts: Arc<dyn AccountRepository> = repo.clone();
                let replays: Arc<dyn ReplayRepository> = repo;
                (accounts, replays)
            }
        };
        account_repo.ensure_schema().await?;
        info!(backend = db_config.backend.as_str(), "storage ready");

        let gateway: Arc<dyn GatewayClient> =
            Arc::new(HttpGatewayClient::new(&config.to_gateway_config())?);

        let state = build_state(runtime_config, account_repo, replay_repo, gateway);
        Ok(Self { state })
    }
}

/// Wires services in dependency order: store, directory, gateway, replay cache.
pub fn build_state(
    config: RuntimeConfig,
    account_repo: Arc<dyn AccountRepository>,
    replay_repo: Arc<dyn ReplayRepository>,
    gateway: Arc<dyn GatewayClient>,
) -> AppState {
    let metrics = Arc::new(Metrics::default());
    let directory = AccountDirectory::new(account_repo.clone(), metrics.clone());
    let passthrough = GatewayPassthrough::new(gateway.clone(), metrics.clone());
    let replays = ReplayHeadCache::new(replay_repo, gateway.clone(), metrics.clone());
    let health = Arc::new(DefaultHealthService::new(account_repo, gateway));

    AppState {
        config,
        directory,
        replays,
        gateway: passthrough,
        health,
        metrics,
    }
}
