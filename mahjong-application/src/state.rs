use std::sync::Arc;

use mahjong_domain::ports::HealthCheckService;
use mahjong_domain::RuntimeConfig;

use crate::services::{AccountDirectory, GatewayPassthrough, ReplayHeadCache};
use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub directory: AccountDirectory,
    pub replays: ReplayHeadCache,
    pub gateway: GatewayPassthrough,
    pub health: Arc<dyn HealthCheckService>,
    pub metrics: Arc<Metrics>,
}
