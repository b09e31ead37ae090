use std::sync::Arc;

use tracing::{debug, warn};

use mahjong_domain::ports::{GatewayClient, ReplayRepository};
use mahjong_domain::{GatewayReply, ReplayRecord};

use crate::{AppError, Metrics};

/// Write-through cache of replay heads. Finished matches never change, so
/// entries are kept forever; failed gateway replies are never stored.
#[derive(Clone)]
pub struct ReplayHeadCache {
    repo: Arc<dyn ReplayRepository>,
    gateway: Arc<dyn GatewayClient>,
    metrics: Arc<Metrics>,
}

impl ReplayHeadCache {
    pub fn new(
        repo: Arc<dyn ReplayRepository>,
        gateway: Arc<dyn GatewayClient>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            repo,
            gateway,
            metrics,
        }
    }

    pub async fn get_replay_head(
        &self,
        uuid: &str,
        contest_hint: Option<&str>,
    ) -> Result<GatewayReply, AppError> {
        let cached = self.repo.find_replay(uuid).await.map_err(AppError::Store)?;
        if let Some(record) = cached {
            self.metrics.record_replay_head_hit();
            debug!(uuid, "replay head cache hit");
            return Ok(GatewayReply::Ok(record.payload));
        }

        self.metrics.record_replay_head_miss();
        let reply = self
            .gateway
            .fetch_replay_head(uuid)
            .await
            .map_err(AppError::Gateway)?;

        match &reply {
            GatewayReply::Ok(body) => match ReplayRecord::from_head(body.clone(), contest_hint) {
                Some(record) => self.spawn_store(record),
                None => warn!(uuid, "replay head reply carries no uuid, not cached"),
            },
            GatewayReply::Err(body) => {
                self.metrics.record_gateway_failure();
                debug!(uuid, reply = %body, "gateway refused replay head");
            }
        }
        Ok(reply)
    }

    fn spawn_store(&self, record: ReplayRecord) {
        let repo = self.repo.clone();
        let metrics = self.metrics.clone();
        tokio::spawn(async move {
            if let Err(err) = repo.create_replay(&record).await {
                metrics.record_cache_write_error();
                warn!("failed to cache replay head {}: {}", record.uuid, err);
            }
        });
    }
}
