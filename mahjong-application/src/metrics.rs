use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    replay_head_hits: AtomicU64,
    replay_head_misses: AtomicU64,
    gateway_failures: AtomicU64,
    cache_write_errors: AtomicU64,
    accounts_created: AtomicU64,
}

impl Metrics {
    pub fn record_replay_head_hit(&self) {
        self.replay_head_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_replay_head_miss(&self) {
        self.replay_head_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_gateway_failure(&self) {
        self.gateway_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_write_error(&self) {
        self.cache_write_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_account_created(&self) {
        self.accounts_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn replay_head_hits(&self) -> u64 {
        self.replay_head_hits.load(Ordering::Relaxed)
    }

    pub fn replay_head_misses(&self) -> u64 {
        self.replay_head_misses.load(Ordering::Relaxed)
    }

    pub fn cache_write_errors(&self) -> u64 {
        self.cache_write_errors.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let hits = self.replay_head_hits.load(Ordering::Relaxed);
        let misses = self.replay_head_misses.load(Ordering::Relaxed);
        let failures = self.gateway_failures.load(Ordering::Relaxed);
        let write_errors = self.cache_write_errors.load(Ordering::Relaxed);
        let created = self.accounts_created.load(Ordering::Relaxed);

        format!(
            "# TYPE mahjong_replay_head_cache_hits_total counter\n\
mahjong_replay_head_cache_hits_total {}\n\
# TYPE mahjong_replay_head_cache_misses_total counter\n\
mahjong_replay_head_cache_misses_total {}\n\
# TYPE mahjong_gateway_failures_total counter\n\
mahjong_gateway_failures_total {}\n\
# TYPE mahjong_replay_cache_write_errors_total counter\n\
mahjong_replay_cache_write_errors_total {}\n\
# TYPE mahjong_accounts_created_total counter\n\
mahjong_accounts_created_total {}\n",
            hits, misses, failures, write_errors, created
        )
    }
}
