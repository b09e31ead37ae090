use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use mahjong_infrastructure::AppConfig;

const LOG_FILE_PREFIX: &str = "mahjong-backend.log";

/// Installs the global subscriber. `RUST_LOG` wins over `log_level`; with
/// `log_dir` set, output goes to a daily rolling file instead of stdout.
/// Keep the returned guard alive until shutdown so buffered lines are flushed.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (writer, guard) = match &config.log_dir {
        Some(dir) => tracing_appender::non_blocking(tracing_appender::rolling::daily(
            dir,
            LOG_FILE_PREFIX,
        )),
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.log_dir.is_none())
        .with_writer(writer);
    let installed = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))?;
    Ok(guard)
}
