use anyhow::Result;
use clap::Parser;

use mahjong_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "mahjong-backend")]
#[command(about = "Mahjong account directory and replay cache server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = match args.config {
        Some(path) => AppConfig::load_from(&path).await?,
        None => AppConfig::load().await?,
    };
    let _log_guard = mahjong_bootstrap::logging::init_logging(&config)?;

    mahjong_bootstrap::run_standalone(config).await
}
