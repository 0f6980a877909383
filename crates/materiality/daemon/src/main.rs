//! Materiality Daemon - REST service for materiality assessments
//!
//! The daemon provides:
//! - `POST /api/v1/assess` to classify a company profile
//! - `GET /api/v1/catalog` listing accepted profile values
//! - `GET /api/v1/health` for liveness checks

use clap::Parser;
use materiality_daemon::error::{DaemonError, DaemonResult};
use materiality_daemon::{logging, DaemonConfig, Server};
use materiality_types::ScoringPolicy;

/// Materiality Daemon CLI
#[derive(Parser)]
#[command(name = "materialityd")]
#[command(about = "Materiality Daemon - REST service for ESG materiality assessments", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "MATERIALITY_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "MATERIALITY_LISTEN_ADDR")]
    listen: Option<String>,

    /// Scoring policy (percentage, five-point)
    #[arg(short, long, env = "MATERIALITY_POLICY")]
    policy: Option<String>,

    /// Log level
    #[arg(long, env = "MATERIALITY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "MATERIALITY_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = DaemonConfig::load(cli.config.as_deref())?;

    // Override with CLI args
    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen
            .parse()
            .map_err(|e| DaemonError::Config(format!("Invalid listen address: {}", e)))?;
    }

    if let Some(policy) = cli.policy {
        config.scoring.policy = policy
            .parse::<ScoringPolicy>()
            .map_err(|e| DaemonError::Config(e.to_string()))?;
    }

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.logging.json |= cli.json;

    logging::init(&config.logging.level, config.logging.json);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        policy = %config.scoring.policy,
        "Starting materiality daemon"
    );

    Server::new(config).run().await
}
