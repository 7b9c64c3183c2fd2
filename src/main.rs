use std::path::PathBuf;

use anyhow::Result;
use tenki::{TenkiConfig, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = TenkiConfig::load_from_path(config_path)?;

    telemetry::init(&config.logging)?;
    tracing::info!(
        version = tenki::VERSION,
        host = %config.server.host,
        port = config.server.port,
        default_city = %config.display.default_city,
        "Configuration loaded"
    );

    web::run(config).await
}
