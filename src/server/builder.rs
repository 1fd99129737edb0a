//! Server startup with automatic configuration loading

use tracing::{info, warn};

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;

/// Environment variable naming the configuration file
const CONFIG_PATH_VAR: &str = "GATEWAY_CONFIG";

/// Default configuration file path
const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("🚀 Starting EchoCode Gateway");

    let config_path =
        std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    info!("📄 Loading configuration file: {}", config_path);

    let mut config = match Config::from_file(&config_path).await {
        Ok(config) => {
            info!("✅ Configuration file loaded");
            config
        }
        Err(e) => {
            warn!("⚠️  Configuration file loading failed, using defaults: {}", e);
            Config::default()
        }
    };

    config.apply_env_overrides();
    config.validate()?;

    let server = HttpServer::new(&config)?;

    info!("🌐 Server starting at: http://{}", config.server().address());
    info!("📋 API endpoints:");
    info!("   GET  /health         - Health check");
    info!("   GET  /version        - Build information");
    info!("   POST /api/generate   - Spoken request to explained code");
    info!("   POST /api/stt        - Audio upload to text");
    info!("   POST /api/translate  - Text translation");

    server.start().await
}
