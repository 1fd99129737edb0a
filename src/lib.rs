//! # EchoCode Gateway
//!
//! Backend for EchoCode, a voice-first programming assistant. The
//! gateway is stateless: every request fans out to upstream engines and
//! the response is assembled on the way back.
//!
//! ## Endpoints
//!
//! - **POST /api/generate**: turn a transcribed spoken request into a
//!   short explanation plus a code snippet, via the Gemini API
//! - **POST /api/stt**: turn an audio upload into text by probing
//!   locales against the speech-recognition API, regional ones first
//! - **POST /api/translate**: translate text, retrying once with a
//!   forced source locale when auto-detection fails
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use echocode_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use server::AppState;
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// A ready-to-run gateway instance
pub struct Gateway {
    server: server::server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating gateway instance");
        let server = server::server::HttpServer::new(&config)?;
        Ok(Self { server })
    }

    /// Run the gateway server until it is shut down
    pub async fn run(self) -> Result<()> {
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
