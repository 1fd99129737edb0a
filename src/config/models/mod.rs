//! Configuration data models
//!
//! This module defines all configuration structures used throughout the gateway.

pub mod gateway;
pub mod generation;
pub mod server;
pub mod speech;
pub mod translation;

// Re-export all configuration types
pub use gateway::*;
pub use generation::*;
pub use server::*;
pub use speech::*;
pub use translation::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default connect timeout in seconds
pub fn default_connect_timeout() -> u64 {
    10
}

pub(crate) fn default_true() -> bool {
    true
}
