//! Utility modules for the EchoCode gateway
//!
//! - **error**: Error handling and HTTP error mapping

pub mod error;

pub use error::{GatewayError, Result};

/// Truncate string to specified length with ellipsis
///
/// Used to keep upstream response bodies readable in log output.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
