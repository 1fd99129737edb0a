//! Upstream engine clients
//!
//! Each provider wraps one external service behind a small client:
//! Gemini for code generation, the speech API for recognition, and the
//! translation API. Clients receive their configuration at construction
//! and never read global state.

pub mod gemini;
pub mod speech;
pub mod translate;

use thiserror::Error;

/// Errors surfaced by upstream engine clients
///
/// Every variant names the service it came from so handler logs stay
/// attributable when several upstreams are in play.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Network-level failure before a response was received
    #[error("{service} request failed: {message}")]
    Request {
        service: &'static str,
        message: String,
    },

    /// Upstream answered with a non-success status
    #[error("{service} returned HTTP {status}: {body}")]
    Http {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Upstream body was not the JSON the client expected
    #[error("{service} did not return JSON (status {status}): {body}")]
    InvalidBody {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// The call exceeded its configured deadline
    #[error("{service} request timed out after {seconds}s")]
    Timeout { service: &'static str, seconds: u64 },

    /// A well-formed response that carries nothing usable
    #[error("{service} returned no usable candidates: {detail}")]
    NoCandidates {
        service: &'static str,
        detail: String,
    },
}

impl EngineError {
    pub fn request<S: Into<String>>(service: &'static str, message: S) -> Self {
        Self::Request {
            service,
            message: message.into(),
        }
    }

    pub fn http<S: Into<String>>(service: &'static str, status: u16, body: S) -> Self {
        Self::Http {
            service,
            status,
            body: body.into(),
        }
    }

    pub fn invalid_body<S: Into<String>>(service: &'static str, status: u16, body: S) -> Self {
        Self::InvalidBody {
            service,
            status,
            body: body.into(),
        }
    }

    pub fn timeout(service: &'static str, seconds: u64) -> Self {
        Self::Timeout { service, seconds }
    }

    pub fn no_candidates<S: Into<String>>(service: &'static str, detail: S) -> Self {
        Self::NoCandidates {
            service,
            detail: detail.into(),
        }
    }
}
