//! Error handling for the gateway
//!
//! This module defines all error types used throughout the gateway.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::core::providers::EngineError;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uploaded audio could not be decoded
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// Speech matched no supported locale (distinct from upstream failures)
    #[error("Speech not recognized: {0}")]
    Unrecognized(String),

    /// Upstream service failures (network, non-2xx, malformed body)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Upstream call exceeded its deadline
    #[error("Upstream timeout: {0}")]
    Timeout(String),

    /// The generation model returned no candidates
    #[error("No valid response from model: {0}")]
    NoCandidates(String),

    /// Translation failed with the requested source
    #[error("Translation failed: {0}")]
    Translation(String),

    /// Translation failed after the forced-source retry
    #[error("Translation failed on fallback: {0}")]
    TranslationFallback(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for GatewayError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            GatewayError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            GatewayError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            GatewayError::InvalidAudio(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_AUDIO",
                self.to_string(),
            ),
            GatewayError::Unrecognized(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "SPEECH_UNRECOGNIZED",
                self.to_string(),
            ),
            GatewayError::Upstream(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                self.to_string(),
            ),
            GatewayError::Timeout(_) => (
                actix_web::http::StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                self.to_string(),
            ),
            GatewayError::NoCandidates(_) => (
                actix_web::http::StatusCode::BAD_GATEWAY,
                "NO_CANDIDATES",
                self.to_string(),
            ),
            GatewayError::Translation(_) | GatewayError::TranslationFallback(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "TRANSLATION_FAILED",
                self.to_string(),
            ),
            GatewayError::Internal(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

/// Helper functions for creating specific errors
impl GatewayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn invalid_audio<S: Into<String>>(message: S) -> Self {
        Self::InvalidAudio(message.into())
    }

    pub fn unrecognized() -> Self {
        Self::Unrecognized("audio was not recognized in any supported locale".to_string())
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl From<EngineError> for GatewayError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Timeout { .. } => GatewayError::Timeout(err.to_string()),
            EngineError::NoCandidates { .. } => GatewayError::NoCandidates(err.to_string()),
            EngineError::Request { .. }
            | EngineError::Http { .. }
            | EngineError::InvalidBody { .. } => GatewayError::Upstream(err.to_string()),
        }
    }
}
