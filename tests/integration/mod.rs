//! Integration tests for echocode-gateway
//!
//! These tests verify the interaction between multiple components:
//! route handlers run over the full actix service with scripted engines,
//! and the upstream clients run against local wiremock servers.

pub mod gemini_client_tests;
pub mod speech_client_tests;
pub mod transcribe_route_tests;
