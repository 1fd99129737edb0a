//! Health check and version endpoints

use actix_web::HttpResponse;
use serde_json::json;
use std::borrow::Cow;
use tracing::debug;

/// Basic health check endpoint
///
/// Used by load balancers and uptime monitors; carries no upstream
/// state, a live process is a healthy one.
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Version information endpoint
pub async fn version_info() -> HttpResponse {
    debug!("Version info requested");

    let version_info = VersionInfo {
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        rust_version: Cow::Borrowed(env!("RUST_VERSION")),
    };

    HttpResponse::Ok().json(version_info)
}

/// Version and build information
#[derive(Debug, Clone, serde::Serialize)]
struct VersionInfo {
    version: Cow<'static, str>,
    build_time: Cow<'static, str>,
    git_hash: Cow<'static, str>,
    rust_version: Cow<'static, str>,
}
