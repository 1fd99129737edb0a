//! Text translation endpoint

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::models::AUTO_SOURCE;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// Translation request
#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    /// Target language code
    pub target: String,
    /// Source language code; omission requests auto-detection
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    AUTO_SOURCE.to_string()
}

/// A completed translation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
    pub detected_language: String,
}

/// Text translation endpoint
pub async fn translate(
    state: web::Data<AppState>,
    request: web::Json<TranslateRequest>,
) -> Result<HttpResponse> {
    info!(
        source = %request.source,
        target = %request.target,
        "Translation request"
    );

    if request.text.trim().is_empty() {
        return Err(GatewayError::validation("Text must not be empty"));
    }
    if request.target.trim().is_empty() {
        return Err(GatewayError::validation("Target language must not be empty"));
    }

    let result = state
        .translation
        .translate(&request.text, &request.source, &request.target)
        .await?;

    Ok(HttpResponse::Ok().json(TranslateResponse {
        translated_text: result.text,
        detected_language: result.detected_language,
    }))
}
