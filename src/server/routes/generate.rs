//! Code generation endpoint

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::server::state::AppState;

/// Code generation request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// The user's spoken programming request, already transcribed
    pub query: String,
}

/// A generated snippet with its spoken explanation
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub explanation: String,
    pub code: String,
    pub language: String,
}

/// Code generation endpoint
///
/// Always answers HTTP 200. The voice client reads this response aloud
/// and cannot branch on status codes mid-conversation, so failures come
/// back as `{"error": ...}` in the same envelope and get spoken too.
pub async fn generate(
    state: web::Data<AppState>,
    request: web::Json<GenerateRequest>,
) -> HttpResponse {
    info!(query_chars = request.query.len(), "Generation request");

    match state.generation.generate(&request.query).await {
        Ok(reply) => HttpResponse::Ok().json(GenerateResponse {
            explanation: reply.explanation,
            code: reply.code,
            language: reply.language,
        }),
        Err(e) => {
            error!(error = %e, "Generation failed");
            HttpResponse::Ok().json(json!({ "error": e.to_string() }))
        }
    }
}
