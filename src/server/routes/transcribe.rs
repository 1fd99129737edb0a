//! Audio transcription endpoint

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::StreamExt;
use serde::Serialize;
use tracing::{debug, info};

use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// A transcribed utterance
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
    /// Primary language subtag of the locale that matched
    pub language: String,
}

/// Audio transcription endpoint
///
/// Accepts multipart/form-data with the clip in a `file` field. The clip
/// is probed against the configured locales; 400 means the client can
/// fix something (bad upload, unrecognizable speech), 5xx means the
/// recognition upstream failed.
pub async fn transcribe(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    info!("Transcription request");

    let max_bytes = state.config.speech().max_upload_bytes;
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| GatewayError::validation(format!("Invalid multipart data: {}", e)))?;

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if field_name == "file" {
            if let Some(cd) = field.content_disposition() {
                if let Some(filename) = cd.get_filename() {
                    debug!(filename, "Receiving audio upload");
                }
            }

            let mut data = Vec::new();
            while let Some(chunk) = field.next().await {
                let bytes = chunk.map_err(|e| {
                    GatewayError::validation(format!("Error reading file upload: {}", e))
                })?;
                if data.len() + bytes.len() > max_bytes {
                    return Err(GatewayError::validation(format!(
                        "Audio upload exceeds the {} byte limit",
                        max_bytes
                    )));
                }
                data.extend_from_slice(&bytes);
            }
            file_data = Some(data);
        } else {
            // Skip unknown fields
            while field.next().await.is_some() {}
        }
    }

    let file = match file_data {
        Some(data) if !data.is_empty() => data,
        _ => return Err(GatewayError::validation("No audio file provided")),
    };

    let result = state.transcription.transcribe(&file).await?;

    Ok(HttpResponse::Ok().json(TranscribeResponse {
        text: result.text,
        language: result.language,
    }))
}
