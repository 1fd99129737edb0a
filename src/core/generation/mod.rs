//! Code generation
//!
//! Sends the user's spoken request to the model together with the
//! EchoCode reply template and parses whatever comes back into
//! explanation, code, and language fields.

mod parser;

pub use parser::{PLAINTEXT, ParsedReply, parse_reply};

use crate::config::models::GenerationConfig;
use crate::core::providers::gemini::GeminiClient;
use crate::utils::error::{GatewayError, Result};

/// Instruction sent with every generation request
///
/// The template it demands is what `parser` expects; keep the two in
/// sync when changing either.
pub const SYSTEM_PROMPT: &str = "\
You are EchoCode, a voice-first programming assistant. The user speaks a \
request and hears your explanation read aloud, so keep explanations short \
and in plain language.

Reply using exactly this template:

[EXPLANATION]
One or two short sentences describing the approach.

[CODE]
<language name alone on the first line, for example: python>
<the code>

Rules:
- The first line after [CODE] must contain only the language name, lowercase.
- Do not wrap the code in markdown fences.
- If the request needs no code, leave the [CODE] section empty.";

/// Turns spoken programming requests into explained code snippets
pub struct GenerationService {
    client: GeminiClient,
}

impl GenerationService {
    pub fn new(config: GenerationConfig) -> Result<Self> {
        let client = GeminiClient::new(config)?;
        Ok(Self { client })
    }

    /// Ask the model for code and parse the reply
    pub async fn generate(&self, query: &str) -> Result<ParsedReply> {
        if query.trim().is_empty() {
            return Err(GatewayError::validation("Query must not be empty"));
        }

        let raw = self.client.generate_content(SYSTEM_PROMPT, query).await?;
        tracing::debug!(reply_bytes = raw.len(), "Model reply received");
        Ok(parse_reply(&raw))
    }
}
