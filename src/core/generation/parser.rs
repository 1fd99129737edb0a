//! Model-reply parsing
//!
//! The generation prompt asks for an `[EXPLANATION]` section followed by
//! a `[CODE]` section with the language named on its first line. Models
//! comply only approximately, so parsing is built to degrade instead of
//! fail: the two markers are searched independently, fences are cleaned
//! up when they appear anyway, and a reply matching nothing at all comes
//! back verbatim as the explanation. `parse_reply` is total; there is no
//! input that makes it return an error or panic.

use once_cell::sync::Lazy;
use regex::Regex;

/// Language placeholder when no tag is detected
pub const PLAINTEXT: &str = "plaintext";

/// Language identifiers the EchoCode editor can highlight
const KNOWN_LANGUAGES: &[&str] = &[
    "python",
    "js",
    "javascript",
    "java",
    "c++",
    "c#",
    "go",
    "ruby",
    "php",
    "html",
    "css",
    "sql",
];

static EXPLANATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\[explanation\](.*?)(?:\[code\]|\z)").expect("Invalid explanation regex")
});

static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[code\](.*)\z").expect("Invalid code regex"));

/// A model reply split into its response fields
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReply {
    pub explanation: String,
    pub code: String,
    pub language: String,
}

/// Split a raw model reply into explanation, code, and language
pub fn parse_reply(raw: &str) -> ParsedReply {
    let explanation = EXPLANATION_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());
    let code_section = CODE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());

    let (mut explanation, code, language) = match (explanation, code_section) {
        (explanation, Some(section)) => {
            let (code, language) = split_code_section(&section);
            (explanation.unwrap_or_default(), code, language)
        }
        (Some(explanation), None) => (explanation, String::new(), PLAINTEXT.to_string()),
        (None, None) => fence_fallback(raw),
    };

    // Whatever happened above, the caller gets something readable back
    if explanation.is_empty() && code.is_empty() {
        explanation = raw.trim().to_string();
    }

    ParsedReply {
        explanation,
        code,
        language,
    }
}

/// Parse a reply that skipped the tags but used a markdown fence
fn fence_fallback(raw: &str) -> (String, String, String) {
    match raw.find("```") {
        Some(idx) => {
            let explanation = raw[..idx].trim().to_string();
            let (code, language) = split_code_section(&raw[idx..]);
            (explanation, code, language)
        }
        None => (raw.trim().to_string(), String::new(), PLAINTEXT.to_string()),
    }
}

/// Split a code section into body and language
///
/// The first line is a language tag candidate; it only counts when it
/// names a known language, otherwise it stays part of the code. Fences
/// around the body are stripped, and a recognized fence info string
/// ("```python") supplies the language when no bare tag line did.
fn split_code_section(section: &str) -> (String, String) {
    let section = section.trim();
    if section.is_empty() {
        return (String::new(), PLAINTEXT.to_string());
    }

    let mut language: Option<String> = None;
    let mut rest = section;
    match section.split_once('\n') {
        Some((first, tail)) => {
            if let Some(tag) = known_language(first) {
                language = Some(tag);
                rest = tail;
            }
        }
        None => {
            // The section is a single line; a bare tag means no code follows
            if let Some(tag) = known_language(section) {
                return (String::new(), tag);
            }
        }
    }

    let (body, fence_language) = strip_fences(rest);
    let language = language
        .or(fence_language)
        .unwrap_or_else(|| PLAINTEXT.to_string());
    (body, language)
}

/// Remove leading/trailing markdown fences from a code body
///
/// Content past a closing fence is discarded; models sometimes append
/// prose after the block and it is never code.
fn strip_fences(body: &str) -> (String, Option<String>) {
    let mut out = body.trim();
    let mut fence_language = None;

    if let Some(stripped) = out.strip_prefix("```") {
        match stripped.split_once('\n') {
            Some((info, tail)) => {
                fence_language = known_language(info);
                out = tail;
            }
            None => {
                fence_language = known_language(stripped);
                out = "";
            }
        }
    }

    let out = match out.find("```") {
        Some(idx) => &out[..idx],
        None => out,
    };

    (out.trim().to_string(), fence_language)
}

/// Normalize a line into a known language tag, if it is one
fn known_language(line: &str) -> Option<String> {
    let candidate = line.trim().to_lowercase();
    KNOWN_LANGUAGES
        .contains(&candidate.as_str())
        .then_some(candidate)
}
