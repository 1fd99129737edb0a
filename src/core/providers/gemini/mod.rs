//! Gemini text-generation provider

mod client;

pub use client::GeminiClient;
