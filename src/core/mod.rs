//! Core functionality for the gateway
//!
//! Domain services (generation, transcription, translation) and the
//! upstream engine clients they drive. Handlers own HTTP concerns; the
//! services here own retries, probing, and parsing.

pub mod audio;
pub mod generation;
pub mod providers;
pub mod transcription;
pub mod translation;
