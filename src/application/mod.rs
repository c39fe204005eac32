//! Application layer - orchestration over ports.
//!
//! Domain types stay pure; this layer wires them to the completion,
//! transcription and randomness ports.

pub mod chat;

pub use chat::{ChatComposer, ChatSession, PendingExchange, Reply, TranscriptionOutcome};
