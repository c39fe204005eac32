//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - completion service over an OpenAI-compatible API, plus a mock
//! - `speech` - transcription over HTTP, plus a mock
//! - `random` - thread RNG and deterministic sequences
//! - `http` - axum routes

pub mod ai;
pub mod http;
pub mod random;
pub mod speech;

pub use ai::{ChatCompletionsClient, ChatCompletionsConfig, MockCompletionService};
pub use random::{SequenceSource, ThreadRngSource};
pub use speech::{HttpTranscriptionClient, MockTranscriptionService};
