//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Service Ports
//!
//! - `CompletionService` - Remote language model producing counselor replies
//! - `TranscriptionService` - Speech-to-text feeding the chat input
//!
//! ## Utility Ports
//!
//! - `RandomSource` - Injectable randomness (suggested prompts)

mod completion_service;
mod random_source;
mod service_error;
mod transcription_service;

pub use completion_service::{CompletionReply, CompletionRequest, CompletionService, HistoryEntry};
pub use random_source::RandomSource;
pub use service_error::ServiceError;
pub use transcription_service::{AudioClip, Transcript, TranscriptionService};
