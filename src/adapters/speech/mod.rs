//! Transcription Service Adapters.
//!
//! - `HttpTranscriptionClient` - JSON speech-to-text endpoint
//! - `MockTranscriptionService` - Queued results for testing

mod http_transcription;
mod mock_transcription;

pub use http_transcription::HttpTranscriptionClient;
pub use mock_transcription::MockTranscriptionService;
