//! Completion Service Adapters.
//!
//! Implementations of the CompletionService port.
//!
//! ## Available Adapters
//!
//! - `MockCompletionService` - Configurable mock for testing and offline runs
//! - `ChatCompletionsClient` - OpenAI-compatible chat completions API (Groq by default)

mod chat_completions;
mod mock_completion;

pub use chat_completions::{ChatCompletionsClient, ChatCompletionsConfig};
pub use mock_completion::MockCompletionService;
