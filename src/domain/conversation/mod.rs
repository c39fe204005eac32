//! Conversation domain module.
//!
//! Message log entries, the chat status machine, and the fixed counselor copy
//! (greeting, fallback reply, suggestions, system prompt).

mod counselor;
mod errors;
mod message;
mod prompts;
mod state;

pub use counselor::{stream_description, system_prompt};
pub use errors::ChatError;
pub use message::{ChatMessage, Origin};
pub use prompts::{greeting, FALLBACK_REPLY, SUGGESTED_PROMPTS};
pub use state::{ChatStatus, ErrorMarker};
