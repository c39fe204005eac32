//! Chat application services.
//!
//! - `ChatSession` - message log, request correlation, in-flight guard
//! - `ChatComposer` - input draft and transcription bridge
//! - `pick_suggestion` - random conversation starter

mod composer;
mod session;

pub use composer::{ChatComposer, TranscriptionOutcome};
pub use session::{ChatSession, PendingExchange, Reply, DEFAULT_HISTORY_LIMIT};

use crate::domain::conversation::SUGGESTED_PROMPTS;
use crate::ports::RandomSource;

/// Picks one suggested prompt using `random`.
pub fn pick_suggestion(random: &dyn RandomSource) -> &'static str {
    let index = random.index_below(SUGGESTED_PROMPTS.len());
    SUGGESTED_PROMPTS
        .get(index)
        .copied()
        .unwrap_or(SUGGESTED_PROMPTS[0])
}
