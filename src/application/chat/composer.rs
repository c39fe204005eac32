//! Chat composer - the input draft and the speech-to-text bridge.
//!
//! Transcribed text lands in the draft exactly like typed text and goes
//! through the same `send_message` validation when submitted.

use tracing::{debug, warn};

use super::{ChatSession, Reply};
use crate::domain::conversation::ChatError;
use crate::ports::{AudioClip, TranscriptionService};

/// Result of feeding a recording into the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionOutcome {
    /// The draft now holds the transcript.
    Applied,
    /// The service recognised nothing; the draft is unchanged.
    Blank,
    /// The service failed; the draft is unchanged.
    Failed,
}

/// Input box state for one chat surface.
#[derive(Debug, Clone, Default)]
pub struct ChatComposer {
    draft: String,
}

impl ChatComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Transcribes `clip` and, if anything was recognised, replaces the draft.
    ///
    /// Failures are logged and never reach the message log.
    pub async fn apply_transcription(
        &mut self,
        service: &dyn TranscriptionService,
        clip: AudioClip,
    ) -> TranscriptionOutcome {
        match service.transcribe(clip).await {
            Ok(transcript) if transcript.is_blank() => {
                debug!("Transcription returned no text, keeping draft");
                TranscriptionOutcome::Blank
            }
            Ok(transcript) => {
                self.draft = transcript.text;
                TranscriptionOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "Transcription failed, keeping draft");
                TranscriptionOutcome::Failed
            }
        }
    }

    /// Sends the draft through `session`, clearing it once accepted.
    ///
    /// The draft is kept when the send is rejected.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if the draft is blank
    /// - `RequestInFlight` if the session is awaiting a reply
    pub async fn submit(&mut self, session: &ChatSession) -> Result<Reply, ChatError> {
        let reply = session.send_message(&self.draft).await?;
        self.draft.clear();
        Ok(reply)
    }
}
