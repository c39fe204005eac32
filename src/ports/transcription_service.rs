//! Transcription Service Port - speech-to-text for the chat input.

use async_trait::async_trait;

use super::ServiceError;

/// Port for converting a short recorded clip into text.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn transcribe(&self, clip: AudioClip) -> Result<Transcript, ServiceError>;
}

/// A recorded clip as captured by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl AudioClip {
    /// Browsers record to WebM by default.
    pub const DEFAULT_MIME_TYPE: &'static str = "audio/webm";

    pub fn new(bytes: Vec<u8>) -> Self {
        Self::with_mime_type(bytes, Self::DEFAULT_MIME_TYPE)
    }

    pub fn with_mime_type(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Text recognised in a clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
}

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True if nothing but whitespace was recognised.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
