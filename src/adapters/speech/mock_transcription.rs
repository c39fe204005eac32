//! Mock Transcription Service for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ports::{AudioClip, ServiceError, Transcript, TranscriptionService};

/// Mock speech-to-text returning queued results in order.
///
/// An empty queue yields `NotConfigured`, like a client without endpoint.
#[derive(Debug, Clone, Default)]
pub struct MockTranscriptionService {
    results: Arc<Mutex<VecDeque<Result<Transcript, ServiceError>>>>,
    clips: Arc<Mutex<Vec<AudioClip>>>,
}

impl MockTranscriptionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        lock(&self.results).push_back(Ok(Transcript::new(text)));
        self
    }

    pub fn with_error(self, error: ServiceError) -> Self {
        lock(&self.results).push_back(Err(error));
        self
    }

    /// Clips received so far.
    pub fn clips(&self) -> Vec<AudioClip> {
        lock(&self.clips).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl TranscriptionService for MockTranscriptionService {
    async fn transcribe(&self, clip: AudioClip) -> Result<Transcript, ServiceError> {
        lock(&self.clips).push(clip);
        lock(&self.results)
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::not_configured("mock has no queued transcript")))
    }
}
