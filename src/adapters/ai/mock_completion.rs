//! Mock Completion Service for testing.
//!
//! Provides a configurable mock implementation of the CompletionService port,
//! allowing tests and local runs without calling a real model.
//!
//! # Features
//!
//! - Pre-configured replies, consumed in order
//! - Simulated latency for in-flight testing
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockCompletionService::new()
//!     .with_reply("Engineering needs strong maths.")
//!     .with_error(ServiceError::status(500, "boom"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{CompletionReply, CompletionRequest, CompletionService, ServiceError};

/// Reply used once the configured queue is empty.
const DEFAULT_REPLY: &str = "Mock response";

/// Mock completion service.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionService {
    responses: Arc<Mutex<VecDeque<Result<CompletionReply, ServiceError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Ok(CompletionReply::new(content)));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: ServiceError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded requests, oldest first.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        lock(&self.calls).clone()
    }

    fn next_response(&self) -> Result<CompletionReply, ServiceError> {
        lock(&self.responses)
            .pop_front()
            .unwrap_or_else(|| Ok(CompletionReply::new(DEFAULT_REPLY)))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl CompletionService for MockCompletionService {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, ServiceError> {
        lock(&self.calls).push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }
}
