//! Chat session - message lifecycle and request correlation for one surface.
//!
//! A session owns an append-only message log seeded with a greeting, and
//! allows exactly one completion request in flight. Sending is split in two
//! phases so the user's message is in the log before any network latency:
//!
//! 1. [`ChatSession::begin_exchange`] validates, appends the user message and
//!    marks the request outstanding.
//! 2. [`ChatSession::complete_exchange`] appends the reply (or the fallback
//!    reply on failure) for that specific request.
//!
//! [`ChatSession::send_message`] runs both around the completion call.
//! Service failures never escape: they become a fallback assistant message
//! plus an [`ErrorMarker`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

use crate::domain::conversation::{
    greeting, ChatError, ChatMessage, ChatStatus, ErrorMarker, FALLBACK_REPLY,
};
use crate::domain::foundation::{MessageId, RequestId, SessionId, StateMachine};
use crate::ports::{
    CompletionReply, CompletionRequest, CompletionService, HistoryEntry, RandomSource,
    ServiceError,
};

use super::pick_suggestion;

/// Prior messages sent with each request when not configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// How a send resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The service answered; the message holds its content.
    Answered(ChatMessage),
    /// The service failed; the message holds the fallback text.
    Fallback(ChatMessage),
}

impl Reply {
    pub fn message(&self) -> &ChatMessage {
        match self {
            Self::Answered(message) | Self::Fallback(message) => message,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// An accepted send whose reply has not been recorded yet.
#[derive(Debug, Clone)]
pub struct PendingExchange {
    request_id: RequestId,
    user_message: ChatMessage,
    request: CompletionRequest,
}

impl PendingExchange {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn user_message(&self) -> &ChatMessage {
        &self.user_message
    }

    /// The request to hand to the completion service.
    pub fn request(&self) -> &CompletionRequest {
        &self.request
    }
}

/// Mutable part of a session, guarded by one lock.
#[derive(Debug)]
struct SessionLog {
    messages: Vec<ChatMessage>,
    status: ChatStatus,
    last_error: Option<ErrorMarker>,
    next_message: MessageId,
    next_request: RequestId,
    in_flight: Option<RequestId>,
}

impl SessionLog {
    fn seeded(greeting: String) -> Self {
        let first = MessageId::first();
        Self {
            messages: vec![ChatMessage::assistant(first, greeting)],
            status: ChatStatus::Idle,
            last_error: None,
            next_message: first.next(),
            next_request: RequestId::first(),
            in_flight: None,
        }
    }

    fn allocate_message_id(&mut self) -> MessageId {
        let id = self.next_message;
        self.next_message = id.next();
        id
    }

    fn allocate_request_id(&mut self) -> RequestId {
        let id = self.next_request;
        self.next_request = id.next();
        id
    }

    fn set_status(&mut self, target: ChatStatus) {
        debug_assert!(
            self.status.can_transition_to(&target),
            "illegal chat transition {:?} -> {:?}",
            self.status,
            target
        );
        self.status = target;
    }
}

/// One chat surface bound to a topic.
pub struct ChatSession {
    id: SessionId,
    topic: String,
    completion: Arc<dyn CompletionService>,
    random: Arc<dyn RandomSource>,
    history_limit: usize,
    log: Mutex<SessionLog>,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("topic", &self.topic)
            .field("history_limit", &self.history_limit)
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    /// Creates a session seeded with the greeting for `topic`.
    pub fn new(
        topic: impl Into<String>,
        completion: Arc<dyn CompletionService>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        let topic = topic.into();
        let log = SessionLog::seeded(greeting(&topic));
        Self {
            id: SessionId::new(),
            topic,
            completion,
            random,
            history_limit: DEFAULT_HISTORY_LIMIT,
            log: Mutex::new(log),
        }
    }

    /// Caps how many prior messages accompany each request.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sending
    // ─────────────────────────────────────────────────────────────────────────

    /// Sends a message and records the reply.
    ///
    /// Returns `Reply::Fallback` when the service fails; the failure itself
    /// is only logged and kept as [`last_error`](Self::last_error).
    ///
    /// If the returned future is dropped before the service answers, the
    /// outstanding request is abandoned: the session returns to `Idle` and
    /// no reply is appended.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `text` is blank after trimming
    /// - `RequestInFlight` if another send is outstanding
    pub async fn send_message(&self, text: &str) -> Result<Reply, ChatError> {
        let pending = self.begin_exchange(text)?;
        let guard = AbandonOnDrop::new(self, pending.request_id);

        let outcome = self.completion.complete(pending.request.clone()).await;

        guard.disarm();
        self.complete_exchange(pending.request_id, outcome)
    }

    /// Validates `text`, appends it as a user message and opens a request.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `text` is blank after trimming; the log is unchanged
    /// - `RequestInFlight` if another request is outstanding
    pub fn begin_exchange(&self, text: &str) -> Result<PendingExchange, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let mut log = self.log();
        if log.in_flight.is_some() || !log.status.accepts_input() {
            return Err(ChatError::RequestInFlight);
        }

        let history = self.history_window(&log.messages);
        let user_message = ChatMessage::user(log.allocate_message_id(), text);
        let request_id = log.allocate_request_id();

        log.messages.push(user_message.clone());
        log.in_flight = Some(request_id);
        log.set_status(ChatStatus::AwaitingResponse);

        debug!(
            session_id = %self.id,
            request_id = %request_id,
            message_id = %user_message.id(),
            "Chat request opened"
        );

        Ok(PendingExchange {
            request_id,
            request: CompletionRequest::new(&self.topic, text).with_history(history),
            user_message,
        })
    }

    /// Records the outcome of the outstanding request.
    ///
    /// # Errors
    ///
    /// - `StaleExchange` if `request_id` is not the outstanding request; the
    ///   log is unchanged
    pub fn complete_exchange(
        &self,
        request_id: RequestId,
        outcome: Result<CompletionReply, ServiceError>,
    ) -> Result<Reply, ChatError> {
        let mut log = self.log();
        if log.in_flight != Some(request_id) {
            return Err(ChatError::StaleExchange(request_id));
        }
        log.in_flight = None;

        let id = log.allocate_message_id();
        let reply = match outcome {
            Ok(reply) => {
                let message = ChatMessage::assistant(id, reply.content);
                log.last_error = None;
                log.set_status(ChatStatus::Idle);
                debug!(session_id = %self.id, request_id = %request_id, "Chat request answered");
                Reply::Answered(message)
            }
            Err(err) => {
                warn!(
                    session_id = %self.id,
                    request_id = %request_id,
                    error = %err,
                    "Completion failed, replying with fallback"
                );
                let message = ChatMessage::assistant(id, FALLBACK_REPLY);
                log.last_error = Some(ErrorMarker::new(request_id, err.to_string()));
                log.set_status(ChatStatus::Errored);
                Reply::Fallback(message)
            }
        };

        log.messages.push(reply.message().clone());
        Ok(reply)
    }

    /// Drops the outstanding request without recording a reply.
    ///
    /// The session returns to `Errored` if an earlier failure is still
    /// marked, otherwise to `Idle`. Returns false if `request_id` was not
    /// outstanding.
    pub fn abandon_exchange(&self, request_id: RequestId) -> bool {
        let mut log = self.log();
        if log.in_flight != Some(request_id) {
            return false;
        }
        log.in_flight = None;
        let status = if log.last_error.is_some() {
            ChatStatus::Errored
        } else {
            ChatStatus::Idle
        };
        log.set_status(status);
        debug!(session_id = %self.id, request_id = %request_id, "Chat request abandoned");
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Snapshot of the log, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.log().messages.clone()
    }

    pub fn message_count(&self) -> usize {
        self.log().messages.len()
    }

    pub fn status(&self) -> ChatStatus {
        self.log().status
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.log().status.is_awaiting_response()
    }

    /// Why the last request failed, until a later one succeeds.
    pub fn last_error(&self) -> Option<ErrorMarker> {
        self.log().last_error.clone()
    }

    /// A conversation starter picked by the session's random source.
    pub fn suggested_prompt(&self) -> &'static str {
        pick_suggestion(self.random.as_ref())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn log(&self) -> MutexGuard<'_, SessionLog> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn history_window(&self, messages: &[ChatMessage]) -> Vec<HistoryEntry> {
        let skip = messages.len().saturating_sub(self.history_limit);
        messages[skip..].iter().map(HistoryEntry::from).collect()
    }
}

/// Abandons the request if `send_message` is cancelled mid-flight.
struct AbandonOnDrop<'a> {
    session: &'a ChatSession,
    request_id: RequestId,
    armed: bool,
}

impl<'a> AbandonOnDrop<'a> {
    fn new(session: &'a ChatSession, request_id: RequestId) -> Self {
        Self {
            session,
            request_id,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for AbandonOnDrop<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.session.abandon_exchange(self.request_id);
        }
    }
}
