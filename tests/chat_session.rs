//! Chat session flows over mock completion and transcription services.

use std::sync::Arc;
use std::time::Duration;

use career_compass::adapters::ai::MockCompletionService;
use career_compass::adapters::random::SequenceSource;
use career_compass::adapters::speech::MockTranscriptionService;
use career_compass::application::chat::{ChatComposer, ChatSession, TranscriptionOutcome};
use career_compass::domain::conversation::{
    greeting, ChatError, ChatStatus, Origin, FALLBACK_REPLY, SUGGESTED_PROMPTS,
};
use career_compass::ports::{AudioClip, ServiceError};

fn session_with(completion: MockCompletionService) -> ChatSession {
    ChatSession::new(
        "Science",
        Arc::new(completion),
        Arc::new(SequenceSource::new(vec![4, 1])),
    )
}

#[tokio::test]
async fn conversation_keeps_full_log_and_sends_history() {
    let completion = MockCompletionService::new()
        .with_reply("Physics and chemistry are core.")
        .with_reply("Engineering or research both fit.");
    let session = session_with(completion.clone());

    session.send_message("What do I study?").await.unwrap();
    let reply = session.send_message("Where can it lead?").await.unwrap();

    assert!(!reply.is_fallback());
    let contents: Vec<String> = session
        .messages()
        .iter()
        .map(|m| m.content().to_string())
        .collect();
    assert_eq!(
        contents,
        vec![
            greeting("Science"),
            "What do I study?".to_string(),
            "Physics and chemistry are core.".to_string(),
            "Where can it lead?".to_string(),
            "Engineering or research both fit.".to_string(),
        ]
    );

    let calls = completion.calls();
    assert_eq!(calls[1].topic, "Science");
    assert_eq!(calls[1].history.len(), 3);
    assert_eq!(calls[1].history[0].origin, Origin::Assistant);
    assert_eq!(session.status(), ChatStatus::Idle);
}

#[tokio::test]
async fn failure_recovers_on_next_send() {
    let completion = MockCompletionService::new()
        .with_error(ServiceError::Timeout { timeout_secs: 30 })
        .with_reply("Back online.");
    let session = session_with(completion);

    let first = session.send_message("Hello?").await.unwrap();
    assert!(first.is_fallback());
    assert_eq!(first.message().content(), FALLBACK_REPLY);
    assert_eq!(session.status(), ChatStatus::Errored);
    assert!(session.last_error().is_some());

    let second = session.send_message("Hello again?").await.unwrap();
    assert!(!second.is_fallback());
    assert_eq!(session.status(), ChatStatus::Idle);
    assert!(session.last_error().is_none());
    assert_eq!(session.message_count(), 5);
}

#[tokio::test]
async fn second_send_is_rejected_while_first_is_pending() {
    let completion = MockCompletionService::new()
        .with_reply("Slow answer")
        .with_delay(Duration::from_millis(200));
    let session = Arc::new(session_with(completion));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.send_message("First").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(session.is_awaiting_response());
    assert_eq!(
        session.send_message("Second").await,
        Err(ChatError::RequestInFlight)
    );

    first.await.unwrap().unwrap();
    assert_eq!(session.message_count(), 3);
}

#[tokio::test]
async fn voice_input_flows_into_a_send() {
    let completion = MockCompletionService::new().with_reply("Try a medical entrance exam.");
    let transcription = MockTranscriptionService::new()
        .with_error(ServiceError::network("mic glitch"))
        .with_text("How do I become a doctor?");
    let session = session_with(completion);
    let mut composer = ChatComposer::new();
    composer.set_draft("typed");

    let clip = || AudioClip::new(vec![1, 2, 3]);
    assert_eq!(
        composer.apply_transcription(&transcription, clip()).await,
        TranscriptionOutcome::Failed
    );
    assert_eq!(composer.draft(), "typed");

    assert_eq!(
        composer.apply_transcription(&transcription, clip()).await,
        TranscriptionOutcome::Applied
    );
    assert_eq!(composer.draft(), "How do I become a doctor?");

    composer.submit(&session).await.unwrap();
    assert_eq!(composer.draft(), "");
    assert_eq!(session.messages()[1].content(), "How do I become a doctor?");
}

#[test]
fn suggestions_follow_random_source() {
    let session = session_with(MockCompletionService::new());
    assert_eq!(session.suggested_prompt(), SUGGESTED_PROMPTS[4]);
    assert_eq!(session.suggested_prompt(), SUGGESTED_PROMPTS[1]);
}
