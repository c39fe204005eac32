//! HTTP Transcription Client - TranscriptionService over a JSON endpoint.
//!
//! Sends `{"audio": <base64>, "mime_type": ...}` and expects `{"text": ...}`.
//! With no endpoint configured every call fails with `NotConfigured`, so the
//! chat still works with typed input only.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::TranscriptionConfig;
use crate::ports::{AudioClip, ServiceError, Transcript, TranscriptionService};

/// Speech-to-text client.
pub struct HttpTranscriptionClient {
    endpoint: Option<String>,
    api_key: Option<Secret<String>>,
    timeout: Duration,
    client: Client,
}

impl HttpTranscriptionClient {
    /// Creates a client for `endpoint`; `None` disables transcription.
    ///
    /// # Errors
    ///
    /// - `NotConfigured` if the HTTP client cannot be built
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::not_configured(format!("HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.filter(|e| !e.trim().is_empty()),
            api_key: None,
            timeout,
            client,
        })
    }

    pub fn from_app_config(config: &TranscriptionConfig) -> Result<Self, ServiceError> {
        let mut client = Self::new(config.endpoint.clone(), config.timeout())?;
        client.api_key = config
            .api_key
            .clone()
            .filter(|k| !k.expose_secret().trim().is_empty());
        Ok(client)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }
}

#[async_trait]
impl TranscriptionService for HttpTranscriptionClient {
    async fn transcribe(&self, clip: AudioClip) -> Result<Transcript, ServiceError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| ServiceError::not_configured("no transcription endpoint"))?;

        let body = WireRequest {
            audio: STANDARD.encode(&clip.bytes),
            mime_type: &clip.mime_type,
        };

        let mut request = self.client.post(endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                ServiceError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::status(status.as_u16(), body));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::malformed(format!("Failed to parse transcript: {}", e)))?;

        let text = wire
            .text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ServiceError::malformed("Transcript has no text"))?;

        debug!(bytes = clip.bytes.len(), chars = text.len(), "Clip transcribed");
        Ok(Transcript::new(text))
    }
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    audio: String,
    mime_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> AudioClip {
        AudioClip::new(b"webm-bytes".to_vec())
    }

    fn client_for(server: &mockito::Server) -> HttpTranscriptionClient {
        HttpTranscriptionClient::new(
            Some(format!("{}/functions/v1/speech-to-text", server.url())),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn disabled_client_is_not_configured() {
        let client = HttpTranscriptionClient::new(None, Duration::from_secs(5)).unwrap();
        assert!(!client.is_enabled());
        assert!(matches!(
            client.transcribe(clip()).await,
            Err(ServiceError::NotConfigured(_))
        ));
    }

    #[tokio::test]
    async fn sends_base64_audio_and_reads_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/functions/v1/speech-to-text")
            .match_header("authorization", "Bearer speech-key")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "audio": STANDARD.encode(b"webm-bytes"),
                "mime_type": "audio/webm"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"text": "Which colleges are best?"}"#)
            .create_async()
            .await;

        let transcript = client_for(&server)
            .with_api_key("speech-key")
            .transcribe(clip())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(transcript.text, "Which colleges are best?");
    }

    #[tokio::test]
    async fn configured_key_is_sent_as_bearer() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/stt")
            .match_header("authorization", "Bearer from-config")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"text": "hello"}"#)
            .create_async()
            .await;
        let config = TranscriptionConfig {
            endpoint: Some(format!("{}/stt", server.url())),
            api_key: Some(Secret::new("from-config".to_string())),
            ..Default::default()
        };

        let client = HttpTranscriptionClient::from_app_config(&config).unwrap();
        let transcript = client.transcribe(clip()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(transcript.text, "hello");
    }

    #[tokio::test]
    async fn error_status_is_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/functions/v1/speech-to-text")
            .with_status(500)
            .with_body(r#"{"error": "decoder failed"}"#)
            .create_async()
            .await;

        let result = client_for(&server).transcribe(clip()).await;
        assert!(matches!(result, Err(ServiceError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn missing_text_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/functions/v1/speech-to-text")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"text": "  "}"#)
            .create_async()
            .await;

        let result = client_for(&server).transcribe(clip()).await;
        assert!(matches!(result, Err(ServiceError::MalformedPayload(_))));
    }
}
