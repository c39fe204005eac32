//! Chat Completions Client - CompletionService over an OpenAI-compatible API.
//!
//! Defaults to Groq's hosted endpoint. Every request carries the counselor
//! system prompt for the session topic, then the history, then the new user
//! message.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ChatCompletionsConfig::new(api_key)
//!     .with_model("llama-3.1-8b-instant")
//!     .with_base_url("https://api.groq.com/openai/v1");
//!
//! let client = ChatCompletionsClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::AiConfig;
use crate::domain::conversation::{system_prompt, Origin};
use crate::ports::{CompletionReply, CompletionRequest, CompletionService, ServiceError};

/// Configuration for the chat completions client.
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    api_key: Secret<String>,
    pub model: String,
    /// Base URL without the `/chat/completions` suffix.
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
    /// First backoff delay; doubles on each retry.
    pub retry_base_delay: Duration,
}

impl ChatCompletionsConfig {
    /// Creates a configuration with Groq defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "llama-3.1-8b-instant".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout: Duration::from_secs(60),
            max_retries: 2,
            retry_base_delay: Duration::from_secs(1),
        }
    }

    /// Builds client configuration from application config.
    ///
    /// # Errors
    ///
    /// - `NotConfigured` if no API key is set
    pub fn from_app_config(config: &AiConfig) -> Result<Self, ServiceError> {
        let api_key = config
            .api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ServiceError::not_configured("completion API key is missing"))?;

        Ok(Self::new(api_key)
            .with_model(&config.model)
            .with_base_url(&config.base_url)
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens)
            .with_timeout(config.timeout())
            .with_max_retries(config.max_retries))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI-compatible chat completions client.
pub struct ChatCompletionsClient {
    config: ChatCompletionsConfig,
    client: Client,
}

impl ChatCompletionsClient {
    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// - `NotConfigured` if the HTTP client cannot be built
    pub fn new(config: ChatCompletionsConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::not_configured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ChatCompletionsConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts a port request into the wire format.
    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        let mut messages = Vec::with_capacity(request.history.len() + 2);

        messages.push(WireMessage::new("system", system_prompt(&request.topic)));
        for entry in &request.history {
            let role = match entry.origin {
                Origin::User => "user",
                Origin::Assistant => "assistant",
            };
            messages.push(WireMessage::new(role, entry.content.clone()));
        }
        messages.push(WireMessage::new("user", request.message.clone()));

        WireRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, ServiceError> {
        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&self.to_wire_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    ServiceError::network(format!("Connection failed: {}", e))
                } else {
                    ServiceError::network(e.to_string())
                }
            })
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionReply, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::status(status.as_u16(), body));
        }

        let wire: WireResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::malformed(format!("Failed to parse response: {}", e)))?;

        let content = wire
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ServiceError::malformed("No message content in response"))?;

        Ok(CompletionReply::new(content))
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<CompletionReply, ServiceError> {
        let response = self.send_request(request).await?;
        self.parse_response(response).await
    }
}

#[async_trait]
impl CompletionService for ChatCompletionsClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, ServiceError> {
        let mut retry_count = 0;

        loop {
            match self.attempt(&request).await {
                Ok(reply) => {
                    debug!(model = %self.config.model, retries = retry_count, "Completion received");
                    return Ok(reply);
                }
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    // Exponential backoff: base, 2x base, 4x base, ...
                    let delay = self.config.retry_base_delay * (1u32 << retry_count.min(16));
                    warn!(
                        error = %err,
                        attempt = retry_count + 1,
                        delay_ms = delay.as_millis() as u64,
                        "Completion failed, retrying"
                    );
                    sleep(delay).await;
                    retry_count += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

// ----- Wire Types -----

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

impl WireMessage {
    fn new(role: &'static str, content: String) -> Self {
        Self { role, content }
    }
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireReplyMessage,
}

#[derive(Debug, Deserialize)]
struct WireReplyMessage {
    content: Option<String>,
}
