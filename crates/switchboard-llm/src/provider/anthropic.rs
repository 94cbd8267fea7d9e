//! Anthropic Messages API provider implementation

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::StreamExt;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{FragmentStream, Provider, ProviderCapabilities};
use crate::convert::anthropic::normalize_response;
use crate::error::AdapterError;
use crate::protocol::anthropic::{
    AnthropicErrorResponse, AnthropicRequest, AnthropicResponse, AnthropicStreamDelta,
    AnthropicStreamEvent,
};
use crate::types::{ChatCompletionRequest, Completion};

/// Default Anthropic API base URL
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Anthropic API version header value
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV_VAR: &str = "ANTHROPIC_API_KEY";

/// Anthropic Messages API provider
pub struct AnthropicProvider {
    name: String,
    client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl AnthropicProvider {
    /// Create a provider with a resolved API key and optional base URL override
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(name: String, api_key: SecretString, base_url: Option<Url>) -> Self {
        let base_url =
            base_url.unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        Self {
            name,
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Build the messages endpoint URL
    fn messages_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/messages")
    }

    /// POST the wire request, mapping failures and non-success statuses
    async fn send(&self, wire_request: &AnthropicRequest) -> Result<reqwest::Response, AdapterError> {
        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", self.api_key.expose_secret())
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(provider = %self.name, error = %e, "upstream request failed");
                AdapterError::Transport(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = %self.name, status = %status, "upstream returned error");
            // Surface the provider's own message when the body parses as an
            // Anthropic error envelope, the raw body otherwise.
            let detail = serde_json::from_str::<AnthropicErrorResponse>(&body)
                .map_or(body, |err| err.error.message);
            return Err(AdapterError::Transport(format!("provider returned {status}: {detail}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            streaming: true,
            tool_calling: true,
        }
    }

    fn translate_request(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value, AdapterError> {
        request.validate()?;
        let wire_request = AnthropicRequest::from(request);
        serde_json::to_value(&wire_request)
            .map_err(|e| AdapterError::InvalidRequest(format!("failed to serialize request: {e}")))
    }

    async fn complete(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value, AdapterError> {
        request.validate()?;
        let wire_request = AnthropicRequest::from(request);

        let response = self.send(&wire_request).await?;

        // Pass-through by contract: the raw provider body goes back to the
        // caller without reshaping.
        response
            .json()
            .await
            .map_err(|e| AdapterError::Transport(format!("failed to parse response: {e}")))
    }

    async fn complete_stream(&self, request: &ChatCompletionRequest) -> Result<FragmentStream, AdapterError> {
        request.validate()?;
        let mut wire_request = AnthropicRequest::from(request);
        wire_request.stream = Some(true);

        let response = self.send(&wire_request).await?;

        let event_stream = response.bytes_stream().eventsource();

        let fragments = event_stream.filter_map(|result| {
            let item: Option<Result<String, AdapterError>> = match result {
                Ok(event) => {
                    let data = event.data.trim();
                    if data.is_empty() {
                        None
                    } else {
                        match serde_json::from_str::<AnthropicStreamEvent>(data) {
                            Ok(AnthropicStreamEvent::ContentBlockDelta {
                                delta: AnthropicStreamDelta::TextDelta { text },
                                ..
                            }) => Some(Ok(text)),
                            Ok(_) => None,
                            Err(e) => {
                                tracing::debug!(error = %e, "skipping unparseable SSE event");
                                None
                            }
                        }
                    }
                }
                Err(e) => Some(Err(AdapterError::Streaming(e.to_string()))),
            };

            async move { item }
        });

        Ok(Box::pin(fragments))
    }

    fn normalize_response(&self, raw: &serde_json::Value) -> Result<Completion, AdapterError> {
        let response: AnthropicResponse = serde_json::from_value(raw.clone())
            .map_err(|e| AdapterError::Transport(format!("unrecognized response shape: {e}")))?;
        Ok(normalize_response(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    fn provider() -> AnthropicProvider {
        AnthropicProvider::new("anthropic".to_owned(), SecretString::from("sk-test"), None)
    }

    #[test]
    fn messages_url_joins_without_double_slash() {
        let p = AnthropicProvider::new(
            "anthropic".to_owned(),
            SecretString::from("sk-test"),
            Some(Url::parse("http://localhost:9999/v1/").unwrap()),
        );
        assert_eq!(p.messages_url(), "http://localhost:9999/v1/messages");
    }

    #[test]
    fn translate_request_rejects_invalid_input() {
        let req = ChatCompletionRequest {
            model: "claude-sonnet-4-20250514".to_owned(),
            max_tokens: None,
            messages: vec![ChatMessage::user("hi")],
            tools: None,
            tool_choice: None,
        };
        let err = provider().translate_request(&req).unwrap_err();
        assert_eq!(err.error_type(), "invalid_request_error");
    }

    #[test]
    fn translate_request_yields_wire_json() {
        let req = ChatCompletionRequest::new(
            "claude-sonnet-4-20250514",
            256,
            vec![ChatMessage::system("s"), ChatMessage::user("u")],
        );
        let wire = provider().translate_request(&req).unwrap();
        assert_eq!(wire["model"], "claude-sonnet-4-20250514");
        assert_eq!(wire["max_tokens"], 256);
        assert_eq!(wire["messages"][0]["role"], "user");
        assert!(wire.get("tools").is_none());
        assert!(wire.get("tool_choice").is_none());
    }

    #[test]
    fn normalize_rejects_foreign_shapes() {
        let err = provider()
            .normalize_response(&serde_json::json!({"object": "chat.completion"}))
            .unwrap_err();
        assert_eq!(err.error_type(), "transport_error");
    }
}
