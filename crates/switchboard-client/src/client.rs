use std::fmt;
use std::sync::Arc;

use futures_util::StreamExt;
use switchboard_config::{AdapterConfig, CredentialResolver};
use switchboard_llm::provider::ProviderCapabilities;
use switchboard_llm::{AdapterError, ChatCompletionRequest, Completion, Provider, build_provider};

/// Client bound to one provider backend
///
/// Holds no mutable state; concurrent invocations are independent and may be
/// issued from multiple tasks. Callers needing ordered delivery within a
/// conversation must serialize their own calls.
#[derive(Clone)]
pub struct Client {
    provider: Arc<dyn Provider>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl Client {
    /// Create a client for the configured provider
    ///
    /// Fails synchronously on an unrecognized provider identifier or a
    /// missing API key; no network activity occurs. Credentials fall back to
    /// the provider's well-known environment variable.
    pub fn new(config: &AdapterConfig) -> Result<Self, AdapterError> {
        Self::with_credentials(config, &CredentialResolver::from_env())
    }

    /// Create a client with an injected credential source
    pub fn with_credentials(
        config: &AdapterConfig,
        credentials: &CredentialResolver,
    ) -> Result<Self, AdapterError> {
        let provider = build_provider(config, credentials)?;
        Ok(Self { provider })
    }

    /// Name of the bound provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Capabilities of the bound provider
    pub fn capabilities(&self) -> ProviderCapabilities {
        self.provider.capabilities()
    }

    /// Translate a request into the provider's wire shape without sending it
    pub fn translate_request(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value, AdapterError> {
        self.provider.translate_request(request)
    }

    /// Send a completion request, returning the provider's native response
    ///
    /// The request is validated and translated before any network call;
    /// transport failures propagate unchanged.
    pub async fn invoke(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value, AdapterError> {
        self.provider.complete(request).await
    }

    /// Send a streaming completion request, feeding text fragments to `sink`
    ///
    /// Fragments arrive in generation order, one at a time, with no size
    /// guarantee. Returns the accumulated text once the stream ends. Errors
    /// mid-stream (including cancellation surfaced by the transport) abort
    /// the drive and propagate.
    pub async fn invoke_streaming<F>(
        &self,
        request: &ChatCompletionRequest,
        mut sink: F,
    ) -> Result<String, AdapterError>
    where
        F: FnMut(&str),
    {
        let mut stream = self.provider.complete_stream(request).await?;
        let mut accumulated = String::new();

        while let Some(fragment) = stream.next().await {
            let fragment = fragment?;
            sink(&fragment);
            accumulated.push_str(&fragment);
        }

        Ok(accumulated)
    }

    /// Minimally normalize a raw response returned by [`Client::invoke`]
    pub fn normalize(&self, raw: &serde_json::Value) -> Result<Completion, AdapterError> {
        self.provider.normalize_response(raw)
    }
}
