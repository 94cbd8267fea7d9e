//! Provider trait and implementations for LLM backends

pub mod anthropic;

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use crate::error::AdapterError;
use crate::types::{ChatCompletionRequest, Completion};

/// Ordered stream of text fragments from a streaming completion
///
/// Fragments arrive in generation order with no guarantee of size.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String, AdapterError>> + Send>>;

/// Capabilities advertised by a provider
#[derive(Debug, Clone, Copy)]
pub struct ProviderCapabilities {
    /// Whether the provider supports streaming responses
    pub streaming: bool,
    /// Whether the provider supports tool/function calling
    pub tool_calling: bool,
}

/// Trait implemented by each LLM provider backend
///
/// Implementations hold no mutable state; concurrent invocations are
/// independent. Transport failures propagate unchanged so callers can apply
/// their own retry policy.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider identifier as registered
    fn name(&self) -> &str;

    /// Advertised capabilities
    fn capabilities(&self) -> ProviderCapabilities;

    /// Translate a neutral request into this provider's wire shape
    ///
    /// Pure apart from validation; performs no network activity. Exposed so
    /// callers can inspect the exact body `complete` would send.
    fn translate_request(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value, AdapterError>;

    /// Send a non-streaming completion request
    ///
    /// Returns the provider's native response JSON unchanged.
    async fn complete(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value, AdapterError>;

    /// Send a streaming completion request
    async fn complete_stream(&self, request: &ChatCompletionRequest) -> Result<FragmentStream, AdapterError>;

    /// Minimally normalize a raw response from `complete`
    fn normalize_response(&self, raw: &serde_json::Value) -> Result<Completion, AdapterError>;
}
