use thiserror::Error;

/// Errors that can occur during adapter operations
///
/// No variant is retried internally; retry, backoff, and rate-limit policy
/// belong to a wrapping layer.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Named provider is not recognized by the registry
    #[error("unsupported provider: {provider}")]
    UnsupportedProvider { provider: String },

    /// No API key was supplied and the fallback credential source is empty
    #[error("missing API key for provider: {provider}")]
    MissingApiKey { provider: String },

    /// Caller sent a malformed request, detected before any network call
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure, propagated unchanged from the underlying call
    #[error("transport error: {0}")]
    Transport(String),

    /// Error during streaming response delivery
    #[error("streaming error: {0}")]
    Streaming(String),
}

impl AdapterError {
    /// Stable code string distinguishing error classes for callers
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnsupportedProvider { .. } | Self::MissingApiKey { .. } => "configuration_error",
            Self::InvalidRequest(_) => "invalid_request_error",
            Self::Transport(_) => "transport_error",
            Self::Streaming(_) => "streaming_error",
        }
    }
}
