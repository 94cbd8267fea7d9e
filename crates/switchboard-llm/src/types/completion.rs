use serde::{Deserialize, Serialize};

/// Minimally normalized completion
///
/// `invoke` deliberately returns the provider's native response unchanged;
/// this shape is an opt-in convenience for callers that only need the
/// generated text and basic accounting, produced by
/// [`crate::provider::Provider::normalize_response`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    /// Provider-assigned response identifier
    pub id: String,
    /// Model that produced the response
    pub model: String,
    /// Concatenated text content
    pub content: String,
    /// Provider's stop reason, verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    /// Token accounting
    pub usage: Usage,
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub input_tokens: u32,
    /// Tokens generated in the completion
    pub output_tokens: u32,
}
