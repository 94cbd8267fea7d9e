use serde::{Deserialize, Serialize};

use super::message::ChatMessage;
use super::tool::{Tool, ToolChoice};
use crate::error::AdapterError;

/// Vendor-neutral chat-completion request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate
    ///
    /// Required by validation; optional in the envelope so an absent value
    /// surfaces as a validation error rather than a deserialization error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Conversation messages, in order
    pub messages: Vec<ChatMessage>,
    /// Tool definitions available to the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    /// Directive forcing a specific tool; absent means the model decides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

impl ChatCompletionRequest {
    /// Create a request with the required fields
    pub fn new(model: impl Into<String>, max_tokens: u32, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            max_tokens: Some(max_tokens),
            messages,
            tools: None,
            tool_choice: None,
        }
    }

    /// Attach tool definitions
    #[must_use]
    pub fn with_tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Force invocation of a specific tool
    #[must_use]
    pub fn with_tool_choice(mut self, tool_choice: ToolChoice) -> Self {
        self.tool_choice = Some(tool_choice);
        self
    }

    /// Fail fast on a malformed request, before any network call
    pub fn validate(&self) -> Result<(), AdapterError> {
        if self.model.is_empty() {
            return Err(AdapterError::InvalidRequest("model must not be empty".to_owned()));
        }
        match self.max_tokens {
            None => {
                return Err(AdapterError::InvalidRequest("max_tokens is required".to_owned()));
            }
            Some(0) => {
                return Err(AdapterError::InvalidRequest("max_tokens must be positive".to_owned()));
            }
            Some(_) => {}
        }
        if self.messages.is_empty() {
            return Err(AdapterError::InvalidRequest(
                "messages must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
