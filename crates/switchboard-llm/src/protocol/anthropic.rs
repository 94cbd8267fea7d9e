//! Anthropic Messages API wire format types

use serde::{Deserialize, Serialize};

// -- Request types --

/// Anthropic messages API request
///
/// Optional fields are omitted from the serialized body entirely when unset:
/// some providers treat an empty `tools` array differently from an absent
/// one, and an explicit `tool_choice` signals a default the caller never
/// chose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicRequest {
    /// Model identifier
    pub model: String,
    /// Maximum tokens to generate (required by Anthropic)
    pub max_tokens: u32,
    /// Conversation messages
    pub messages: Vec<AnthropicMessage>,
    /// Whether to stream the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    /// Tool definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<AnthropicTool>>,
    /// Forced tool selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<AnthropicToolChoice>,
}

/// Anthropic message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicMessage {
    /// Role ("user" or "assistant")
    pub role: String,
    /// Message text
    pub content: String,
}

/// Anthropic tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicTool {
    /// Tool name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for input parameters
    pub input_schema: serde_json::Value,
}

/// Anthropic tool choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicToolChoice {
    /// Choice type ("tool" when forcing a specific tool)
    #[serde(rename = "type")]
    pub choice_type: String,
    /// Tool name (when type is "tool")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// -- Response types --

/// Anthropic messages API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicResponse {
    /// Response identifier
    pub id: String,
    /// Object type (always "message")
    #[serde(rename = "type")]
    pub response_type: String,
    /// Role (always "assistant")
    pub role: String,
    /// Response content blocks
    pub content: Vec<AnthropicResponseBlock>,
    /// Model used
    pub model: String,
    /// Stop reason
    #[serde(default)]
    pub stop_reason: Option<String>,
    /// Stop sequence that triggered the stop
    #[serde(default)]
    pub stop_sequence: Option<String>,
    /// Token usage
    pub usage: AnthropicUsage,
}

/// Content block in an Anthropic response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicResponseBlock {
    /// Text response
    Text {
        /// The text string
        text: String,
    },
    /// Tool use request
    ToolUse {
        /// Tool use identifier
        id: String,
        /// Tool name
        name: String,
        /// Tool input as JSON
        input: serde_json::Value,
    },
}

/// Anthropic token usage
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnthropicUsage {
    /// Input tokens
    pub input_tokens: u32,
    /// Output tokens
    pub output_tokens: u32,
}

// -- Streaming types --

/// Anthropic SSE event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicStreamEvent {
    /// Stream started
    MessageStart {
        /// Partial message with metadata
        message: serde_json::Value,
    },
    /// New content block started
    ContentBlockStart {
        /// Block index
        index: u32,
        /// Initial block content
        content_block: serde_json::Value,
    },
    /// Incremental content within a block
    ContentBlockDelta {
        /// Block index
        index: u32,
        /// Delta content
        delta: AnthropicStreamDelta,
    },
    /// Content block finished
    ContentBlockStop {
        /// Block index
        index: u32,
    },
    /// Message metadata delta (stop reason, usage)
    MessageDelta {
        /// Delta with stop reason
        delta: serde_json::Value,
        /// Updated usage
        #[serde(default)]
        usage: Option<AnthropicUsage>,
    },
    /// Stream completed
    MessageStop,
    /// Ping event for keep-alive
    Ping,
}

/// Delta content in a `content_block_delta` event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnthropicStreamDelta {
    /// Incremental text
    TextDelta {
        /// Text fragment
        text: String,
    },
    /// Incremental tool input JSON
    InputJsonDelta {
        /// JSON fragment
        partial_json: String,
    },
}

// -- Error response --

/// Anthropic error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicErrorResponse {
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error details
    pub error: AnthropicErrorDetail,
}

/// Anthropic error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicErrorDetail {
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message
    pub message: String,
}
