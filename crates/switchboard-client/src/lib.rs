#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Caller-facing facade for the Switchboard LLM adapter
//!
//! Construction resolves the provider and credentials synchronously; the
//! returned client threads each request through translation and transport
//! and hands back the provider's native response.

mod client;

pub use client::Client;
pub use switchboard_config::{AdapterConfig, CredentialResolver};
pub use switchboard_llm::types::FunctionSpec;
pub use switchboard_llm::{
    AdapterError, ChatCompletionRequest, ChatMessage, Completion, Role, Tool, ToolChoice,
};
