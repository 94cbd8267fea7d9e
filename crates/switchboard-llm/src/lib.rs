//! Core adapter crate for Switchboard
//!
//! Accepts chat-completion requests in a vendor-neutral schema and translates
//! them into the wire shape a specific backend provider expects, then hands
//! the assembled request to that provider's transport. Responses are returned
//! as the provider's native JSON; a minimal normalization helper is available
//! for callers that only need the generated text.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod convert;
pub mod error;
pub mod protocol;
pub mod provider;
pub mod registry;
pub mod types;

pub use error::AdapterError;
pub use provider::{Provider, ProviderCapabilities};
pub use registry::{ProviderKind, build_provider, supported};
pub use types::{ChatCompletionRequest, ChatMessage, Completion, Role, Tool, ToolChoice};
