//! Vendor-neutral types for chat-completion requests
//!
//! These are the caller-facing shapes, modeled on the widely used
//! chat-completion convention (model, max_tokens, messages, tools,
//! tool_choice) so callers migrating from that ecosystem need no
//! request-shape changes. They are immutable per call and carry no behavior
//! beyond fail-fast validation.

pub mod completion;
pub mod message;
pub mod request;
pub mod tool;

pub use completion::{Completion, Usage};
pub use message::{ChatMessage, Role};
pub use request::ChatCompletionRequest;
pub use tool::{FunctionSpec, Tool, ToolChoice, ToolChoiceFunction};
