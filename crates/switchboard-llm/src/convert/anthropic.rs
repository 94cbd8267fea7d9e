//! Conversion between the neutral request model and the Anthropic wire format
//!
//! Mapping table:
//!
//! | Neutral field                | Wire field       | Transform                      |
//! |------------------------------|------------------|--------------------------------|
//! | `role: system`               | `role`           | forced to `user`               |
//! | `role: user` / `assistant`   | `role`           | identity                       |
//! | `tool.function.parameters`   | `input_schema`   | renamed, structurally identical|
//! | `tool_choice.function.name`  | `tool_choice`    | name only; omitted if absent   |
//! | `tools` (empty or absent)    | `tools`          | omitted entirely               |

use crate::protocol::anthropic::{
    AnthropicMessage, AnthropicRequest, AnthropicResponse, AnthropicResponseBlock, AnthropicTool,
    AnthropicToolChoice,
};
use crate::types::{ChatCompletionRequest, Completion, Role, Usage};

impl From<&ChatCompletionRequest> for AnthropicRequest {
    fn from(req: &ChatCompletionRequest) -> Self {
        let messages = req
            .messages
            .iter()
            .map(|msg| AnthropicMessage {
                // The neutral system role has no in-sequence analogue on this
                // wire; remap the tag in place, keeping order and content
                // untouched.
                role: match msg.role {
                    Role::Assistant => "assistant".to_owned(),
                    Role::User | Role::System => "user".to_owned(),
                },
                content: msg.content.clone(),
            })
            .collect();

        // Attach tools only when the set is non-empty; an empty array is not
        // equivalent to an absent field on this wire.
        let tools = req
            .tools
            .as_ref()
            .filter(|tools| !tools.is_empty())
            .map(|tools| {
                tools
                    .iter()
                    .map(|tool| AnthropicTool {
                        name: tool.function.name.clone(),
                        description: tool.function.description.clone(),
                        // Renamed field, structurally identical payload;
                        // nothing is elided or filled in.
                        input_schema: tool.function.parameters.clone(),
                    })
                    .collect()
            });

        let tool_choice = req.tool_choice.as_ref().map(|choice| AnthropicToolChoice {
            choice_type: "tool".to_owned(),
            name: Some(choice.function.name.clone()),
        });

        Self {
            model: req.model.clone(),
            // Callers reach this conversion through validate(), which
            // guarantees max_tokens is present; 0 is unreachable filler.
            max_tokens: req.max_tokens.unwrap_or(0),
            messages,
            stream: None,
            tools,
            tool_choice,
        }
    }
}

/// Flatten a raw Anthropic response into the minimal normalized shape
pub fn normalize_response(resp: &AnthropicResponse) -> Completion {
    let mut content = String::new();
    for block in &resp.content {
        if let AnthropicResponseBlock::Text { text } = block {
            content.push_str(text);
        }
    }

    Completion {
        id: resp.id.clone(),
        model: resp.model.clone(),
        content,
        stop_reason: resp.stop_reason.clone(),
        usage: Usage {
            input_tokens: resp.usage.input_tokens,
            output_tokens: resp.usage.output_tokens,
        },
    }
}
