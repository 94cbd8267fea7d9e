use serde::{Deserialize, Serialize};

/// Definition of a tool the model may call
///
/// A set of tools is unique by function name within one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Tool type (currently always "function")
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Function specification
    pub function: FunctionSpec,
}

impl Tool {
    /// Create a function tool from its specification
    pub fn function(function: FunctionSpec) -> Self {
        Self {
            tool_type: "function".to_owned(),
            function,
        }
    }
}

/// Specification of a callable function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Unique function name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema object describing the parameters
    ///
    /// Required: a tool without a schema is not representable. Carried
    /// opaquely; the translation layer never rewrites, elides, or
    /// default-fills this value.
    pub parameters: serde_json::Value,
}

/// Directive forcing the model to invoke one specific tool
///
/// The referenced function name must appear among the request's tools; the
/// adapter neither pre-validates nor silently repairs a mismatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolChoice {
    /// Must be "function"
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Function to invoke
    pub function: ToolChoiceFunction,
}

impl ToolChoice {
    /// Force invocation of the named function
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            tool_type: "function".to_owned(),
            function: ToolChoiceFunction { name: name.into() },
        }
    }
}

/// Function name reference within a forced tool choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolChoiceFunction {
    /// Name of the function to invoke
    pub name: String,
}
